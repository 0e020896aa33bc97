use crate::{
    auth::{
        generate_token, hash_password, verify_password, SigninRequest, SigninResponse,
        SignupRequest, TokenKeys,
    },
    config::Config,
    error::AppError,
    models::MessageResponse,
    store::Store,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates the account and answers `201 {message}`. No token is returned; the
/// client signs in separately. A taken email is reported by the store's
/// uniqueness check as `AppError::DuplicateEmail`.
#[post("/signup")]
pub async fn signup(
    store: web::Data<dyn Store>,
    config: web::Data<Config>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    signup_data.validate()?;

    let password_hash = hash_password(&signup_data.password, config.bcrypt_cost)?;
    let user = store.create_user(&signup_data.email, &password_hash).await?;
    log::info!("registered user {}", user.id);

    Ok(HttpResponse::Created().json(MessageResponse::new("User created successfully")))
}

/// Sign in
///
/// Checks the password against the stored bcrypt hash and answers with a signed
/// bearer token. Unknown email and wrong password produce the same error.
#[post("/signin")]
pub async fn signin(
    store: web::Data<dyn Store>,
    keys: web::Data<TokenKeys>,
    signin_data: web::Json<SigninRequest>,
) -> Result<impl Responder, AppError> {
    signin_data.validate()?;

    let user = store
        .find_user_by_email(&signin_data.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&signin_data.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = generate_token(&keys, user.id)?;
    Ok(HttpResponse::Ok().json(SigninResponse {
        token,
        message: "Sign-in successful".into(),
    }))
}
