use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// The acting user of an authenticated request.
///
/// Built from the `Claims` that `AuthMiddleware` stores in the request extensions.
/// On a route the middleware did not cover the claims are absent and extraction
/// fails with `AppError::MissingCredential`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
}

impl FromRequest for Identity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(Identity {
                user_id: claims.user_id,
            })),
            None => ready(Err(AppError::MissingCredential.into())),
        }
    }
}
