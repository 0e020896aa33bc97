//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the application.
//! Every failure a handler can produce is one of its variants, and each variant maps to
//! exactly one HTTP status code.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers simply return
//! `Result<_, AppError>` and the client receives a JSON body of the form
//! `{"message": "..."}`. Internal failures (database, hashing, token encoding) are logged
//! with their detail and answered with a generic message so nothing leaks to the client.
//!
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error` and `bcrypt::BcryptError` allow the `?` operator
//! everywhere.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Represents all possible errors that can occur within the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required field is missing, empty or malformed (HTTP 400).
    Validation(String),
    /// Signup with an email that is already registered (HTTP 400).
    DuplicateEmail,
    /// Signin with an unknown email or a wrong password (HTTP 400).
    /// Both cases share one message so callers cannot probe for accounts.
    InvalidCredentials,
    /// A protected route was called without an `Authorization` header (HTTP 401).
    MissingCredential,
    /// The bearer token is malformed, expired or has a bad signature (HTTP 401).
    InvalidCredential,
    /// The caller is authenticated but does not own the resource (HTTP 403).
    Forbidden,
    /// The referenced todo or collection does not exist (HTTP 404).
    NotFound(String),
    /// A storage failure (HTTP 500). The detail is logged, never returned.
    Database(String),
    /// Any other unexpected failure (HTTP 500). The detail is logged, never returned.
    Internal(String),
}

impl AppError {
    /// The message placed in the JSON body sent to the client.
    pub fn client_message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.as_str(),
            AppError::DuplicateEmail => "User already exists",
            AppError::InvalidCredentials => "Invalid credentials",
            AppError::MissingCredential => "Access denied",
            AppError::InvalidCredential => "Invalid token",
            AppError::Forbidden => "Forbidden",
            AppError::Database(_) | AppError::Internal(_) => INTERNAL_MESSAGE,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DuplicateEmail => write!(f, "Duplicate Email"),
            AppError::InvalidCredentials => write!(f, "Invalid Credentials"),
            AppError::MissingCredential => write!(f, "Missing Credential"),
            AppError::InvalidCredential => write!(f, "Invalid Credential"),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DuplicateEmail | AppError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            AppError::MissingCredential | AppError::InvalidCredential => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Database(detail) | AppError::Internal(detail) = self {
            log::error!("{}: {}", self.status_code(), detail);
        }
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.client_message()
        }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` becomes `NotFound`; a unique violation can only come from the
/// `users.email` constraint and becomes `DuplicateEmail`; a foreign key violation
/// means the referenced collection vanished. Everything else is a `Database` error.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match &error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateEmail,
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound("Collection not found".into())
            }
            _ => AppError::Database(error.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::Validation`.
///
/// The custom message of the first failing field (by field name) is used when the
/// rule carries one, otherwise the validator's own description.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> AppError {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by_key(|(name, _)| **name);

        let message = fields
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::Validation(message)
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::InvalidCredential`.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        log::debug!("token rejected: {}", error);
        AppError::InvalidCredential
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    #[test]
    fn test_error_responses() {
        let cases = vec![
            (AppError::Validation("Title is required".into()), 400),
            (AppError::DuplicateEmail, 400),
            (AppError::InvalidCredentials, 400),
            (AppError::MissingCredential, 401),
            (AppError::InvalidCredential, 401),
            (AppError::Forbidden, 403),
            (AppError::NotFound("Todo not found".into()), 404),
            (AppError::Database("connection refused".into()), 500),
            (AppError::Internal("boom".into()), 500),
        ];

        for (error, status) in cases {
            assert_eq!(error.error_response().status(), status, "{}", error);
        }
    }

    #[actix_rt::test]
    async fn test_internal_detail_is_not_leaked() {
        let error = AppError::Database("password authentication failed for user".into());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["message"], "Internal server error");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Title is required"))]
        title: String,
    }

    #[test]
    fn test_validation_message_is_preserved() {
        let error: AppError = Sample {
            title: String::new(),
        }
        .validate()
        .unwrap_err()
        .into();

        assert_eq!(error, AppError::Validation("Title is required".into()));
    }
}
