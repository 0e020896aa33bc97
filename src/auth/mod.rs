pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::Identity;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_credential, verify_token, Claims, TokenKeys};

/// Represents the payload for a new user registration request.
///
/// Absent fields deserialize as empty strings so they fail validation with a
/// readable message instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Email address for the new account. Must be a valid email format.
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email and password required"),
        email(message = "Email must be a valid address")
    )]
    pub email: String,
    /// Plaintext password; only its bcrypt hash is stored.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password required"))]
    pub password: String,
}

/// Represents the payload for a signin request.
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password required"))]
    pub password: String,
}

/// Response returned after a successful signin.
#[derive(Debug, Serialize, Deserialize)]
pub struct SigninResponse {
    /// The signed bearer token for session authentication.
    pub token: String,
    pub message: String,
}
