pub mod login;
pub mod register;
pub mod whoami;

use serde::Serialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::database::models::User;
use crate::error::ApiError;

/// User information for token responses
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Salted SHA-256 password hash, hex-encoded
pub(crate) fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Build the `{token, user, expires_in}` body shared by register and login
pub(crate) fn token_response(user: &User) -> Result<Value, ApiError> {
    let claims = Claims::new(user.id, user.email.clone());
    let token = generate_jwt(&claims).map_err(|e| {
        tracing::error!("Failed to generate JWT: {}", e);
        ApiError::internal_server_error("Failed to issue session token")
    })?;

    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok(json!({
        "token": token,
        "user": UserInfo::from(user),
        "expires_in": expires_in,
    }))
}
