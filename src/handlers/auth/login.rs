use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::database::{DatabaseManager, UserRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

use super::{hash_password, token_response};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - Verify credentials and receive a JWT
///
/// Failures deliberately share one message so the response does not reveal
/// whether the email exists.
pub async fn post(Json(payload): Json<LoginRequest>) -> ApiResult<Value> {
    let email = payload.email.trim().to_lowercase();

    let pool = DatabaseManager::pool().await?;
    let user = UserRepository::new(pool)
        .fetch_by_email(&email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let hash = hash_password(&payload.password, &user.password_salt);
    if hash != user.password_hash {
        tracing::warn!("Failed login attempt for user {}", user.id);
        return Err(invalid_credentials());
    }

    Ok(ApiResponse::success(token_response(&user)?))
}

fn invalid_credentials() -> ApiError {
    ApiError::unauthorized("Invalid email or password")
}
