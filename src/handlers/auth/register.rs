use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::{DatabaseManager, UserRepository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

use super::{hash_password, token_response};

const PASSWORD_MIN_LEN: usize = 8;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    fn validate(&self) -> Result<(String, String), ApiError> {
        let mut field_errors = HashMap::new();

        let email = self.email.as_deref().map(str::trim).unwrap_or("");
        if email.is_empty() {
            field_errors.insert("email".to_string(), "Email is required".to_string());
        } else if !email.contains('@') {
            field_errors.insert("email".to_string(), "Email must be valid".to_string());
        }

        let password = self.password.as_deref().unwrap_or("");
        if password.is_empty() {
            field_errors.insert("password".to_string(), "Password is required".to_string());
        } else if password.chars().count() < PASSWORD_MIN_LEN {
            field_errors.insert(
                "password".to_string(),
                "Password must be at least 8 characters".to_string(),
            );
        }

        if field_errors.is_empty() {
            Ok((email.to_lowercase(), password.to_string()))
        } else {
            Err(ApiError::validation_error("Validation failed", field_errors))
        }
    }
}

/// POST /auth/register - Create an account and receive a JWT
pub async fn post(Json(payload): Json<RegisterRequest>) -> ApiResult<Value> {
    let (email, password) = payload.validate()?;

    let salt = Uuid::new_v4().simple().to_string();
    let hash = hash_password(&password, &salt);

    let pool = DatabaseManager::pool().await?;
    let user = UserRepository::new(pool).insert(&email, &hash, &salt).await?;

    tracing::info!("Registered user {}", user.id);
    Ok(ApiResponse::created(token_response(&user)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_fields() {
        let req = RegisterRequest::default();
        let err = req.validate().unwrap_err();
        match err {
            ApiError::ValidationError { field_errors, .. } => {
                assert!(field_errors.contains_key("email"));
                assert!(field_errors.contains_key("password"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_short_password_and_bad_email() {
        let req = RegisterRequest {
            email: Some("not-an-email".to_string()),
            password: Some("short".to_string()),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn normalizes_email() {
        let req = RegisterRequest {
            email: Some("  Ana@Example.com ".to_string()),
            password: Some("long-enough".to_string()),
        };
        let (email, _) = req.validate().unwrap();
        assert_eq!(email, "ana@example.com");
    }
}
