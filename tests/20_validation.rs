mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

// All payloads here fail validation before any database access, so these run
// without DATABASE_URL.

fn token() -> String {
    common::token_for(Uuid::new_v4(), "ana@example.com")
}

#[tokio::test]
async fn create_requires_task_name() -> Result<()> {
    let (status, body) = common::send(
        common::app(),
        Method::POST,
        "/api/todos",
        Some(&token()),
        Some(json!({})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["field_errors"]["taskName"], "Task name is required");
    Ok(())
}

#[tokio::test]
async fn create_rejects_blank_and_oversized_names() -> Result<()> {
    let (status, _) = common::send(
        common::app(),
        Method::POST,
        "/api/todos",
        Some(&token()),
        Some(json!({"taskName": "   "})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = common::send(
        common::app(),
        Method::POST,
        "/api/todos",
        Some(&token()),
        Some(json!({"taskName": "x".repeat(201)})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["field_errors"]["taskName"],
        "Task name cannot exceed 200 characters"
    );
    Ok(())
}

#[tokio::test]
async fn create_bounds_progress_and_importance() -> Result<()> {
    let (status, body) = common::send(
        common::app(),
        Method::POST,
        "/api/todos",
        Some(&token()),
        Some(json!({"taskName": "t", "progress": 101, "importance": 9})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["field_errors"]["progress"],
        "Progress must be an integer between 0 and 100"
    );
    assert_eq!(
        body["field_errors"]["importance"],
        "Importance must be an integer between 1 and 5"
    );
    Ok(())
}

#[tokio::test]
async fn update_validates_before_lookup() -> Result<()> {
    // Unknown id, but the payload is bad: validation wins, like the original
    let path = format!("/api/todos/{}", Uuid::new_v4());

    let (status, body) = common::send(
        common::app(),
        Method::PUT,
        &path,
        Some(&token()),
        Some(json!({"progress": -5})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"].get("progress").is_some());

    let (status, _) = common::send(
        common::app(),
        Method::PUT,
        &path,
        Some(&token()),
        Some(json!({"taskName": ""})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn non_uuid_ids_are_bad_requests() -> Result<()> {
    let (status, _) = common::send(
        common::app(),
        Method::PATCH,
        "/api/todos/not-a-uuid/complete",
        Some(&token()),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn register_validates_email_and_password() -> Result<()> {
    let (status, body) = common::send(
        common::app(),
        Method::POST,
        "/auth/register",
        None,
        Some(json!({"email": "nope", "password": "short"})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["field_errors"].get("email").is_some());
    assert!(body["field_errors"].get("password").is_some());
    Ok(())
}
