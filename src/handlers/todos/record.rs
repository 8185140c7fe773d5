use axum::{
    extract::{Extension, Path},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::Todo;
use crate::database::{DatabaseManager, TodoRepository};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

use super::fetch_owned;
use super::types::UpdateTodo;

/// GET /api/todos/:id - Fetch a single todo
pub async fn get(
    Path(id): Path<Uuid>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Todo> {
    let pool = DatabaseManager::pool().await?;
    let repo = TodoRepository::new(pool);
    let todo = fetch_owned(&repo, id, &auth_user, "access").await?;

    Ok(ApiResponse::success(todo))
}

/// PUT /api/todos/:id - Whitelist merge of the mutable fields
pub async fn put(
    Path(id): Path<Uuid>,
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<UpdateTodo>,
) -> ApiResult<Todo> {
    // Bad payloads fail before the lookup, like the original validators
    payload.validate()?;

    let pool = DatabaseManager::pool().await?;
    let repo = TodoRepository::new(pool);
    let mut todo = fetch_owned(&repo, id, &auth_user, "update").await?;

    payload.apply(&mut todo);
    let updated = repo.update(&todo).await?;

    Ok(ApiResponse::success(updated))
}

/// PATCH /api/todos/:id/complete - Flip the completed flag
pub async fn complete(
    Path(id): Path<Uuid>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Todo> {
    let pool = DatabaseManager::pool().await?;
    let repo = TodoRepository::new(pool);
    fetch_owned(&repo, id, &auth_user, "update").await?;

    let updated = repo.toggle_complete(id).await?;

    Ok(ApiResponse::success(updated))
}

/// DELETE /api/todos/:id - Owner-checked hard delete
pub async fn delete(
    Path(id): Path<Uuid>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let repo = TodoRepository::new(pool);
    fetch_owned(&repo, id, &auth_user, "delete").await?;

    repo.delete(id).await?;

    Ok(ApiResponse::success(json!({})))
}
