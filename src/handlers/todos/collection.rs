use axum::{extract::Extension, Json};

use crate::database::models::Todo;
use crate::database::{DatabaseManager, TodoRepository};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

use super::types::CreateTodo;

/// GET /api/todos - List the caller's todos, newest first
pub async fn get(Extension(auth_user): Extension<AuthUser>) -> ApiResult<Vec<Todo>> {
    let pool = DatabaseManager::pool().await?;
    let todos = TodoRepository::new(pool)
        .list_for_user(auth_user.user_id)
        .await?;

    Ok(ApiResponse::list(todos))
}

/// POST /api/todos - Create a todo owned by the caller
///
/// The owner always comes from the session; any owner field in the body is
/// ignored. Unspecified fields get server defaults.
pub async fn post(
    Extension(auth_user): Extension<AuthUser>,
    Json(payload): Json<CreateTodo>,
) -> ApiResult<Todo> {
    // Validate before touching the database
    let new = payload.into_new_todo(auth_user.user_id)?;

    let pool = DatabaseManager::pool().await?;
    let todo = TodoRepository::new(pool).insert(new).await?;

    Ok(ApiResponse::created(todo))
}
