pub mod collection;
pub mod record;
pub mod types;

use uuid::Uuid;

use crate::database::models::Todo;
use crate::database::TodoRepository;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Fetch a todo and enforce the ownership invariant: 404 when the id is
/// unknown, 403 when it belongs to someone else.
pub(crate) async fn fetch_owned(
    repo: &TodoRepository,
    id: Uuid,
    auth_user: &AuthUser,
    action: &str,
) -> Result<Todo, ApiError> {
    let todo = repo
        .fetch(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    if todo.user_id != auth_user.user_id {
        tracing::warn!(
            "user {} denied {} on todo {} owned by {}",
            auth_user.user_id,
            action,
            todo.id,
            todo.user_id
        );
        return Err(ApiError::forbidden(format!(
            "Not authorized to {} this todo",
            action
        )));
    }

    Ok(todo)
}
