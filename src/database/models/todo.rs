use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A task record owned by a single user. JSON field names follow the wire
/// format clients already speak (camelCase, owner exposed as `user`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub task_name: String,
    pub progress: i32,
    pub importance: i32,
    pub completed: bool,
    pub location: String,
    pub assigned_to: String,
    pub coordinate_with: String,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a todo. The owner always comes from the authenticated
/// session, never from the request body.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub task_name: String,
    pub progress: i32,
    pub importance: i32,
    pub completed: bool,
    pub location: String,
    pub assigned_to: String,
    pub coordinate_with: String,
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            task_name: "Buy milk".to_string(),
            progress: 0,
            importance: 1,
            completed: false,
            location: String::new(),
            assigned_to: String::new(),
            coordinate_with: String::new(),
            user_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };

        let v = serde_json::to_value(&todo).unwrap();
        assert_eq!(v["taskName"], "Buy milk");
        assert!(v.get("assignedTo").is_some());
        assert!(v.get("coordinateWith").is_some());
        assert!(v.get("createdAt").is_some());
        // Owner is exposed as `user`, matching the original API
        assert_eq!(v["user"], serde_json::json!(todo.user_id));
        assert!(v.get("userId").is_none());
    }
}
