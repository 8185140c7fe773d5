use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewTodo, Todo};

/// Query layer for the todos table
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All todos owned by a user, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Todo>, DatabaseError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT * FROM todos WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Todo>, DatabaseError> {
        let todo = sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(todo)
    }

    pub async fn insert(&self, new: NewTodo) -> Result<Todo, DatabaseError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos
                (task_name, progress, importance, completed,
                 location, assigned_to, coordinate_with, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.task_name)
        .bind(new.progress)
        .bind(new.importance)
        .bind(new.completed)
        .bind(&new.location)
        .bind(&new.assigned_to)
        .bind(&new.coordinate_with)
        .bind(new.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Persist the mutable fields of an already-merged todo and bump
    /// updated_at. Owner and created_at are never written.
    pub async fn update(&self, todo: &Todo) -> Result<Todo, DatabaseError> {
        let updated = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos SET
                task_name = $2,
                progress = $3,
                importance = $4,
                completed = $5,
                location = $6,
                assigned_to = $7,
                coordinate_with = $8,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(todo.id)
        .bind(&todo.task_name)
        .bind(todo.progress)
        .bind(todo.importance)
        .bind(todo.completed)
        .bind(&todo.location)
        .bind(&todo.assigned_to)
        .bind(&todo.coordinate_with)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Flip the completed flag in a single statement
    pub async fn toggle_complete(&self, id: Uuid) -> Result<Todo, DatabaseError> {
        let updated = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET completed = NOT completed, updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
