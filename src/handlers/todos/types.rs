use serde::Deserialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::database::models::{NewTodo, Todo};
use crate::error::ApiError;

pub const TASK_NAME_MAX_LEN: usize = 200;
pub const PROGRESS_MIN: i32 = 0;
pub const PROGRESS_MAX: i32 = 100;
pub const IMPORTANCE_MIN: i32 = 1;
pub const IMPORTANCE_MAX: i32 = 5;

/// Body for POST /api/todos. Unknown fields (including any attempt to set the
/// owner) are ignored; unspecified fields get server defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub task_name: Option<String>,
    pub progress: Option<i32>,
    pub importance: Option<i32>,
    pub completed: Option<bool>,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub coordinate_with: Option<String>,
}

impl CreateTodo {
    /// Validate and turn into an insert payload owned by `user_id`
    pub fn into_new_todo(self, user_id: Uuid) -> Result<NewTodo, ApiError> {
        let mut errors = FieldErrors::new();

        let task_name = match self.task_name.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("taskName", "Task name is required");
                String::new()
            }
            Some(name) => {
                if name.chars().count() > TASK_NAME_MAX_LEN {
                    errors.add("taskName", "Task name cannot exceed 200 characters");
                }
                name.to_string()
            }
        };

        if let Some(progress) = self.progress {
            check_progress(progress, &mut errors);
        }
        if let Some(importance) = self.importance {
            check_importance(importance, &mut errors);
        }

        errors.into_result()?;

        Ok(NewTodo {
            task_name,
            progress: self.progress.unwrap_or(0),
            importance: self.importance.unwrap_or(1),
            completed: self.completed.unwrap_or(false),
            location: trimmed_or_empty(self.location),
            assigned_to: trimmed_or_empty(self.assigned_to),
            coordinate_with: trimmed_or_empty(self.coordinate_with),
            user_id,
        })
    }
}

/// Body for PUT /api/todos/:id. Every field is optional; only fields present
/// in the request are merged into the stored record.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub task_name: Option<String>,
    pub progress: Option<i32>,
    pub importance: Option<i32>,
    pub completed: Option<bool>,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub coordinate_with: Option<String>,
}

impl UpdateTodo {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();

        if let Some(name) = self.task_name.as_deref().map(str::trim) {
            if name.is_empty() {
                errors.add("taskName", "Task name cannot be empty");
            } else if name.chars().count() > TASK_NAME_MAX_LEN {
                errors.add("taskName", "Task name cannot exceed 200 characters");
            }
        }
        if let Some(progress) = self.progress {
            check_progress(progress, &mut errors);
        }
        if let Some(importance) = self.importance {
            check_importance(importance, &mut errors);
        }

        errors.into_result()
    }

    /// Whitelist merge: apply only the fields present in the request
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(name) = &self.task_name {
            todo.task_name = name.trim().to_string();
        }
        if let Some(progress) = self.progress {
            todo.progress = progress;
        }
        if let Some(importance) = self.importance {
            todo.importance = importance;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(location) = &self.location {
            todo.location = location.trim().to_string();
        }
        if let Some(assigned_to) = &self.assigned_to {
            todo.assigned_to = assigned_to.trim().to_string();
        }
        if let Some(coordinate_with) = &self.coordinate_with {
            todo.coordinate_with = coordinate_with.trim().to_string();
        }
    }
}

fn check_progress(progress: i32, errors: &mut FieldErrors) {
    if !(PROGRESS_MIN..=PROGRESS_MAX).contains(&progress) {
        errors.add("progress", "Progress must be an integer between 0 and 100");
    }
}

fn check_importance(importance: i32, errors: &mut FieldErrors) {
    if !(IMPORTANCE_MIN..=IMPORTANCE_MAX).contains(&importance) {
        errors.add("importance", "Importance must be an integer between 1 and 5");
    }
}

fn trimmed_or_empty(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    fn new() -> Self {
        Self(HashMap::new())
    }

    fn add(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    fn into_result(self) -> Result<(), ApiError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error("Validation failed", self.0))
        }
    }
}
