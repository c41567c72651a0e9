//! Daily to-do DTOs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewTodo, Todo, UpdateTodo};

/// Query filter for scoping the to-do listing to one administrator.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TodoListFilter {
    pub administrator_id: Option<i32>,
}

/// Request body for creating a new to-do.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 500, message = "Text must be between 1 and 500 characters"))]
    pub text: String,
    #[serde(default)]
    pub done: bool,
    pub administrator_id: i32,
}

impl CreateTodoRequest {
    pub fn into_new_todo(self) -> NewTodo {
        NewTodo {
            text: self.text,
            done: self.done,
            administrator_id: self.administrator_id,
        }
    }
}

/// Request body for partially updating a to-do.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 500, message = "Text must be between 1 and 500 characters"))]
    pub text: Option<String>,
    pub done: Option<bool>,
    pub administrator_id: Option<i32>,
}

impl UpdateTodoRequest {
    pub fn into_update_todo(self) -> UpdateTodo {
        UpdateTodo {
            text: self.text,
            done: self.done,
            administrator_id: self.administrator_id,
        }
    }
}

/// Response body for to-do data.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i32,
    pub text: String,
    pub done: bool,
    pub created_at: NaiveDateTime,
    pub administrator_id: i32,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            text: todo.text,
            done: todo.done,
            created_at: todo.created_at,
            administrator_id: todo.administrator_id,
        }
    }
}
