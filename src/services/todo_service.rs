//! Daily to-do service.

use crate::error::{AppError, AppResult};
use crate::models::{NewTodo, Todo, UpdateTodo};
use crate::repositories::{AdministratorRepository, TodoRepository};

#[derive(Clone)]
pub struct TodoService {
    repo: TodoRepository,
    administrators: AdministratorRepository,
}

impl TodoService {
    pub fn new(repo: TodoRepository, administrators: AdministratorRepository) -> Self {
        Self {
            repo,
            administrators,
        }
    }

    /// Creates a to-do. The owning administrator must exist.
    pub async fn create_todo(&self, new_todo: NewTodo) -> AppResult<Todo> {
        self.administrators
            .find_by_id(new_todo.administrator_id)
            .await?
            .ok_or_else(|| AppError::not_found("administrator", new_todo.administrator_id))?;

        self.repo.create(new_todo).await
    }

    pub async fn get_todo(&self, id: i32) -> AppResult<Todo> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("todo", id))
    }

    /// Lists to-dos, optionally scoped to one administrator.
    pub async fn list_todos(
        &self,
        administrator_id: Option<i32>,
        skip: i64,
        limit: i64,
    ) -> AppResult<(Vec<Todo>, i64)> {
        self.repo.list_paginated(administrator_id, skip, limit).await
    }

    /// Updates a to-do. A changed owner reference is re-validated.
    pub async fn update_todo(&self, id: i32, update_data: UpdateTodo) -> AppResult<Todo> {
        self.get_todo(id).await?;
        if let Some(admin_id) = update_data.administrator_id {
            self.administrators
                .find_by_id(admin_id)
                .await?
                .ok_or_else(|| AppError::not_found("administrator", admin_id))?;
        }
        self.repo.update(id, update_data).await
    }

    pub async fn delete_todo(&self, id: i32) -> AppResult<()> {
        self.get_todo(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
