//! To-do repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTodo, Todo, UpdateTodo};

/// To-do repository holding an async connection pool.
#[derive(Clone)]
pub struct TodoRepository {
    pool: AsyncDbPool,
}

impl TodoRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(todos)
            .values(&new_todo)
            .returning(Todo::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, todo_id: i32) -> Result<Option<Todo>, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        todos
            .filter(id.eq(todo_id))
            .select(Todo::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    fn filtered(
        owner: Option<i32>,
    ) -> crate::schema::todos::BoxedQuery<'static, diesel::pg::Pg> {
        use crate::schema::todos::dsl::*;

        let mut query = todos.into_boxed();
        if let Some(admin_id) = owner {
            query = query.filter(administrator_id.eq(admin_id));
        }
        query
    }

    /// Lists to-dos, optionally scoped to one administrator, returning the
    /// page and the total count under the same filter.
    pub async fn list_paginated(
        &self,
        owner: Option<i32>,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Todo>, i64), AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        let items = Self::filtered(owner)
            .order(created_at.desc())
            .offset(skip)
            .limit(limit)
            .select(Todo::as_select())
            .load(&mut conn)
            .await?;

        let total = Self::filtered(owner)
            .count()
            .get_result::<i64>(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(&self, todo_id: i32, update_data: UpdateTodo) -> Result<Todo, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(todos.filter(id.eq(todo_id)))
            .set(&update_data)
            .returning(Todo::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, todo_id: i32) -> Result<usize, AppError> {
        use crate::schema::todos::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(todos.filter(id.eq(todo_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
