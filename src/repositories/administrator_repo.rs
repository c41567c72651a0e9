//! Administrator repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Administrator, NewAdministrator};

/// Administrator repository holding an async connection pool.
#[derive(Clone)]
pub struct AdministratorRepository {
    pool: AsyncDbPool,
}

impl AdministratorRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new administrator in the database.
    pub async fn create(&self, new_admin: NewAdministrator) -> Result<Administrator, AppError> {
        use crate::schema::administrators::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(administrators)
            .values(&new_admin)
            .returning(Administrator::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds an administrator by id.
    pub async fn find_by_id(&self, admin_id: i32) -> Result<Option<Administrator>, AppError> {
        use crate::schema::administrators::dsl::*;
        let mut conn = self.pool.get().await?;

        administrators
            .filter(id.eq(admin_id))
            .select(Administrator::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds an administrator by the unique name.
    pub async fn find_by_name(&self, admin_name: &str) -> Result<Option<Administrator>, AppError> {
        use crate::schema::administrators::dsl::*;
        let mut conn = self.pool.get().await?;

        administrators
            .filter(name.eq(admin_name))
            .select(Administrator::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists administrators with skip/limit.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Administrator>, AppError> {
        use crate::schema::administrators::dsl::*;
        let mut conn = self.pool.get().await?;

        administrators
            .order(id.asc())
            .offset(skip)
            .limit(limit)
            .select(Administrator::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes an administrator, returning the number of affected rows.
    pub async fn delete(&self, admin_id: i32) -> Result<usize, AppError> {
        use crate::schema::administrators::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(administrators.filter(id.eq(admin_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
