//! Language repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Language, NewLanguage, UpdateLanguage};

/// Language repository holding an async connection pool.
#[derive(Clone)]
pub struct LanguageRepository {
    pool: AsyncDbPool,
}

impl LanguageRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_language: NewLanguage) -> Result<Language, AppError> {
        use crate::schema::languages::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(languages)
            .values(&new_language)
            .returning(Language::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, language_id: i32) -> Result<Option<Language>, AppError> {
        use crate::schema::languages::dsl::*;
        let mut conn = self.pool.get().await?;

        languages
            .filter(id.eq(language_id))
            .select(Language::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Language>, AppError> {
        use crate::schema::languages::dsl::*;
        let mut conn = self.pool.get().await?;

        languages
            .order(name.asc())
            .offset(skip)
            .limit(limit)
            .select(Language::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        language_id: i32,
        update_data: UpdateLanguage,
    ) -> Result<Language, AppError> {
        use crate::schema::languages::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(languages.filter(id.eq(language_id)))
            .set(&update_data)
            .returning(Language::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, language_id: i32) -> Result<usize, AppError> {
        use crate::schema::languages::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(languages.filter(id.eq(language_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
