//! Language service for CRUD operations.

use crate::error::{AppError, AppResult};
use crate::models::{Language, NewLanguage, UpdateLanguage};
use crate::repositories::LanguageRepository;

#[derive(Clone)]
pub struct LanguageService {
    repo: LanguageRepository,
}

impl LanguageService {
    pub fn new(repo: LanguageRepository) -> Self {
        Self { repo }
    }

    /// Creates a new language. The unique name constraint surfaces
    /// duplicates as a conflict.
    pub async fn create_language(&self, new_language: NewLanguage) -> AppResult<Language> {
        self.repo.create(new_language).await
    }

    pub async fn get_language(&self, id: i32) -> AppResult<Language> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("language", id))
    }

    pub async fn list_languages(&self, skip: i64, limit: i64) -> AppResult<Vec<Language>> {
        self.repo.list(skip, limit).await
    }

    pub async fn update_language(
        &self,
        id: i32,
        update_data: UpdateLanguage,
    ) -> AppResult<Language> {
        self.get_language(id).await?;
        self.repo.update(id, update_data).await
    }

    pub async fn delete_language(&self, id: i32) -> AppResult<()> {
        self.get_language(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }
}
