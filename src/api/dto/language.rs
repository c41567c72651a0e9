//! Language-related DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Language, NewLanguage, UpdateLanguage};

/// Request body for creating a new language.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLanguageRequest {
    #[validate(length(min = 1, max = 40, message = "Name must be between 1 and 40 characters"))]
    pub name: String,
}

impl CreateLanguageRequest {
    pub fn into_new_language(self) -> NewLanguage {
        NewLanguage { name: self.name }
    }
}

/// Request body for updating a language.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLanguageRequest {
    #[validate(length(min = 1, max = 40, message = "Name must be between 1 and 40 characters"))]
    pub name: Option<String>,
}

impl UpdateLanguageRequest {
    pub fn into_update_language(self) -> UpdateLanguage {
        UpdateLanguage { name: self.name }
    }
}

/// Response body for language data.
#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub id: i32,
    pub name: String,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        Self {
            id: language.id,
            name: language.name,
        }
    }
}
