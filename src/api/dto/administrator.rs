//! Administrator-related DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Administrator;

/// Request body for creating a new administrator.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdministratorRequest {
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 6, max = 72, message = "Password must be between 6 and 72 characters"))]
    pub password: String,
}

/// Response body for administrator data (never includes the password hash).
#[derive(Debug, Serialize)]
pub struct AdministratorResponse {
    pub id: i32,
    pub name: String,
}

impl From<Administrator> for AdministratorResponse {
    fn from(admin: Administrator) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
        }
    }
}
