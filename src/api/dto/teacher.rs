//! Teacher-related DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewTeacher, Teacher, UpdateTeacher};

fn default_active() -> bool {
    true
}

/// Request body for creating a new teacher.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeacherRequest {
    pub language_id: i32,
    #[validate(length(min = 1, max = 250, message = "Full name must be between 1 and 250 characters"))]
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    pub mei: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Nationality must be between 1 and 100 characters"))]
    pub nationality: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[validate(length(max = 250, message = "Pix key must be at most 250 characters"))]
    pub pix: Option<String>,
}

impl CreateTeacherRequest {
    pub fn into_new_teacher(self) -> NewTeacher {
        NewTeacher {
            language_id: self.language_id,
            full_name: self.full_name,
            birth_date: self.birth_date,
            cpf: self.cpf,
            phone: self.phone,
            mei: self.mei,
            nationality: self.nationality,
            active: self.active,
            pix: self.pix,
        }
    }
}

/// Request body for partially updating a teacher.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateTeacherRequest {
    pub language_id: Option<i32>,
    #[validate(length(min = 1, max = 250, message = "Full name must be between 1 and 250 characters"))]
    pub full_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub mei: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Nationality must be between 1 and 100 characters"))]
    pub nationality: Option<String>,
    pub active: Option<bool>,
    #[validate(length(max = 250, message = "Pix key must be at most 250 characters"))]
    pub pix: Option<String>,
}

impl UpdateTeacherRequest {
    pub fn into_update_teacher(self) -> UpdateTeacher {
        UpdateTeacher {
            language_id: self.language_id,
            full_name: self.full_name,
            birth_date: self.birth_date,
            cpf: self.cpf,
            phone: self.phone,
            mei: self.mei,
            nationality: self.nationality,
            active: self.active,
            pix: self.pix,
        }
    }
}

/// Response body for teacher data (contract and photo blobs are not
/// shipped in listings).
#[derive(Debug, Serialize)]
pub struct TeacherResponse {
    pub id: i32,
    pub language_id: i32,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    pub mei: Option<String>,
    pub nationality: String,
    pub active: bool,
    pub pix: Option<String>,
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            language_id: teacher.language_id,
            full_name: teacher.full_name,
            birth_date: teacher.birth_date,
            cpf: teacher.cpf,
            phone: teacher.phone,
            mei: teacher.mei,
            nationality: teacher.nationality,
            active: teacher.active,
            pix: teacher.pix,
        }
    }
}
