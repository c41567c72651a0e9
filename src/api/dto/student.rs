//! Student-related DTOs.
//!
//! CPF, phone and billing day arrive here as raw user input; the service
//! layer validates and normalizes them before anything is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewStudent, Student, UpdateStudent};

fn default_active() -> bool {
    true
}

/// Request body for creating a new student.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 250, message = "Full name must be between 1 and 250 characters"))]
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    #[validate(length(max = 50, message = "Payment preference must be at most 50 characters"))]
    pub payment_preference: Option<String>,
    pub billing_day: Option<i32>,
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl CreateStudentRequest {
    /// Converts the request into an insertable draft; domain validation
    /// happens in the service.
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            full_name: self.full_name,
            birth_date: self.birth_date,
            cpf: self.cpf,
            phone: self.phone,
            payment_preference: self.payment_preference,
            billing_day: self.billing_day,
            country: self.country,
            active: self.active,
        }
    }
}

/// Request body for partially updating a student.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 250, message = "Full name must be between 1 and 250 characters"))]
    pub full_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    #[validate(length(max = 50, message = "Payment preference must be at most 50 characters"))]
    pub payment_preference: Option<String>,
    pub billing_day: Option<i32>,
    #[validate(length(max = 100, message = "Country must be at most 100 characters"))]
    pub country: Option<String>,
    pub active: Option<bool>,
}

impl UpdateStudentRequest {
    pub fn into_update_student(self) -> UpdateStudent {
        UpdateStudent {
            full_name: self.full_name,
            birth_date: self.birth_date,
            cpf: self.cpf,
            phone: self.phone,
            payment_preference: self.payment_preference,
            billing_day: self.billing_day,
            country: self.country,
            active: self.active,
        }
    }
}

/// Response body for student data (the profile photo blob is not shipped
/// in listings).
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i32,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    pub payment_preference: Option<String>,
    pub billing_day: Option<i32>,
    pub country: Option<String>,
    pub active: bool,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            full_name: student.full_name,
            birth_date: student.birth_date,
            cpf: student.cpf,
            phone: student.phone,
            payment_preference: student.payment_preference,
            billing_day: student.billing_day,
            country: student.country,
            active: student.active,
        }
    }
}
