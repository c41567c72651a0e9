//! Lesson-related DTOs.

use bigdecimal::ToPrimitive;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::money;
use crate::error::AppResult;
use crate::models::{Lesson, NewLesson, UpdateLesson};

fn default_active() -> bool {
    true
}

/// Request body for creating a new lesson.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLessonRequest {
    pub teacher_id: i32,
    pub lesson_date: NaiveDateTime,
    #[validate(length(min = 1, max = 40, message = "Language must be between 1 and 40 characters"))]
    pub language: String,
    #[validate(range(min = 0.0, message = "Teacher rate must not be negative"))]
    pub teacher_rate: f64,
    #[validate(range(min = 0.0, message = "School rate must not be negative"))]
    pub school_rate: f64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub repeat_weekly: bool,
}

impl CreateLessonRequest {
    pub fn into_new_lesson(self) -> AppResult<NewLesson> {
        Ok(NewLesson {
            teacher_id: self.teacher_id,
            lesson_date: self.lesson_date,
            language: self.language,
            teacher_rate: money(self.teacher_rate, "teacher_rate")?,
            school_rate: money(self.school_rate, "school_rate")?,
            active: self.active,
            repeat_weekly: self.repeat_weekly,
        })
    }
}

/// Request body for partially updating a lesson.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateLessonRequest {
    pub teacher_id: Option<i32>,
    pub lesson_date: Option<NaiveDateTime>,
    #[validate(length(min = 1, max = 40, message = "Language must be between 1 and 40 characters"))]
    pub language: Option<String>,
    #[validate(range(min = 0.0, message = "Teacher rate must not be negative"))]
    pub teacher_rate: Option<f64>,
    #[validate(range(min = 0.0, message = "School rate must not be negative"))]
    pub school_rate: Option<f64>,
    pub active: Option<bool>,
    pub repeat_weekly: Option<bool>,
}

impl UpdateLessonRequest {
    pub fn into_update_lesson(self) -> AppResult<UpdateLesson> {
        Ok(UpdateLesson {
            teacher_id: self.teacher_id,
            lesson_date: self.lesson_date,
            language: self.language,
            teacher_rate: self
                .teacher_rate
                .map(|v| money(v, "teacher_rate"))
                .transpose()?,
            school_rate: self
                .school_rate
                .map(|v| money(v, "school_rate"))
                .transpose()?,
            active: self.active,
            repeat_weekly: self.repeat_weekly,
        })
    }
}

/// Response body for lesson data.
#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub id: i32,
    pub teacher_id: i32,
    pub lesson_date: NaiveDateTime,
    pub language: String,
    pub teacher_rate: f64,
    pub school_rate: f64,
    pub active: bool,
    pub repeat_weekly: bool,
}

impl From<Lesson> for LessonResponse {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id,
            teacher_id: lesson.teacher_id,
            lesson_date: lesson.lesson_date,
            language: lesson.language,
            teacher_rate: lesson.teacher_rate.to_f64().unwrap_or(0.0),
            school_rate: lesson.school_rate.to_f64().unwrap_or(0.0),
            active: lesson.active,
            repeat_weekly: lesson.repeat_weekly,
        }
    }
}
