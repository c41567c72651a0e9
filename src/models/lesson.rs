use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Lesson model for reading from database.
///
/// `teacher_rate` is the amount owed to the teacher, `school_rate` the
/// amount kept by the school, both per lesson.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::lessons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Lesson {
    pub id: i32,
    pub teacher_id: i32,
    pub lesson_date: NaiveDateTime,
    pub language: String,
    pub teacher_rate: BigDecimal,
    pub school_rate: BigDecimal,
    pub active: bool,
    pub repeat_weekly: bool,
}

/// NewLesson model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::lessons)]
pub struct NewLesson {
    pub teacher_id: i32,
    pub lesson_date: NaiveDateTime,
    pub language: String,
    pub teacher_rate: BigDecimal,
    pub school_rate: BigDecimal,
    pub active: bool,
    pub repeat_weekly: bool,
}

/// UpdateLesson changeset listing exactly the mutable fields.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::lessons)]
pub struct UpdateLesson {
    pub teacher_id: Option<i32>,
    pub lesson_date: Option<NaiveDateTime>,
    pub language: Option<String>,
    pub teacher_rate: Option<BigDecimal>,
    pub school_rate: Option<BigDecimal>,
    pub active: Option<bool>,
    pub repeat_weekly: Option<bool>,
}
