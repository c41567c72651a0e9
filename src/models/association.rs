//! Many-to-many association rows.
//!
//! Pure join rows with no attributes beyond the two foreign keys.
//! Membership is a set: the composite primary key rejects duplicates at
//! the storage layer, which the error converter surfaces as a conflict.

use diesel::prelude::*;

/// Link between a student and a teacher.
#[derive(Debug, Queryable, Selectable, Insertable, Clone, Copy, PartialEq, Eq)]
#[diesel(table_name = crate::schema::student_teachers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentTeacher {
    pub student_id: i32,
    pub teacher_id: i32,
}

/// Link between a lesson and an enrolled student.
#[derive(Debug, Queryable, Selectable, Insertable, Clone, Copy, PartialEq, Eq)]
#[diesel(table_name = crate::schema::lesson_students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LessonStudent {
    pub lesson_id: i32,
    pub student_id: i32,
}
