//! Repositories for the many-to-many association tables.
//!
//! Both tables are pure join relations keyed by a composite primary key.
//! `exists` supports the membership check the services run before every
//! mutation; the primary key itself arbitrates concurrent duplicate
//! inserts, which the error converter surfaces as a conflict.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{LessonStudent, StudentTeacher};

/// Repository for the student↔teacher association.
#[derive(Clone)]
pub struct StudentTeacherRepository {
    pool: AsyncDbPool,
}

impl StudentTeacherRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Returns whether the (student, teacher) pair is currently linked.
    pub async fn exists(&self, link: StudentTeacher) -> Result<bool, AppError> {
        use crate::schema::student_teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        let found = student_teachers
            .find((link.student_id, link.teacher_id))
            .select(StudentTeacher::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(found.is_some())
    }

    /// Inserts the association row.
    pub async fn insert(&self, link: StudentTeacher) -> Result<(), AppError> {
        use crate::schema::student_teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(student_teachers)
            .values(&link)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Removes the association row, returning the number of affected rows.
    pub async fn delete(&self, link: StudentTeacher) -> Result<usize, AppError> {
        use crate::schema::student_teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(student_teachers.find((link.student_id, link.teacher_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}

/// Repository for the lesson↔student association.
#[derive(Clone)]
pub struct LessonStudentRepository {
    pool: AsyncDbPool,
}

impl LessonStudentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Returns whether the (lesson, student) pair is currently linked.
    pub async fn exists(&self, link: LessonStudent) -> Result<bool, AppError> {
        use crate::schema::lesson_students::dsl::*;
        let mut conn = self.pool.get().await?;

        let found = lesson_students
            .find((link.lesson_id, link.student_id))
            .select(LessonStudent::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(found.is_some())
    }

    /// Inserts the association row.
    pub async fn insert(&self, link: LessonStudent) -> Result<(), AppError> {
        use crate::schema::lesson_students::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(lesson_students)
            .values(&link)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Removes the association row, returning the number of affected rows.
    pub async fn delete(&self, link: LessonStudent) -> Result<usize, AppError> {
        use crate::schema::lesson_students::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(lesson_students.find((link.lesson_id, link.student_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
