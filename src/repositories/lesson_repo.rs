//! Lesson repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Lesson, NewLesson, Student, UpdateLesson};

/// Lesson repository holding an async connection pool.
#[derive(Clone)]
pub struct LessonRepository {
    pool: AsyncDbPool,
}

impl LessonRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_lesson: NewLesson) -> Result<Lesson, AppError> {
        use crate::schema::lessons::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(lessons)
            .values(&new_lesson)
            .returning(Lesson::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, lesson_id: i32) -> Result<Option<Lesson>, AppError> {
        use crate::schema::lessons::dsl::*;
        let mut conn = self.pool.get().await?;

        lessons
            .filter(id.eq(lesson_id))
            .select(Lesson::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists lessons with skip/limit, returning the page and the total count.
    pub async fn list_paginated(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Lesson>, i64), AppError> {
        use crate::schema::lessons::dsl::*;
        let mut conn = self.pool.get().await?;

        let items = lessons
            .order(lesson_date.desc())
            .offset(skip)
            .limit(limit)
            .select(Lesson::as_select())
            .load(&mut conn)
            .await?;

        let total = lessons.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }

    pub async fn update(
        &self,
        lesson_id: i32,
        update_data: UpdateLesson,
    ) -> Result<Lesson, AppError> {
        use crate::schema::lessons::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(lessons.filter(id.eq(lesson_id)))
            .set(&update_data)
            .returning(Lesson::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, lesson_id: i32) -> Result<usize, AppError> {
        use crate::schema::lessons::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(lessons.filter(id.eq(lesson_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Loads the students enrolled in a lesson in a single join.
    pub async fn students_of(&self, of_lesson_id: i32) -> Result<Vec<Student>, AppError> {
        use crate::schema::{lesson_students, students};
        let mut conn = self.pool.get().await?;

        students::table
            .inner_join(lesson_students::table)
            .filter(lesson_students::lesson_id.eq(of_lesson_id))
            .order(students::full_name.asc())
            .select(Student::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
