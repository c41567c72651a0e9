//! Teacher repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTeacher, Student, Teacher, UpdateTeacher};

/// Teacher repository holding an async connection pool.
#[derive(Clone)]
pub struct TeacherRepository {
    pool: AsyncDbPool,
}

impl TeacherRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_teacher: NewTeacher) -> Result<Teacher, AppError> {
        use crate::schema::teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(teachers)
            .values(&new_teacher)
            .returning(Teacher::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, teacher_id: i32) -> Result<Option<Teacher>, AppError> {
        use crate::schema::teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        teachers
            .filter(id.eq(teacher_id))
            .select(Teacher::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists teachers with skip/limit, returning the page and the total count.
    pub async fn list_paginated(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Teacher>, i64), AppError> {
        use crate::schema::teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        let items = teachers
            .order(id.asc())
            .offset(skip)
            .limit(limit)
            .select(Teacher::as_select())
            .load(&mut conn)
            .await?;

        let total = teachers.count().get_result::<i64>(&mut conn).await?;

        Ok((items, total))
    }

    pub async fn update(
        &self,
        teacher_id: i32,
        update_data: UpdateTeacher,
    ) -> Result<Teacher, AppError> {
        use crate::schema::teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(teachers.filter(id.eq(teacher_id)))
            .set(&update_data)
            .returning(Teacher::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, teacher_id: i32) -> Result<usize, AppError> {
        use crate::schema::teachers::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(teachers.filter(id.eq(teacher_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Loads the students associated with a teacher in a single join.
    pub async fn students_of(&self, of_teacher_id: i32) -> Result<Vec<Student>, AppError> {
        use crate::schema::{student_teachers, students};
        let mut conn = self.pool.get().await?;

        students::table
            .inner_join(student_teachers::table)
            .filter(student_teachers::teacher_id.eq(of_teacher_id))
            .order(students::full_name.asc())
            .select(Student::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
