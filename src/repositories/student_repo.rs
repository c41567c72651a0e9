//! Student repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewStudent, Student, Teacher, UpdateStudent};

/// Student repository holding an async connection pool.
#[derive(Clone)]
pub struct StudentRepository {
    pool: AsyncDbPool,
}

impl StudentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        use crate::schema::students::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(students)
            .values(&new_student)
            .returning(Student::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, AppError> {
        use crate::schema::students::dsl::*;
        let mut conn = self.pool.get().await?;

        students
            .filter(id.eq(student_id))
            .select(Student::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Student>, AppError> {
        use crate::schema::students::dsl::*;
        let mut conn = self.pool.get().await?;

        students
            .order(id.asc())
            .offset(skip)
            .limit(limit)
            .select(Student::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(
        &self,
        student_id: i32,
        update_data: UpdateStudent,
    ) -> Result<Student, AppError> {
        use crate::schema::students::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(students.filter(id.eq(student_id)))
            .set(&update_data)
            .returning(Student::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes a student. Tuition rows cascade at the storage layer.
    pub async fn delete(&self, student_id: i32) -> Result<usize, AppError> {
        use crate::schema::students::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(students.filter(id.eq(student_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Loads the teachers associated with a student in a single join.
    pub async fn teachers_of(&self, of_student_id: i32) -> Result<Vec<Teacher>, AppError> {
        use crate::schema::{student_teachers, teachers};
        let mut conn = self.pool.get().await?;

        teachers::table
            .inner_join(student_teachers::table)
            .filter(student_teachers::student_id.eq(of_student_id))
            .order(teachers::full_name.asc())
            .select(Teacher::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
