//! Lesson service: CRUD plus the lesson↔student enrollment association.

use crate::error::{AppError, AppResult};
use crate::models::{Lesson, LessonStudent, NewLesson, Student, UpdateLesson};
use crate::repositories::{
    LessonRepository, LessonStudentRepository, StudentRepository, TeacherRepository,
};

#[derive(Clone)]
pub struct LessonService {
    repo: LessonRepository,
    teachers: TeacherRepository,
    students: StudentRepository,
    links: LessonStudentRepository,
}

impl LessonService {
    pub fn new(
        repo: LessonRepository,
        teachers: TeacherRepository,
        students: StudentRepository,
        links: LessonStudentRepository,
    ) -> Self {
        Self {
            repo,
            teachers,
            students,
            links,
        }
    }

    /// Creates a lesson. The referenced teacher must exist.
    pub async fn create_lesson(&self, new_lesson: NewLesson) -> AppResult<Lesson> {
        self.teachers
            .find_by_id(new_lesson.teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found("teacher", new_lesson.teacher_id))?;

        self.repo.create(new_lesson).await
    }

    pub async fn get_lesson(&self, id: i32) -> AppResult<Lesson> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("lesson", id))
    }

    /// Lists lessons with skip/limit, returning the page and total count.
    pub async fn list_lessons(&self, skip: i64, limit: i64) -> AppResult<(Vec<Lesson>, i64)> {
        self.repo.list_paginated(skip, limit).await
    }

    /// Updates a lesson. A changed teacher reference is re-validated.
    pub async fn update_lesson(&self, id: i32, update_data: UpdateLesson) -> AppResult<Lesson> {
        self.get_lesson(id).await?;
        if let Some(teacher_id) = update_data.teacher_id {
            self.teachers
                .find_by_id(teacher_id)
                .await?
                .ok_or_else(|| AppError::not_found("teacher", teacher_id))?;
        }
        self.repo.update(id, update_data).await
    }

    pub async fn delete_lesson(&self, id: i32) -> AppResult<()> {
        self.get_lesson(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Lists the students enrolled in a lesson.
    pub async fn list_students_of_lesson(&self, lesson_id: i32) -> AppResult<Vec<Student>> {
        self.get_lesson(lesson_id).await?;
        self.repo.students_of(lesson_id).await
    }

    /// Enrolls a student in a lesson. Both must exist, an enrolled pair
    /// conflicts rather than silently no-opping.
    pub async fn associate_student(&self, lesson_id: i32, student_id: i32) -> AppResult<String> {
        self.get_lesson(lesson_id).await?;
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("student", student_id))?;

        let link = LessonStudent {
            lesson_id,
            student_id,
        };
        if self.links.exists(link).await? {
            return Err(AppError::Conflict {
                message: format!(
                    "Student {} is already enrolled in this lesson",
                    student.full_name
                ),
            });
        }

        self.links.insert(link).await?;
        Ok(format!(
            "Student {} enrolled in the lesson",
            student.full_name
        ))
    }

    /// Removes a student from a lesson.
    pub async fn disassociate_student(&self, lesson_id: i32, student_id: i32) -> AppResult<String> {
        self.get_lesson(lesson_id).await?;
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("student", student_id))?;

        let link = LessonStudent {
            lesson_id,
            student_id,
        };
        if !self.links.exists(link).await? {
            return Err(AppError::Conflict {
                message: format!(
                    "Student {} is not enrolled in this lesson",
                    student.full_name
                ),
            });
        }

        self.links.delete(link).await?;
        Ok(format!(
            "Student {} removed from the lesson",
            student.full_name
        ))
    }
}
