//! Teacher service: CRUD plus the teacher-side view of the
//! student↔teacher association.

use crate::error::{AppError, AppResult};
use crate::models::{NewTeacher, Student, StudentTeacher, Teacher, UpdateTeacher};
use crate::repositories::{
    LanguageRepository, StudentRepository, StudentTeacherRepository, TeacherRepository,
};
use crate::utils::validators::{validate_cpf_opt, validate_mei_opt, validate_phone};

#[derive(Clone)]
pub struct TeacherService {
    repo: TeacherRepository,
    students: StudentRepository,
    links: StudentTeacherRepository,
    languages: LanguageRepository,
}

impl TeacherService {
    pub fn new(
        repo: TeacherRepository,
        students: StudentRepository,
        links: StudentTeacherRepository,
        languages: LanguageRepository,
    ) -> Self {
        Self {
            repo,
            students,
            links,
            languages,
        }
    }

    /// Creates a teacher. The referenced language must exist, and CPF,
    /// phone and MEI are validated and normalized before the insert.
    pub async fn create_teacher(&self, draft: NewTeacher) -> AppResult<Teacher> {
        self.languages
            .find_by_id(draft.language_id)
            .await?
            .ok_or_else(|| AppError::not_found("language", draft.language_id))?;

        let teacher = Self::normalize_new(draft)?;
        self.repo.create(teacher).await
    }

    pub async fn get_teacher(&self, id: i32) -> AppResult<Teacher> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("teacher", id))
    }

    /// Lists teachers with skip/limit, returning the page and total count.
    pub async fn list_teachers(&self, skip: i64, limit: i64) -> AppResult<(Vec<Teacher>, i64)> {
        self.repo.list_paginated(skip, limit).await
    }

    pub async fn update_teacher(&self, id: i32, draft: UpdateTeacher) -> AppResult<Teacher> {
        self.get_teacher(id).await?;
        if let Some(language_id) = draft.language_id {
            self.languages
                .find_by_id(language_id)
                .await?
                .ok_or_else(|| AppError::not_found("language", language_id))?;
        }
        let update_data = Self::normalize_update(draft)?;
        self.repo.update(id, update_data).await
    }

    pub async fn delete_teacher(&self, id: i32) -> AppResult<()> {
        self.get_teacher(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Lists the students associated with a teacher.
    pub async fn list_students_of_teacher(&self, teacher_id: i32) -> AppResult<Vec<Student>> {
        self.get_teacher(teacher_id).await?;
        self.repo.students_of(teacher_id).await
    }

    /// Associates a student with a teacher. Same contract as the
    /// student-side operation: both must exist, a linked pair conflicts.
    pub async fn associate_student(&self, teacher_id: i32, student_id: i32) -> AppResult<String> {
        let teacher = self.get_teacher(teacher_id).await?;
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("student", student_id))?;

        let link = StudentTeacher {
            student_id,
            teacher_id,
        };
        if self.links.exists(link).await? {
            return Err(AppError::Conflict {
                message: format!(
                    "Student {} is already associated with teacher {}",
                    student.full_name, teacher.full_name
                ),
            });
        }

        self.links.insert(link).await?;
        Ok(format!(
            "Student {} associated with teacher {}",
            student.full_name, teacher.full_name
        ))
    }

    /// Removes the association between a student and a teacher.
    pub async fn disassociate_student(
        &self,
        teacher_id: i32,
        student_id: i32,
    ) -> AppResult<String> {
        let teacher = self.get_teacher(teacher_id).await?;
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("student", student_id))?;

        let link = StudentTeacher {
            student_id,
            teacher_id,
        };
        if !self.links.exists(link).await? {
            return Err(AppError::Conflict {
                message: format!(
                    "Student {} is not associated with teacher {}",
                    student.full_name, teacher.full_name
                ),
            });
        }

        self.links.delete(link).await?;
        Ok(format!(
            "Student {} disassociated from teacher {}",
            student.full_name, teacher.full_name
        ))
    }

    fn normalize_new(mut draft: NewTeacher) -> AppResult<NewTeacher> {
        draft.cpf = validate_cpf_opt(draft.cpf.as_deref())?;
        draft.phone = validate_phone(&draft.phone)?;
        draft.mei = validate_mei_opt(draft.mei.as_deref())?;
        Ok(draft)
    }

    fn normalize_update(mut draft: UpdateTeacher) -> AppResult<UpdateTeacher> {
        draft.cpf = validate_cpf_opt(draft.cpf.as_deref())?;
        if let Some(phone) = draft.phone.as_deref() {
            draft.phone = Some(validate_phone(phone)?);
        }
        draft.mei = validate_mei_opt(draft.mei.as_deref())?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn draft() -> NewTeacher {
        NewTeacher {
            language_id: 1,
            full_name: "John Smith".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 2, 2).unwrap(),
            cpf: None,
            phone: "11 98765-4321".to_string(),
            mei: Some("12.345.678/0001-95".to_string()),
            nationality: "British".to_string(),
            active: true,
            pix: None,
        }
    }

    #[test]
    fn test_normalize_new_strips_mei() {
        let teacher = TeacherService::normalize_new(draft()).unwrap();
        assert_eq!(teacher.mei.as_deref(), Some("12345678000195"));
        assert_eq!(teacher.phone, "11987654321");
    }

    #[test]
    fn test_normalize_new_rejects_short_mei() {
        let mut bad = draft();
        bad.mei = Some("123".to_string());
        assert!(TeacherService::normalize_new(bad).is_err());
    }
}
