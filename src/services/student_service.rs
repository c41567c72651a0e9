//! Student service: CRUD plus the student↔teacher association.

use crate::error::{AppError, AppResult};
use crate::models::{NewStudent, Student, StudentTeacher, Teacher, UpdateStudent};
use crate::repositories::{StudentRepository, StudentTeacherRepository, TeacherRepository};
use crate::utils::validators::{validate_billing_day_opt, validate_cpf_opt, validate_phone};

#[derive(Clone)]
pub struct StudentService {
    repo: StudentRepository,
    teachers: TeacherRepository,
    links: StudentTeacherRepository,
}

impl StudentService {
    pub fn new(
        repo: StudentRepository,
        teachers: TeacherRepository,
        links: StudentTeacherRepository,
    ) -> Self {
        Self {
            repo,
            teachers,
            links,
        }
    }

    /// Creates a student. CPF, phone and billing day are validated and
    /// normalized before the row is written.
    pub async fn create_student(&self, draft: NewStudent) -> AppResult<Student> {
        let student = Self::normalize_new(draft)?;
        self.repo.create(student).await
    }

    pub async fn get_student(&self, id: i32) -> AppResult<Student> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("student", id))
    }

    pub async fn list_students(&self, skip: i64, limit: i64) -> AppResult<Vec<Student>> {
        self.repo.list(skip, limit).await
    }

    pub async fn update_student(&self, id: i32, draft: UpdateStudent) -> AppResult<Student> {
        self.get_student(id).await?;
        let update_data = Self::normalize_update(draft)?;
        self.repo.update(id, update_data).await
    }

    /// Deletes a student. Tuition rows cascade at the storage layer.
    pub async fn delete_student(&self, id: i32) -> AppResult<()> {
        self.get_student(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Lists the teachers associated with a student.
    pub async fn list_teachers_of_student(&self, student_id: i32) -> AppResult<Vec<Teacher>> {
        self.get_student(student_id).await?;
        self.repo.teachers_of(student_id).await
    }

    /// Associates a teacher with a student.
    ///
    /// Both sides must exist; an existing link is a conflict, never a
    /// silent no-op. Returns a confirmation naming both sides.
    pub async fn associate_teacher(&self, student_id: i32, teacher_id: i32) -> AppResult<String> {
        let student = self.get_student(student_id).await?;
        let teacher = self
            .teachers
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found("teacher", teacher_id))?;

        let link = StudentTeacher {
            student_id,
            teacher_id,
        };
        if self.links.exists(link).await? {
            return Err(AppError::Conflict {
                message: format!(
                    "Teacher {} is already associated with student {}",
                    teacher.full_name, student.full_name
                ),
            });
        }

        self.links.insert(link).await?;
        Ok(format!(
            "Teacher {} associated with student {}",
            teacher.full_name, student.full_name
        ))
    }

    /// Removes the association between a teacher and a student.
    ///
    /// An unlinked pair is a conflict, so the caller always gets a clear
    /// signal instead of a silent no-op.
    pub async fn disassociate_teacher(
        &self,
        student_id: i32,
        teacher_id: i32,
    ) -> AppResult<String> {
        let student = self.get_student(student_id).await?;
        let teacher = self
            .teachers
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| AppError::not_found("teacher", teacher_id))?;

        let link = StudentTeacher {
            student_id,
            teacher_id,
        };
        if !self.links.exists(link).await? {
            return Err(AppError::Conflict {
                message: format!(
                    "Teacher {} is not associated with student {}",
                    teacher.full_name, student.full_name
                ),
            });
        }

        self.links.delete(link).await?;
        Ok(format!(
            "Teacher {} disassociated from student {}",
            teacher.full_name, student.full_name
        ))
    }

    fn normalize_new(mut draft: NewStudent) -> AppResult<NewStudent> {
        draft.cpf = validate_cpf_opt(draft.cpf.as_deref())?;
        draft.phone = validate_phone(&draft.phone)?;
        draft.billing_day = validate_billing_day_opt(draft.billing_day)?;
        Ok(draft)
    }

    fn normalize_update(mut draft: UpdateStudent) -> AppResult<UpdateStudent> {
        draft.cpf = validate_cpf_opt(draft.cpf.as_deref())?;
        if let Some(phone) = draft.phone.as_deref() {
            draft.phone = Some(validate_phone(phone)?);
        }
        draft.billing_day = validate_billing_day_opt(draft.billing_day)?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn draft() -> NewStudent {
        NewStudent {
            full_name: "Ana Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2001, 5, 14).unwrap(),
            cpf: Some("111.444.777-35".to_string()),
            phone: "(11) 98765-4321".to_string(),
            payment_preference: None,
            billing_day: Some(10),
            country: Some("Brasil".to_string()),
            active: true,
        }
    }

    #[test]
    fn test_normalize_new_strips_punctuation() {
        let student = StudentService::normalize_new(draft()).unwrap();
        assert_eq!(student.cpf.as_deref(), Some("11144477735"));
        assert_eq!(student.phone, "11987654321");
    }

    #[test]
    fn test_normalize_new_rejects_bad_cpf() {
        let mut bad = draft();
        bad.cpf = Some("11111111111".to_string());
        assert!(StudentService::normalize_new(bad).is_err());
    }

    #[test]
    fn test_normalize_new_rejects_bad_billing_day() {
        let mut bad = draft();
        bad.billing_day = Some(32);
        assert!(StudentService::normalize_new(bad).is_err());
    }

    #[test]
    fn test_normalize_update_skips_absent_fields() {
        let update = StudentService::normalize_update(UpdateStudent::default()).unwrap();
        assert!(update.cpf.is_none());
        assert!(update.phone.is_none());
    }

    #[test]
    fn test_normalize_update_validates_present_phone() {
        let update = UpdateStudent {
            phone: Some("11887654321".to_string()),
            ..Default::default()
        };
        assert!(StudentService::normalize_update(update).is_err());
    }
}
