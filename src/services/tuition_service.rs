//! Tuition status service: per-student billing records and the monthly
//! aggregation.

use crate::error::{AppError, AppResult};
use crate::models::{
    NewTuitionStatus, STATUS_LATE, STATUS_PAID, STATUS_PENDING, TuitionStatus,
    UpdateTuitionStatus,
};
use crate::repositories::{StudentRepository, TuitionFilter, TuitionStatusRepository};

/// Running totals keyed by the canonical status labels.
///
/// Labels are matched case-insensitively. A row with an unrecognized
/// label lands in no bucket but still counts toward the grand total,
/// mirroring the observed aggregation behavior.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TuitionTotals {
    pub paid: f64,
    pub pending: f64,
    pub late: f64,
    pub total: f64,
}

impl TuitionTotals {
    /// Folds one row into the totals.
    pub fn accumulate(&mut self, status: &str, amount: f64) {
        self.total += amount;
        if status.eq_ignore_ascii_case(STATUS_PAID) {
            self.paid += amount;
        } else if status.eq_ignore_ascii_case(STATUS_PENDING) {
            self.pending += amount;
        } else if status.eq_ignore_ascii_case(STATUS_LATE) {
            self.late += amount;
        }
    }

    /// Folds a whole row set.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut totals = Self::default();
        for (status, amount) in rows {
            totals.accumulate(status, amount);
        }
        totals
    }
}

#[derive(Clone)]
pub struct TuitionService {
    repo: TuitionStatusRepository,
    students: StudentRepository,
}

impl TuitionService {
    pub fn new(repo: TuitionStatusRepository, students: StudentRepository) -> Self {
        Self { repo, students }
    }

    /// Creates a tuition status. The referenced student must exist before
    /// the row is written.
    pub async fn create_tuition_status(
        &self,
        new_status: NewTuitionStatus,
    ) -> AppResult<TuitionStatus> {
        self.students
            .find_by_id(new_status.student_id)
            .await?
            .ok_or_else(|| AppError::not_found("student", new_status.student_id))?;

        self.repo.create(new_status).await
    }

    pub async fn get_tuition_status(&self, id: i32) -> AppResult<TuitionStatus> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("tuition status", id))
    }

    /// Lists tuition statuses under optional filters, newest first,
    /// returning the page and the total count.
    pub async fn list_tuition_statuses(
        &self,
        filter: TuitionFilter,
        skip: i64,
        limit: i64,
    ) -> AppResult<(Vec<TuitionStatus>, i64)> {
        self.repo.list_paginated(&filter, skip, limit).await
    }

    /// All tuition rows of one student, newest first.
    pub async fn list_by_student(&self, student_id: i32) -> AppResult<Vec<TuitionStatus>> {
        self.students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("student", student_id))?;

        self.repo.list_by_student(student_id).await
    }

    /// Tuition rows for one calendar month of one year.
    pub async fn list_by_month_year(
        &self,
        month: u32,
        year: i32,
    ) -> AppResult<Vec<TuitionStatus>> {
        Self::check_month(month)?;
        let filter = TuitionFilter {
            month: Some(month),
            year: Some(year),
            ..Default::default()
        };
        let (rows, _) = self.repo.list_paginated(&filter, 0, i64::MAX).await?;
        Ok(rows)
    }

    /// Rows whose status is exactly "Pendente" or "Atrasado", ordered by
    /// date ascending: soonest or most overdue first.
    pub async fn list_pending_or_late(&self) -> AppResult<Vec<TuitionStatus>> {
        self.repo.list_pending_or_late().await
    }

    /// Updates a tuition status. A changed student reference is
    /// re-validated before the write.
    pub async fn update_tuition_status(
        &self,
        id: i32,
        update_data: UpdateTuitionStatus,
    ) -> AppResult<TuitionStatus> {
        self.get_tuition_status(id).await?;
        if let Some(student_id) = update_data.student_id {
            self.students
                .find_by_id(student_id)
                .await?
                .ok_or_else(|| AppError::not_found("student", student_id))?;
        }
        self.repo.update(id, update_data).await
    }

    pub async fn delete_tuition_status(&self, id: i32) -> AppResult<()> {
        self.get_tuition_status(id).await?;
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Totals by status for an optional month/year window.
    pub async fn totals_by_status(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> AppResult<TuitionTotals> {
        if let Some(m) = month {
            Self::check_month(m)?;
        }
        let rows = self.repo.list_for_totals(month, year).await?;
        Ok(TuitionTotals::from_rows(
            rows.iter().map(|row| (row.status.as_str(), row.amount)),
        ))
    }

    fn check_month(month: u32) -> AppResult<()> {
        if !(1..=12).contains(&month) {
            return Err(AppError::validation(
                "month",
                "Month must be between 1 and 12",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_by_status_buckets() {
        let totals = TuitionTotals::from_rows([
            ("Pago", 100.0),
            ("Pendente", 50.0),
            ("Atrasado", 30.0),
        ]);
        assert_eq!(
            totals,
            TuitionTotals {
                paid: 100.0,
                pending: 50.0,
                late: 30.0,
                total: 180.0,
            }
        );
    }

    #[test]
    fn test_totals_match_case_insensitively() {
        let totals = TuitionTotals::from_rows([("pago", 10.0), ("PENDENTE", 5.0)]);
        assert_eq!(totals.paid, 10.0);
        assert_eq!(totals.pending, 5.0);
        assert_eq!(totals.total, 15.0);
    }

    #[test]
    fn test_unrecognized_label_counts_only_toward_total() {
        let totals = TuitionTotals::from_rows([("Pago", 10.0), ("Cancelado", 7.0)]);
        assert_eq!(totals.paid, 10.0);
        assert_eq!(totals.pending, 0.0);
        assert_eq!(totals.late, 0.0);
        assert_eq!(totals.total, 17.0);
    }

    #[test]
    fn test_empty_rows_are_all_zero() {
        let totals = TuitionTotals::from_rows(std::iter::empty::<(&str, f64)>());
        assert_eq!(totals, TuitionTotals::default());
    }
}
