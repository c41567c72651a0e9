//! Tuition status DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewTuitionStatus, TuitionStatus, UpdateTuitionStatus};
use crate::repositories::TuitionFilter;
use crate::services::TuitionTotals;

/// Query filters for the tuition status listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TuitionListFilter {
    pub student_id: Option<i32>,
    pub status: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl From<TuitionListFilter> for TuitionFilter {
    fn from(filter: TuitionListFilter) -> Self {
        TuitionFilter {
            student_id: filter.student_id,
            status: filter.status,
            month: filter.month,
            year: filter.year,
        }
    }
}

/// Request body for creating a new tuition status.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTuitionStatusRequest {
    pub student_id: i32,
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 50, message = "Status must be between 1 and 50 characters"))]
    pub status: String,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
}

impl CreateTuitionStatusRequest {
    pub fn into_new_tuition_status(self) -> NewTuitionStatus {
        NewTuitionStatus {
            student_id: self.student_id,
            date: self.date,
            status: self.status,
            amount: self.amount,
        }
    }
}

/// Request body for partially updating a tuition status.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateTuitionStatusRequest {
    pub student_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50, message = "Status must be between 1 and 50 characters"))]
    pub status: Option<String>,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: Option<f64>,
}

impl UpdateTuitionStatusRequest {
    pub fn into_update_tuition_status(self) -> UpdateTuitionStatus {
        UpdateTuitionStatus {
            student_id: self.student_id,
            date: self.date,
            status: self.status,
            amount: self.amount,
        }
    }
}

/// Response body for tuition status data.
#[derive(Debug, Serialize)]
pub struct TuitionStatusResponse {
    pub id: i32,
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: String,
    pub amount: f64,
}

impl From<TuitionStatus> for TuitionStatusResponse {
    fn from(status: TuitionStatus) -> Self {
        Self {
            id: status.id,
            student_id: status.student_id,
            date: status.date,
            status: status.status,
            amount: status.amount,
        }
    }
}

/// Totals per canonical status label plus the grand total.
#[derive(Debug, Serialize)]
pub struct TuitionTotalsResponse {
    pub pago: f64,
    pub pendente: f64,
    pub atrasado: f64,
    pub total: f64,
}

impl From<TuitionTotals> for TuitionTotalsResponse {
    fn from(totals: TuitionTotals) -> Self {
        Self {
            pago: totals.paid,
            pendente: totals.pending,
            atrasado: totals.late,
            total: totals.total,
        }
    }
}
