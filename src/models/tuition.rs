use chrono::NaiveDate;
use diesel::prelude::*;

/// Canonical tuition status labels. Stored values are free-form strings;
/// the aggregation matches them case-insensitively against these.
pub const STATUS_PAID: &str = "Pago";
pub const STATUS_PENDING: &str = "Pendente";
pub const STATUS_LATE: &str = "Atrasado";

/// Per-student, per-period billing record.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::tuition_statuses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TuitionStatus {
    pub id: i32,
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: String,
    pub amount: f64,
}

/// NewTuitionStatus model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::tuition_statuses)]
pub struct NewTuitionStatus {
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: String,
    pub amount: f64,
}

/// UpdateTuitionStatus changeset listing exactly the mutable fields.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::tuition_statuses)]
pub struct UpdateTuitionStatus {
    pub student_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
    pub amount: Option<f64>,
}
