//! Ledger rows: payables and receivables.
//!
//! Both belong to exactly one administrator and carry a settlement flag
//! (`settled = false` is pending). The wallet balance is derived from the
//! settled rows of these two tables.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Payable model for reading from database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::payables)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payable {
    pub id: i32,
    pub administrator_id: i32,
    pub name: String,
    pub amount: BigDecimal,
    pub due_date: NaiveDate,
    pub settled: bool,
}

/// NewPayable model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::payables)]
pub struct NewPayable {
    pub administrator_id: i32,
    pub name: String,
    pub amount: BigDecimal,
    pub due_date: NaiveDate,
    pub settled: bool,
}

/// UpdatePayable changeset listing exactly the mutable fields.
///
/// The settlement flag is intentionally absent: settling and un-settling
/// go through the dedicated mark operations.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::payables)]
pub struct UpdatePayable {
    pub name: Option<String>,
    pub amount: Option<BigDecimal>,
    pub due_date: Option<NaiveDate>,
}

/// Receivable model for reading from database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::receivables)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Receivable {
    pub id: i32,
    pub administrator_id: i32,
    pub name: String,
    pub amount: BigDecimal,
    pub receipt_date: NaiveDate,
    pub settled: bool,
}

/// NewReceivable model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::receivables)]
pub struct NewReceivable {
    pub administrator_id: i32,
    pub name: String,
    pub amount: BigDecimal,
    pub receipt_date: NaiveDate,
    pub settled: bool,
}

/// UpdateReceivable changeset listing exactly the mutable fields.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::receivables)]
pub struct UpdateReceivable {
    pub name: Option<String>,
    pub amount: Option<BigDecimal>,
    pub receipt_date: Option<NaiveDate>,
}
