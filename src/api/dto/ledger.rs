//! Payable and receivable DTOs.
//!
//! The owning administrator never comes from the payload: it is always
//! the authenticated identity resolved by the auth middleware.

use bigdecimal::ToPrimitive;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::money;
use crate::error::AppResult;
use crate::models::{
    NewPayable, NewReceivable, Payable, Receivable, UpdatePayable, UpdateReceivable,
};

/// Query filter for the settlement status of ledger listings and totals.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SettledFilter {
    pub settled: Option<bool>,
}

/// Request body for creating a new payable.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePayableRequest {
    #[validate(length(min = 1, max = 250, message = "Name must be between 1 and 250 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub settled: bool,
}

impl CreatePayableRequest {
    pub fn into_new_payable(self, owner: i32) -> AppResult<NewPayable> {
        Ok(NewPayable {
            administrator_id: owner,
            name: self.name,
            amount: money(self.amount, "amount")?,
            due_date: self.due_date,
            settled: self.settled,
        })
    }
}

/// Request body for partially updating a payable.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdatePayableRequest {
    #[validate(length(min = 1, max = 250, message = "Name must be between 1 and 250 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
}

impl UpdatePayableRequest {
    pub fn into_update_payable(self) -> AppResult<UpdatePayable> {
        Ok(UpdatePayable {
            name: self.name,
            amount: self.amount.map(|v| money(v, "amount")).transpose()?,
            due_date: self.due_date,
        })
    }
}

/// Response body for payable data.
#[derive(Debug, Serialize)]
pub struct PayableResponse {
    pub id: i32,
    pub administrator_id: i32,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub settled: bool,
}

impl From<Payable> for PayableResponse {
    fn from(payable: Payable) -> Self {
        Self {
            id: payable.id,
            administrator_id: payable.administrator_id,
            name: payable.name,
            amount: payable.amount.to_f64().unwrap_or(0.0),
            due_date: payable.due_date,
            settled: payable.settled,
        }
    }
}

/// Request body for creating a new receivable.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReceivableRequest {
    #[validate(length(min = 1, max = 250, message = "Name must be between 1 and 250 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
    pub receipt_date: NaiveDate,
    #[serde(default)]
    pub settled: bool,
}

impl CreateReceivableRequest {
    pub fn into_new_receivable(self, owner: i32) -> AppResult<NewReceivable> {
        Ok(NewReceivable {
            administrator_id: owner,
            name: self.name,
            amount: money(self.amount, "amount")?,
            receipt_date: self.receipt_date,
            settled: self.settled,
        })
    }
}

/// Request body for partially updating a receivable.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateReceivableRequest {
    #[validate(length(min = 1, max = 250, message = "Name must be between 1 and 250 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: Option<f64>,
    pub receipt_date: Option<NaiveDate>,
}

impl UpdateReceivableRequest {
    pub fn into_update_receivable(self) -> AppResult<UpdateReceivable> {
        Ok(UpdateReceivable {
            name: self.name,
            amount: self.amount.map(|v| money(v, "amount")).transpose()?,
            receipt_date: self.receipt_date,
        })
    }
}

/// Response body for receivable data.
#[derive(Debug, Serialize)]
pub struct ReceivableResponse {
    pub id: i32,
    pub administrator_id: i32,
    pub name: String,
    pub amount: f64,
    pub receipt_date: NaiveDate,
    pub settled: bool,
}

impl From<Receivable> for ReceivableResponse {
    fn from(receivable: Receivable) -> Self {
        Self {
            id: receivable.id,
            administrator_id: receivable.administrator_id,
            name: receivable.name,
            amount: receivable.amount.to_f64().unwrap_or(0.0),
            receipt_date: receivable.receipt_date,
            settled: receivable.settled,
        }
    }
}
