use chrono::NaiveDate;
use diesel::prelude::*;

/// Student model for reading from database.
///
/// `cpf` and `phone` are stored normalized (digits only); normalization
/// happens in the service layer before any row is written.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    pub payment_preference: Option<String>,
    pub billing_day: Option<i32>,
    pub photo: Option<Vec<u8>>,
    pub country: Option<String>,
    pub active: bool,
}

/// NewStudent model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::students)]
pub struct NewStudent {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    pub payment_preference: Option<String>,
    pub billing_day: Option<i32>,
    pub country: Option<String>,
    pub active: bool,
}

/// UpdateStudent changeset listing exactly the mutable fields.
/// None fields are left untouched by the UPDATE.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::students)]
pub struct UpdateStudent {
    pub full_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub payment_preference: Option<String>,
    pub billing_day: Option<i32>,
    pub country: Option<String>,
    pub active: Option<bool>,
}
