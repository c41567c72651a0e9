use chrono::NaiveDate;
use diesel::prelude::*;

/// Teacher model for reading from database.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::teachers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Teacher {
    pub id: i32,
    pub language_id: i32,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    pub contract_pdf: Option<Vec<u8>>,
    pub mei: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub nationality: String,
    pub active: bool,
    pub pix: Option<String>,
}

/// NewTeacher model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::teachers)]
pub struct NewTeacher {
    pub language_id: i32,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub cpf: Option<String>,
    pub phone: String,
    pub mei: Option<String>,
    pub nationality: String,
    pub active: bool,
    pub pix: Option<String>,
}

/// UpdateTeacher changeset listing exactly the mutable fields.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::teachers)]
pub struct UpdateTeacher {
    pub language_id: Option<i32>,
    pub full_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub mei: Option<String>,
    pub nationality: Option<String>,
    pub active: Option<bool>,
    pub pix: Option<String>,
}
