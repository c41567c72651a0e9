use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Daily to-do item owned by an administrator.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Todo {
    pub id: i32,
    pub text: String,
    pub done: bool,
    pub created_at: NaiveDateTime,
    pub administrator_id: i32,
}

/// NewTodo model for inserting new records.
/// `created_at` is filled in by the database default.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::todos)]
pub struct NewTodo {
    pub text: String,
    pub done: bool,
    pub administrator_id: i32,
}

/// UpdateTodo changeset listing exactly the mutable fields.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::todos)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub done: Option<bool>,
    pub administrator_id: Option<i32>,
}
