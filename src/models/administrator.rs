use diesel::prelude::*;

/// Administrator model for reading from database.
///
/// The name is the unique business key; the password is only ever stored
/// as an Argon2id hash.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::administrators)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Administrator {
    pub id: i32,
    pub name: String,
    pub password_hash: String,
}

/// NewAdministrator model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::administrators)]
pub struct NewAdministrator {
    pub name: String,
    pub password_hash: String,
}
