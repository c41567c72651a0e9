use diesel::prelude::*;
use serde::Deserialize;

/// Language taught at the school.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::languages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Language {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::languages)]
pub struct NewLanguage {
    pub name: String,
}

#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::languages)]
pub struct UpdateLanguage {
    pub name: Option<String>,
}
