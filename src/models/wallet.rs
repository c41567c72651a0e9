use diesel::prelude::*;

/// Wallet row, one-to-one with an administrator.
///
/// Deliberately carries no balance column: the balance is always derived
/// from the settled ledger rows so the stored data can never drift from
/// the computed total.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::wallets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Wallet {
    pub id: i32,
    pub administrator_id: i32,
}

/// NewWallet model for inserting new records.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::wallets)]
pub struct NewWallet {
    pub administrator_id: i32,
}
