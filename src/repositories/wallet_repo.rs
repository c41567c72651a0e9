//! Wallet repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewWallet, Wallet};

/// Wallet repository holding an async connection pool.
#[derive(Clone)]
pub struct WalletRepository {
    pool: AsyncDbPool,
}

impl WalletRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_wallet: NewWallet) -> Result<Wallet, AppError> {
        use crate::schema::wallets::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(wallets)
            .values(&new_wallet)
            .returning(Wallet::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, wallet_id: i32) -> Result<Option<Wallet>, AppError> {
        use crate::schema::wallets::dsl::*;
        let mut conn = self.pool.get().await?;

        wallets
            .filter(id.eq(wallet_id))
            .select(Wallet::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds the wallet owned by an administrator, if any.
    pub async fn find_by_administrator(&self, admin_id: i32) -> Result<Option<Wallet>, AppError> {
        use crate::schema::wallets::dsl::*;
        let mut conn = self.pool.get().await?;

        wallets
            .filter(administrator_id.eq(admin_id))
            .select(Wallet::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Wallet>, AppError> {
        use crate::schema::wallets::dsl::*;
        let mut conn = self.pool.get().await?;

        wallets
            .order(id.asc())
            .offset(skip)
            .limit(limit)
            .select(Wallet::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn delete(&self, wallet_id: i32) -> Result<usize, AppError> {
        use crate::schema::wallets::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(wallets.filter(id.eq(wallet_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
