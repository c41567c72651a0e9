//! Wallet service: wallet lifecycle and the derived balance.
//!
//! A wallet stores nothing but its owner. The balance is recomputed on
//! every read from the settled ledger rows, so there is no cached total
//! to invalidate and nothing that can drift. An O(n) scan per read is
//! acceptable at single-business scale.

use bigdecimal::BigDecimal;

use crate::error::{AppError, AppResult};
use crate::models::{NewWallet, Wallet};
use crate::repositories::{
    AdministratorRepository, PayableRepository, ReceivableRepository, WalletRepository,
};

/// A wallet row together with its freshly computed balance.
#[derive(Debug, Clone)]
pub struct WalletWithBalance {
    pub id: i32,
    pub administrator_id: i32,
    pub balance: BigDecimal,
}

/// Net balance over the two ledger sums, with zero as the identity when a
/// side has no rows. The result may be negative.
fn net_balance(received: Option<BigDecimal>, paid: Option<BigDecimal>) -> BigDecimal {
    received.unwrap_or_else(|| BigDecimal::from(0)) - paid.unwrap_or_else(|| BigDecimal::from(0))
}

#[derive(Clone)]
pub struct WalletService {
    repo: WalletRepository,
    administrators: AdministratorRepository,
    payables: PayableRepository,
    receivables: ReceivableRepository,
}

impl WalletService {
    pub fn new(
        repo: WalletRepository,
        administrators: AdministratorRepository,
        payables: PayableRepository,
        receivables: ReceivableRepository,
    ) -> Self {
        Self {
            repo,
            administrators,
            payables,
            receivables,
        }
    }

    /// Computes an administrator's balance:
    /// sum of settled receivables minus sum of settled payables.
    pub async fn balance(&self, administrator_id: i32) -> AppResult<BigDecimal> {
        let received = self.receivables.total(administrator_id, Some(true)).await?;
        let paid = self.payables.total(administrator_id, Some(true)).await?;
        Ok(net_balance(received, paid))
    }

    async fn with_balance(&self, wallet: Wallet) -> AppResult<WalletWithBalance> {
        let balance = self.balance(wallet.administrator_id).await?;
        Ok(WalletWithBalance {
            id: wallet.id,
            administrator_id: wallet.administrator_id,
            balance,
        })
    }

    /// Creates a wallet for an administrator.
    ///
    /// The administrator must exist, and may own at most one wallet; a
    /// second creation is rejected as a conflict before the insert. The
    /// unique constraint on the owner column backstops races.
    pub async fn create_wallet(&self, administrator_id: i32) -> AppResult<WalletWithBalance> {
        self.administrators
            .find_by_id(administrator_id)
            .await?
            .ok_or_else(|| AppError::not_found("administrator", administrator_id))?;

        if self
            .repo
            .find_by_administrator(administrator_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict {
                message: "Administrator already has a wallet".to_string(),
            });
        }

        let wallet = self.repo.create(NewWallet { administrator_id }).await?;
        self.with_balance(wallet).await
    }

    /// Gets a wallet by id with its computed balance, or `NotFound`.
    pub async fn get_wallet(&self, id: i32) -> AppResult<WalletWithBalance> {
        let wallet = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("wallet", id))?;
        self.with_balance(wallet).await
    }

    /// Gets the wallet owned by an administrator, or `NotFound` if none
    /// has been created for them.
    pub async fn get_wallet_by_administrator(
        &self,
        administrator_id: i32,
    ) -> AppResult<WalletWithBalance> {
        let wallet = self
            .repo
            .find_by_administrator(administrator_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "wallet".to_string(),
                field: "administrator_id".to_string(),
                value: administrator_id.to_string(),
            })?;
        self.with_balance(wallet).await
    }

    /// Lists wallets, each with its computed balance.
    pub async fn list_wallets(&self, skip: i64, limit: i64) -> AppResult<Vec<WalletWithBalance>> {
        let wallets = self.repo.list(skip, limit).await?;
        let mut result = Vec::with_capacity(wallets.len());
        for wallet in wallets {
            result.push(self.with_balance(wallet).await?);
        }
        Ok(result)
    }

    pub async fn delete_wallet(&self, id: i32) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("wallet", id))?;
        self.repo.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_balance_is_received_minus_paid() {
        let balance = net_balance(Some(dec("150.00")), Some(dec("40.50")));
        assert_eq!(balance, dec("109.50"));
    }

    #[test]
    fn test_balance_zero_identity_both_sides() {
        assert_eq!(net_balance(None, None), BigDecimal::from(0));
    }

    #[test]
    fn test_balance_zero_identity_one_side() {
        assert_eq!(net_balance(Some(dec("99.90")), None), dec("99.90"));
        assert_eq!(net_balance(None, Some(dec("10.00"))), dec("-10.00"));
    }

    #[test]
    fn test_balance_may_go_negative() {
        let balance = net_balance(Some(dec("10.00")), Some(dec("25.00")));
        assert_eq!(balance, dec("-15.00"));
    }
}
