//! Wallet DTOs.

use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::WalletWithBalance;

/// Request body for creating a wallet for an administrator.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWalletRequest {
    #[validate(range(min = 1, message = "Administrator id must be positive"))]
    pub administrator_id: i32,
}

/// Response body for wallet data with the freshly computed balance.
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    pub id: i32,
    pub administrator_id: i32,
    pub balance: f64,
}

impl From<WalletWithBalance> for WalletResponse {
    fn from(wallet: WalletWithBalance) -> Self {
        Self {
            id: wallet.id,
            administrator_id: wallet.administrator_id,
            balance: wallet.balance.to_f64().unwrap_or(0.0),
        }
    }
}
