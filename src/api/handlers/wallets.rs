//! Wallet handlers.
//!
//! Every wallet response carries the balance computed fresh from the
//! settled ledger rows.

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use bigdecimal::ToPrimitive;

use crate::api::dto::{
    CreateWalletRequest, MessageResponse, PaginationParams, TotalResponse, WalletResponse,
};
use crate::api::middleware::AuthAdmin;
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates wallet routes.
///
/// Routes:
/// - GET /             - List wallets with computed balances
/// - POST /            - Create a wallet for an administrator
/// - GET /mine         - The authenticated administrator's wallet
/// - GET /{id}         - Get wallet by ID
/// - GET /{id}/balance - The computed balance as `{"total": ...}`
/// - DELETE /{id}      - Delete wallet by ID
pub fn wallet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wallets).post(create_wallet))
        .route("/mine", get(my_wallet))
        .route("/{id}", get(get_wallet).delete(delete_wallet))
        .route("/{id}/balance", get(wallet_balance))
}

/// GET /api/wallets - List wallets.
async fn list_wallets(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<Vec<WalletResponse>>> {
    let params = pagination.normalize();
    let wallets = state
        .services
        .wallets
        .list_wallets(params.skip, params.limit)
        .await?;
    Ok(Json(
        wallets.into_iter().map(WalletResponse::from).collect(),
    ))
}

/// POST /api/wallets - Create a wallet for an administrator.
async fn create_wallet(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateWalletRequest>,
) -> AppResult<(StatusCode, Json<WalletResponse>)> {
    let wallet = state
        .services
        .wallets
        .create_wallet(payload.administrator_id)
        .await?;
    Ok((StatusCode::CREATED, Json(wallet.into())))
}

/// GET /api/wallets/mine - The authenticated administrator's wallet.
async fn my_wallet(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthAdmin>,
) -> AppResult<Json<WalletResponse>> {
    let wallet = state
        .services
        .wallets
        .get_wallet_by_administrator(auth.admin_id)
        .await?;
    Ok(Json(wallet.into()))
}

/// GET /api/wallets/{id} - Get wallet by ID.
async fn get_wallet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<WalletResponse>> {
    let wallet = state.services.wallets.get_wallet(id).await?;
    Ok(Json(wallet.into()))
}

/// GET /api/wallets/{id}/balance - The computed balance.
async fn wallet_balance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TotalResponse>> {
    let wallet = state.services.wallets.get_wallet(id).await?;
    Ok(Json(TotalResponse {
        total: wallet.balance.to_f64().unwrap_or(0.0),
    }))
}

/// DELETE /api/wallets/{id} - Delete a wallet.
async fn delete_wallet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.wallets.delete_wallet(id).await?;
    Ok(Json(MessageResponse::new("Wallet deleted successfully")))
}
