use crate::domains::wallet::models::{BalanceRequest, BalanceResponse};
use crate::shared::errors::WalletError;
use crate::shared::services::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// 지갑 잔액 조회 핸들러
/// Get wallet balance handler (native SOL or SPL token)
#[utoipa::path(
    get,
    path = "/api/balance",
    params(BalanceRequest),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = BalanceResponse),
        (status = 400, description = "Missing or invalid owner/mint"),
        (status = 502, description = "Solana RPC error")
    ),
    tag = "Wallet"
)]
pub async fn get_balance(
    State(app_state): State<AppState>,
    Query(params): Query<BalanceRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, Json<serde_json::Value>)> {
    let balance = app_state
        .wallet_state
        .balance_service
        .get_balance(params)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(balance))
}
