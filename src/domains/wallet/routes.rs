// Wallet domain routes
// 지갑 도메인 라우터
use axum::{routing::get, Router};
use crate::domains::wallet::handlers::balance_handler;
use crate::shared::services::AppState;

/// Create wallet router (nested under /api)
pub fn create_wallet_router() -> Router<AppState> {
    Router::new()
        .route("/balance", get(balance_handler::get_balance))
}
