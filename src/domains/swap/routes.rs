// Swap domain routes
// 스왑 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::swap::handlers::{quote_handler, swap_handler};
use crate::shared::services::AppState;

/// Create swap router (nested under /api)
/// 스왑 라우터 생성
pub fn create_swap_router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(quote_handler::get_quote))
        .route("/quote/preview", get(quote_handler::preview_quote))
        .route("/swap", post(swap_handler::create_swap_transaction))
}
