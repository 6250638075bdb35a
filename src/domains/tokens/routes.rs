// Tokens domain routes
use axum::{routing::get, Router};
use crate::domains::tokens::handlers::token_handler;
use crate::shared::services::AppState;

/// Create tokens router (nested under /api)
/// 토큰 라우터 생성
pub fn create_tokens_router() -> Router<AppState> {
    Router::new()
        .route("/token-search", get(token_handler::search_tokens))
        .route("/tokens", get(token_handler::get_popular_tokens))
}
