// Market domain routes
use axum::{routing::get, Router};
use crate::domains::market::handlers::price_handler;
use crate::shared::services::AppState;

/// Create market router (nested under /api)
pub fn create_market_router() -> Router<AppState> {
    Router::new()
        .route("/sol-price", get(price_handler::get_sol_price))
}
