use crate::domains::market::models::SolPriceResponse;
use crate::shared::services::AppState;
use axum::{extract::State, Json};

// SOL 가격 조회 핸들러
// Handler: latest polled SOL/USD price (never calls upstream itself)
#[utoipa::path(
    get,
    path = "/api/sol-price",
    responses(
        (status = 200, description = "Latest SOL price; nulls before the first successful poll", body = SolPriceResponse)
    ),
    tag = "Market"
)]
pub async fn get_sol_price(State(app_state): State<AppState>) -> Json<SolPriceResponse> {
    Json(app_state.market_state.price_tracker.latest().into())
}
