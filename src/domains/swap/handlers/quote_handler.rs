use crate::domains::swap::models::{ProxyResponse, QuotePreviewRequest, QuoteRequest};
use crate::shared::errors::SwapError;
use crate::shared::services::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

// 스왑 가격 조회 핸들러
// Handler: proxies Jupiter quote (primary, then fallback once)
// Jupiter가 에러를 반환해도 HTTP 200 + success:false 로 응답
#[utoipa::path(
    get,
    path = "/api/quote",
    params(QuoteRequest),
    responses(
        (status = 200, description = "Quote envelope (success or upstream failure)", body = ProxyResponse),
        (status = 400, description = "Missing inputMint/outputMint/amount"),
        (status = 500, description = "Jupiter unreachable")
    ),
    tag = "Swap"
)]
pub async fn get_quote(
    State(app_state): State<AppState>,
    Query(params): Query<QuoteRequest>,
) -> Result<Json<ProxyResponse>, (StatusCode, Json<serde_json::Value>)> {
    let quote = app_state
        .swap_state
        .swap_service
        .get_quote(params)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(quote))
}

// quote 미리보기 핸들러
// Handler: converts UI amount/slippage and returns display-ready output amount
#[utoipa::path(
    get,
    path = "/api/quote/preview",
    params(QuotePreviewRequest),
    responses(
        (status = 200, description = "Preview envelope; data is a QuotePreview on success", body = ProxyResponse),
        (status = 400, description = "Missing parameters or invalid amount"),
        (status = 500, description = "Jupiter unreachable")
    ),
    tag = "Swap"
)]
pub async fn preview_quote(
    State(app_state): State<AppState>,
    Query(params): Query<QuotePreviewRequest>,
) -> Result<Json<ProxyResponse>, (StatusCode, Json<serde_json::Value>)> {
    let preview = app_state
        .swap_state
        .swap_service
        .preview_quote(params)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(preview))
}
