use crate::domains::tokens::models::{PopularTokensResponse, TokenSearchRequest, TokenSearchResponse};
use crate::shared::errors::TokenError;
use crate::shared::services::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

// 토큰 검색 핸들러
// Handler: SolanaTracker token search
#[utoipa::path(
    get,
    path = "/api/token-search",
    params(TokenSearchRequest),
    responses(
        (status = 200, description = "Search results, or the backend's own failure with success:false", body = TokenSearchResponse),
        (status = 500, description = "Missing BACKEND_API_KEY or backend unreachable"),
        (status = 502, description = "Invalid JSON from backend")
    ),
    tag = "Tokens"
)]
pub async fn search_tokens(
    State(app_state): State<AppState>,
    Query(params): Query<TokenSearchRequest>,
) -> Result<Json<TokenSearchResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .token_state
        .token_service
        .search_tokens(params)
        .await
        .map_err(|e: TokenError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

// 인기 토큰 목록 핸들러
// Handler: tokens ranked by 24h volume (SOL, USDC/USDT first)
#[utoipa::path(
    get,
    path = "/api/tokens",
    responses(
        (status = 200, description = "Token list; `note` is set when the Jupiter fallback was used", body = PopularTokensResponse),
        (status = 500, description = "Missing BACKEND_API_KEY and Jupiter fallback failed"),
        (status = 502, description = "SolanaTracker and Jupiter fallback both failed")
    ),
    tag = "Tokens"
)]
pub async fn get_popular_tokens(
    State(app_state): State<AppState>,
) -> Result<Json<PopularTokensResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .token_state
        .token_service
        .popular_tokens()
        .await
        .map_err(|e: TokenError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
