use crate::domains::swap::models::{ProxyResponse, SwapTransactionRequest};
use crate::shared::errors::SwapError;
use crate::shared::services::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

// 스왑 트랜잭션 생성 핸들러
// Handler: quote + Jupiter swap build; the browser wallet signs and sends the result
// 본문이 JSON이 아니어도 400(필수값 누락)으로 처리하기 위해 Bytes로 받음
#[utoipa::path(
    post,
    path = "/api/swap",
    request_body = SwapTransactionRequest,
    responses(
        (status = 200, description = "Swap envelope (success, or failure with stage quote/swap)", body = ProxyResponse),
        (status = 400, description = "Missing inputMint/outputMint/amount/userPublicKey"),
        (status = 500, description = "Jupiter unreachable")
    ),
    tag = "Swap"
)]
pub async fn create_swap_transaction(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProxyResponse>, (StatusCode, Json<serde_json::Value>)> {
    let request = SwapTransactionRequest::from_body(&body);

    let swap_response = app_state
        .swap_state
        .swap_service
        .create_swap_transaction(request)
        .await
        .map_err(|e: SwapError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(swap_response))
}
