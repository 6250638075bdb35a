use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 스왑 관련 에러
/// Swap-related errors
///
/// Note: Jupiter가 non-2xx로 응답한 경우는 에러가 아니라
/// `success: false` 응답(200)으로 처리됩니다. 여기에는 요청 자체의 문제와
/// 네트워크 실패만 들어갑니다.
#[derive(Error, Debug)]
pub enum SwapError {
    /// 필수 파라미터 누락
    /// Missing required parameters
    #[error("Missing {0}")]
    MissingParams(&'static str),

    /// 잘못된 수량 (UI 수량 → base unit 변환 실패)
    /// Invalid amount
    #[error("Invalid amount")]
    InvalidAmount,

    /// 업스트림 호출 실패 (양쪽 URL 모두 연결 실패 등)
    /// Upstream request failed
    #[error("{0}")]
    Upstream(String),
}

/// SwapError를 HTTP 응답으로 변환
impl From<SwapError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: SwapError) -> Self {
        let status = match &err {
            SwapError::MissingParams(_) | SwapError::InvalidAmount => StatusCode::BAD_REQUEST,
            SwapError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "success": false, "error": err.to_string() })))
    }
}
