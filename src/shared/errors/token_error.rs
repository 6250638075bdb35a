use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 토큰 검색/목록 관련 에러
/// Token search / listing errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// SolanaTracker API 키 없음
    #[error("Missing BACKEND_API_KEY")]
    MissingApiKey,

    /// API 키도 없고 Jupiter 토큰 리스트도 실패
    #[error("Missing BACKEND_API_KEY and Jupiter fallback failed.")]
    MissingKeyAndFallbackFailed,

    /// SolanaTracker가 JSON이 아닌 응답을 반환
    /// Backend returned a non-JSON body
    #[error("Invalid JSON from backend")]
    InvalidBackendJson { body: String },

    /// SolanaTracker 실패 후 Jupiter fallback도 실패
    #[error("{0}")]
    FallbackFailed(String),

    /// 업스트림 호출 실패
    #[error("{0}")]
    Upstream(String),
}

/// TokenError를 HTTP 응답으로 변환
impl From<TokenError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: TokenError) -> Self {
        match &err {
            TokenError::InvalidBackendJson { body } => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "success": false, "error": err.to_string(), "body": body })),
            ),
            TokenError::FallbackFailed(_) => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "success": false, "error": err.to_string() })),
            ),
            TokenError::MissingApiKey
            | TokenError::MissingKeyAndFallbackFailed
            | TokenError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": err.to_string() })),
            ),
        }
    }
}
