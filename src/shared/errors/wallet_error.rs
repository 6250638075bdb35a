use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 지갑 잔액 조회 관련 에러
/// Wallet balance errors
#[derive(Error, Debug)]
pub enum WalletError {
    /// owner 또는 mint 파라미터 없음
    #[error("Missing owner/mint")]
    MissingParams,

    /// Public Key 파싱 실패
    /// Failed to parse public key
    #[error("Failed to parse public key: {public_key}")]
    InvalidPublicKey { public_key: String },

    /// Solana 네트워크 에러
    /// Solana network error
    #[error("Solana network error: {0}")]
    SolanaNetworkError(String),
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        let status = match &err {
            WalletError::MissingParams
            | WalletError::InvalidPublicKey { .. } => StatusCode::BAD_REQUEST,
            WalletError::SolanaNetworkError(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "success": false, "error": err.to_string() })))
    }
}
