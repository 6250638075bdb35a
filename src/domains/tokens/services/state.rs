// Tokens domain state
// 토큰 도메인 상태
use crate::shared::clients::{JupiterClient, SolanaTrackerClient};
use crate::domains::tokens::services::TokenService;

/// Tokens domain state
#[derive(Clone)]
pub struct TokenState {
    pub token_service: TokenService,
}

impl TokenState {
    pub fn new(tracker_client: SolanaTrackerClient, jupiter_client: JupiterClient) -> Self {
        Self {
            token_service: TokenService::new(tracker_client, jupiter_client),
        }
    }
}
