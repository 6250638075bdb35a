use std::sync::Arc;
use crate::shared::config::AppConfig;
use crate::shared::clients::{
    build_http_client, JupiterClient, SolPriceClient, SolanaClient, SolanaTrackerClient,
};
use crate::domains::swap::services::state::SwapState;
use crate::domains::tokens::services::state::TokenState;
use crate::domains::market::services::state::MarketState;
use crate::domains::wallet::services::state::WalletState;
use anyhow::Result;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 업스트림 클라이언트는 하나의 reqwest::Client(커넥션 풀)를 공유합니다.
#[derive(Clone)]
pub struct AppState {
    /// 서버 설정 (공유)
    pub config: Arc<AppConfig>,
    pub swap_state: SwapState,
    pub token_state: TokenState,
    pub market_state: MarketState,
    pub wallet_state: WalletState,
}

impl AppState {
    /// Create AppState from configuration
    /// 모든 도메인 State를 초기화하고 조합
    ///
    /// SOL 가격 추적기는 생성만 하고 시작하지 않습니다 (`market_state.price_tracker.start()`).
    pub fn new(config: AppConfig) -> Result<Self> {
        // 1. 공유 클라이언트 생성
        let http_client = build_http_client(&config)?;
        let jupiter_client = JupiterClient::new(http_client.clone(), &config);
        let tracker_client = SolanaTrackerClient::new(http_client.clone(), &config);
        let sol_price_client = SolPriceClient::new(http_client, &config);
        let solana_client = SolanaClient::new(&config.solana_rpc_url);

        // 2. 각 도메인 State 생성
        let swap_state = SwapState::new(jupiter_client.clone());
        let token_state = TokenState::new(tracker_client, jupiter_client);
        let market_state = MarketState::new(
            sol_price_client,
            config.sol_price_poll_interval,
            config.sol_price_tracker_enabled,
        );
        let wallet_state = WalletState::new(solana_client);

        // 3. AppState 조합
        Ok(Self {
            config: Arc::new(config),
            swap_state,
            token_state,
            market_state,
            wallet_state,
        })
    }
}
