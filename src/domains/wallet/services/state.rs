// Wallet domain state
// 지갑 도메인 상태
use crate::shared::clients::SolanaClient;
use crate::domains::wallet::services::BalanceService;

/// Wallet domain state
/// 지갑 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct WalletState {
    pub balance_service: BalanceService,
}

impl WalletState {
    pub fn new(solana_client: SolanaClient) -> Self {
        Self {
            balance_service: BalanceService::new(solana_client),
        }
    }
}
