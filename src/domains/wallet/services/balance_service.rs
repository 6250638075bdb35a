use crate::domains::wallet::models::{BalanceRequest, BalanceResponse};
use crate::shared::clients::{SolanaClient, NATIVE_SOL_MINT};
use crate::shared::errors::WalletError;
use solana_sdk::pubkey::Pubkey;

/// Balance Service
/// 지갑 잔액 조회 서비스
///
/// 스왑 화면의 "Balance" 표시와 MAX 버튼에 사용됩니다.
#[derive(Clone)]
pub struct BalanceService {
    solana_client: SolanaClient,
}

impl BalanceService {
    pub fn new(solana_client: SolanaClient) -> Self {
        Self { solana_client }
    }

    /// 잔액 조회
    /// Get balance of `mint` held by `owner`
    ///
    /// # Returns
    /// * `Ok(BalanceResponse)` - UI 단위 잔액
    /// * `Err(WalletError::MissingParams)` - owner 또는 mint 없음
    /// * `Err(WalletError::InvalidPublicKey)` - 잘못된 주소
    /// * `Err(WalletError::SolanaNetworkError)` - RPC 호출 실패
    pub async fn get_balance(&self, request: BalanceRequest) -> Result<BalanceResponse, WalletError> {
        let (owner, mint) = match (request.owner, request.mint) {
            (Some(owner), Some(mint)) if !owner.is_empty() && !mint.is_empty() => (owner, mint),
            _ => return Err(WalletError::MissingParams),
        };

        let owner_key = parse_key(&owner)?;
        let mint_key = parse_key(&mint)?;

        let balance = if mint == NATIVE_SOL_MINT {
            self.solana_client.get_balance_sol(&owner_key).await
        } else {
            self.solana_client.get_token_balance(&owner_key, &mint_key).await
        }
        .map_err(|e| {
            tracing::warn!(%owner, %mint, error = %e, "Balance lookup failed");
            WalletError::SolanaNetworkError(e.to_string())
        })?;

        Ok(BalanceResponse {
            success: true,
            owner,
            mint,
            balance,
        })
    }
}

fn parse_key(value: &str) -> Result<Pubkey, WalletError> {
    SolanaClient::parse_pubkey(value).map_err(|_| WalletError::InvalidPublicKey {
        public_key: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> BalanceService {
        // 파라미터 검증 단계에서 끝나므로 RPC에 접속하지 않음
        BalanceService::new(SolanaClient::new("http://127.0.0.1:1"))
    }

    #[tokio::test]
    async fn test_missing_params() {
        let result = service()
            .get_balance(BalanceRequest { owner: Some("x".into()), mint: None })
            .await;
        assert!(matches!(result, Err(WalletError::MissingParams)));
    }

    #[tokio::test]
    async fn test_invalid_owner() {
        let result = service()
            .get_balance(BalanceRequest {
                owner: Some("not-a-key".into()),
                mint: Some(NATIVE_SOL_MINT.into()),
            })
            .await;
        match result {
            Err(WalletError::InvalidPublicKey { public_key }) => assert_eq!(public_key, "not-a-key"),
            other => panic!("unexpected result: {:?}", other.map(|r| r.balance)),
        }
    }
}
