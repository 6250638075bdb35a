use anyhow::{Context, Result};
use serde_json::Value;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    native_token::lamports_to_sol,
    pubkey::Pubkey,
};
use std::str::FromStr;
use std::sync::Arc;

/// Wrapped SOL mint (스왑 화면에서 네이티브 SOL을 나타내는 mint)
pub const NATIVE_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Solana RPC 클라이언트
/// 지갑 잔액 조회 전용 (트랜잭션 서명/전송은 브라우저 지갑이 담당)
#[derive(Clone)]
pub struct SolanaClient {
    rpc_client: Arc<RpcClient>,
}

impl SolanaClient {
    /// SolanaClient 생성
    /// Create SolanaClient for the configured RPC endpoint
    pub fn new(rpc_url: &str) -> Self {
        let rpc_client = Arc::new(RpcClient::new_with_commitment(
            rpc_url.to_string(),
            CommitmentConfig::confirmed(),
        ));

        Self { rpc_client }
    }

    /// Public Key 문자열을 Pubkey로 변환
    /// Parse public key string to Pubkey
    pub fn parse_pubkey(pubkey_str: &str) -> Result<Pubkey> {
        Pubkey::from_str(pubkey_str)
            .context(format!("Failed to parse public key: {}", pubkey_str))
    }

    /// SOL 잔액 조회 (SOL 단위)
    /// Get SOL balance (in SOL)
    pub async fn get_balance_sol(&self, owner: &Pubkey) -> Result<f64> {
        let lamports = self
            .rpc_client
            .get_balance(owner)
            .await
            .context(format!("Failed to get balance for {}", owner))?;

        Ok(lamports_to_sol(lamports))
    }

    /// SPL 토큰 잔액 조회 (해당 mint의 모든 토큰 계정 uiAmount 합계)
    /// Get SPL token balance: sum of uiAmount over every token account of `mint`
    pub async fn get_token_balance(&self, owner: &Pubkey, mint: &Pubkey) -> Result<f64> {
        let accounts = self
            .rpc_client
            .get_token_accounts_by_owner(owner, TokenAccountsFilter::Mint(*mint))
            .await
            .context(format!("Failed to get token accounts for {}", owner))?;

        let parsed: Vec<Value> = accounts
            .iter()
            .filter_map(|keyed| serde_json::to_value(&keyed.account.data).ok())
            .collect();

        Ok(sum_ui_amounts(&parsed))
    }
}

/// jsonParsed 토큰 계정 데이터에서 uiAmount 합계 (없으면 0으로 취급)
pub fn sum_ui_amounts(accounts: &[Value]) -> f64 {
    accounts
        .iter()
        .map(|data| {
            data.pointer("/parsed/info/tokenAmount/uiAmount")
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
        })
        .sum()
}
