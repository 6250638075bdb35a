// =====================================================
// AppConfig - 서버 설정 (환경 변수)
// =====================================================
// 역할: 외부 API 주소, API 키, 폴링 주기 등을 환경 변수에서 읽어 한 번에 보관
//
// 모든 URL은 끝의 '/'를 제거한 상태로 저장합니다.
// .env 파일은 main에서 dotenvy로 먼저 로딩됩니다.
// =====================================================

use std::time::Duration;
use crate::shared::errors::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3002";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_JUPITER_QUOTE_URL: &str = "https://lite-api.jup.ag/swap/v1/quote";
pub const DEFAULT_JUPITER_QUOTE_FALLBACK_URL: &str = "https://lite-api.jup.ag/v1/quote";
pub const DEFAULT_JUPITER_SWAP_URL: &str = "https://lite-api.jup.ag/swap/v1/swap";
pub const DEFAULT_JUPITER_TOKEN_LIST_URL: &str = "https://token.jup.ag/all";
pub const DEFAULT_BACKEND_URL: &str = "https://data.solanatracker.io";
pub const DEFAULT_SOL_PRICE_URL: &str = "https://frontend-api-v3.pump.fun/sol-price";
pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_SOL_PRICE_POLL_SECS: u64 = 30;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// 외부 API 요청에 붙는 User-Agent
pub const USER_AGENT: &str = "LumaExchange/1.0";

/// 서버 설정
/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub cors_origin: String,
    pub jupiter_quote_url: String,
    /// 기본 quote 경로가 실패했을 때 한 번 더 시도하는 구 lite 경로
    pub jupiter_quote_fallback_url: String,
    pub jupiter_swap_url: String,
    pub jupiter_token_list_url: String,
    /// SolanaTracker base URL
    pub backend_url: String,
    /// SolanaTracker API key (x-api-key)
    pub backend_api_key: Option<String>,
    pub sol_price_url: String,
    pub sol_price_poll_interval: Duration,
    /// false면 추적기는 돌지만 매 주기를 건너뜀
    pub sol_price_tracker_enabled: bool,
    pub solana_rpc_url: String,
    pub luma_mint_address: Option<String>,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            jupiter_quote_url: DEFAULT_JUPITER_QUOTE_URL.to_string(),
            jupiter_quote_fallback_url: DEFAULT_JUPITER_QUOTE_FALLBACK_URL.to_string(),
            jupiter_swap_url: DEFAULT_JUPITER_SWAP_URL.to_string(),
            jupiter_token_list_url: DEFAULT_JUPITER_TOKEN_LIST_URL.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            backend_api_key: None,
            sol_price_url: DEFAULT_SOL_PRICE_URL.to_string(),
            sol_price_poll_interval: Duration::from_secs(DEFAULT_SOL_PRICE_POLL_SECS),
            sol_price_tracker_enabled: true,
            solana_rpc_url: DEFAULT_SOLANA_RPC_URL.to_string(),
            luma_mint_address: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정 읽기
    /// Load configuration from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 lookup 함수로 설정 읽기 (테스트에서 HashMap 주입용)
    ///
    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let url = |key: &str, default: &str| {
            trim_trailing_slash(&get(key).unwrap_or_else(|| default.to_string()))
        };
        let secs = |key: &str, default: u64| -> Result<Duration, ConfigError> {
            match get(key) {
                None => Ok(Duration::from_secs(default)),
                Some(raw) => match raw.parse::<u64>() {
                    Ok(0) | Err(_) => Err(ConfigError::InvalidNumber { key: key.to_string(), value: raw }),
                    Ok(n) => Ok(Duration::from_secs(n)),
                },
            }
        };

        let flag = |key: &str, default: bool| -> Result<bool, ConfigError> {
            match get(key) {
                None => Ok(default),
                Some(raw) => match raw.to_ascii_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => Ok(true),
                    "0" | "false" | "no" | "off" => Ok(false),
                    _ => Err(ConfigError::InvalidFlag { key: key.to_string(), value: raw }),
                },
            }
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            jupiter_quote_url: url("JUPITER_QUOTE_URL", DEFAULT_JUPITER_QUOTE_URL),
            jupiter_quote_fallback_url: url("JUPITER_QUOTE_FALLBACK_URL", DEFAULT_JUPITER_QUOTE_FALLBACK_URL),
            jupiter_swap_url: url("JUPITER_SWAP_URL", DEFAULT_JUPITER_SWAP_URL),
            jupiter_token_list_url: url("JUPITER_TOKEN_LIST_URL", DEFAULT_JUPITER_TOKEN_LIST_URL),
            backend_url: url("BACKEND_URL", DEFAULT_BACKEND_URL),
            backend_api_key: get("BACKEND_API_KEY"),
            sol_price_url: url("SOL_PRICE_URL", DEFAULT_SOL_PRICE_URL),
            sol_price_poll_interval: secs("SOL_PRICE_POLL_SECS", DEFAULT_SOL_PRICE_POLL_SECS)?,
            sol_price_tracker_enabled: flag("SOL_PRICE_TRACKER_ENABLED", true)?,
            solana_rpc_url: url("SOLANA_RPC_URL", DEFAULT_SOLANA_RPC_URL),
            luma_mint_address: get("LUMA_MINT_ADDRESS").or_else(|| get("NEXT_PUBLIC_LUMA_MINT_ADDRESS")),
            http_timeout: secs("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
        })
    }
}

/// 끝의 '/' 하나만 제거
pub fn trim_trailing_slash(url: &str) -> String {
    url.strip_suffix('/').unwrap_or(url).to_string()
}
