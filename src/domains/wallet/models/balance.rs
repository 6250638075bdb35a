use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 잔액 조회 요청
/// Balance request (query string)
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
#[schema(as = BalanceRequest)]
pub struct BalanceRequest {
    /// Wallet public key (지갑 주소)
    #[param(example = "7xKXtg2CW87d97TXJSDpbD5jBheTqA83TZRuJosgAsU")]
    pub owner: Option<String>,

    /// Token mint (wrapped SOL mint = native SOL)
    #[param(example = "So11111111111111111111111111111111111111112")]
    pub mint: Option<String>,
}

/// 잔액 조회 응답
/// Balance response
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = BalanceResponse)]
pub struct BalanceResponse {
    pub success: bool,

    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBheTqA83TZRuJosgAsU")]
    pub owner: String,

    #[schema(example = "So11111111111111111111111111111111111111112")]
    pub mint: String,

    /// UI 단위 잔액 (SOL 또는 토큰 단위)
    /// Balance in UI units
    #[schema(example = 1.5)]
    pub balance: f64,
}
