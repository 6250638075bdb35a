use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

// 스왑 가격 조회 요청 파라미터
// 모든 값은 Jupiter에 문자열 그대로 전달됩니다 (누락 여부만 검사)
// 예시값: 모델에서 중앙 관리
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
#[schema(as = QuoteRequest)]
pub struct QuoteRequest {
    /// Input token mint address
    /// 입력 토큰 주소
    ///
    /// Examples:
    /// - SOL: So11111111111111111111111111111111111111112
    /// - USDC: EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v
    #[param(example = "So11111111111111111111111111111111111111112")]
    pub input_mint: Option<String>,

    /// Output token mint address
    /// 출력 토큰 주소
    #[param(example = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")]
    pub output_mint: Option<String>,

    /// Amount to swap (integer, base units)
    /// 스왑할 수량 (최소 단위 정수)
    ///
    /// - 0.1 SOL = 100000000 (9 decimals)
    /// - 1 USDC = 1000000 (6 decimals)
    #[param(example = "100000000")]
    pub amount: Option<String>,

    /// Slippage in basis points (default: 50 = 0.5%)
    #[param(example = "50")]
    pub slippage_bps: Option<String>,

    /// Swap mode (e.g. ExactIn)
    pub swap_mode: Option<String>,
}

// 스왑 화면용 quote 미리보기 요청
// 사람이 입력한 수량(UI amount)과 decimals, 슬리피지(%)를 받아서 서버에서 변환
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
#[schema(as = QuotePreviewRequest)]
pub struct QuotePreviewRequest {
    #[param(example = "So11111111111111111111111111111111111111112")]
    pub input_mint: Option<String>,

    #[param(example = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")]
    pub output_mint: Option<String>,

    /// Human amount (e.g. "1.5")
    /// 사용자가 입력한 수량
    #[param(example = "1.5")]
    pub amount: Option<String>,

    /// Input token decimals (default 9; 빈 값이나 잘못된 값도 9)
    #[param(example = "9")]
    pub input_decimals: Option<String>,

    /// Output token decimals (default 9)
    #[param(example = "6")]
    pub output_decimals: Option<String>,

    /// Slippage in percent (default 0.5, clamped to 0.01..=5)
    #[param(example = "0.5")]
    pub slippage: Option<String>,
}

/// quote 미리보기 결과
/// Quote preview: base-unit amounts plus display values for the swap form
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = QuotePreview)]
pub struct QuotePreview {
    /// base units sent to Jupiter
    pub in_amount: String,
    /// base units quoted by Jupiter
    pub out_amount: String,
    /// outAmount / 10^outputDecimals, 6 decimals
    #[schema(example = "142.318544")]
    pub out_ui_amount: String,
    /// quote USD value, 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_usd_value: Option<String>,
    pub slippage_bps: u32,
    /// Jupiter quote (unwrapped)
    #[schema(value_type = Object)]
    pub quote: Value,
}
