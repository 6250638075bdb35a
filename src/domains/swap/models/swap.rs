use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

// 스왑 트랜잭션 생성 요청
// amount / slippageBps는 문자열 또는 숫자 모두 허용
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = SwapTransactionRequest)]
pub struct SwapTransactionRequest {
    /// Input token mint address
    /// 입력 토큰 주소
    #[schema(example = "So11111111111111111111111111111111111111112")]
    pub input_mint: Option<String>,

    /// Output token mint address
    /// 출력 토큰 주소
    #[schema(example = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")]
    pub output_mint: Option<String>,

    /// Amount to swap (integer, base units)
    #[schema(value_type = Option<String>, example = "100000000")]
    pub amount: Option<Value>,

    /// Slippage in basis points (default: 50)
    #[schema(value_type = Option<u32>, example = 50)]
    pub slippage_bps: Option<Value>,

    /// User public key (signs the transaction in the browser wallet)
    /// 사용자 공개 키 (브라우저 지갑에서 서명)
    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub user_public_key: Option<String>,
}

impl SwapTransactionRequest {
    /// 요청 본문 파싱 (JSON이 아니면 빈 요청으로 취급)
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_is_lenient() {
        let req = SwapTransactionRequest::from_body(b"not json");
        assert!(req.input_mint.is_none());

        let req = SwapTransactionRequest::from_body(
            br#"{"inputMint":"A","outputMint":"B","amount":1000,"slippageBps":"75","userPublicKey":"U"}"#,
        );
        assert_eq!(req.input_mint.as_deref(), Some("A"));
        assert_eq!(req.amount, Some(serde_json::json!(1000)));
        assert_eq!(req.slippage_bps, Some(serde_json::json!("75")));
    }
}
