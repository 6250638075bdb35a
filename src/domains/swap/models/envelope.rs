use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// 스왑 단계 (어느 단계에서 실패했는지)
/// Which step of the swap flow failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwapStage {
    Quote,
    Swap,
}

/// 프록시 응답 봉투
/// Proxy response envelope shared by /api/quote, /api/quote/preview and /api/swap
///
/// - 성공: `{ success: true, data }`
/// - 업스트림 실패: `{ success: false, status?, stage?, error, url? }` (HTTP 200)
///
/// 값이 없는 필드는 JSON에서 생략됩니다.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = ProxyResponse)]
pub struct ProxyResponse {
    pub success: bool,

    /// 업스트림 결과 (JSON 또는 원본 텍스트)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,

    /// 실패한 업스트림 HTTP 상태 코드
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<SwapStage>,

    /// 업스트림 에러 (`error` 필드, 없으면 본문 전체 또는 텍스트)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub error: Option<Value>,

    /// 요청한 기본 quote URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// 브라우저 지갑이 서명할 base64 트랜잭션
    #[serde(rename = "swapTransaction", skip_serializing_if = "Option::is_none")]
    pub swap_transaction: Option<String>,
}

impl ProxyResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            status: None,
            stage: None,
            error: None,
            url: None,
            swap_transaction: None,
        }
    }

    pub fn failure(error: Value) -> Self {
        Self {
            success: false,
            data: None,
            status: None,
            stage: None,
            error: Some(error),
            url: None,
            swap_transaction: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_stage(mut self, stage: SwapStage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn with_swap_transaction(mut self, tx: Option<String>) -> Self {
        self.swap_transaction = tx;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_omits_empty_fields() {
        let ok = serde_json::to_value(ProxyResponse::ok(json!({"outAmount": "1"}))).unwrap();
        assert_eq!(ok, json!({"success": true, "data": {"outAmount": "1"}}));

        let failed = ProxyResponse::failure(json!("Route not found"))
            .with_status(404)
            .with_url("https://quote.example/q");
        assert_eq!(
            serde_json::to_value(failed).unwrap(),
            json!({"success": false, "status": 404, "error": "Route not found", "url": "https://quote.example/q"})
        );

        let staged = ProxyResponse::failure(json!("No quote returned")).with_stage(SwapStage::Quote);
        assert_eq!(
            serde_json::to_value(staged).unwrap(),
            json!({"success": false, "stage": "quote", "error": "No quote returned"})
        );
    }
}
