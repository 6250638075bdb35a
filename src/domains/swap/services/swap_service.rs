use crate::domains::swap::models::{
    ProxyResponse, QuotePreview, QuotePreviewRequest, QuoteRequest, SwapStage, SwapTransactionRequest,
};
use crate::shared::clients::{JupiterClient, QuoteOutcome, QuoteParams, UpstreamBody, UpstreamResponse};
use crate::shared::errors::SwapError;
use crate::shared::utils::{
    base_units_to_ui, error_or_body, parse_decimals, first_str, is_truthy, slippage_percent_to_bps, string_or_number,
    to_fixed, ui_to_base_units, unwrap_data, DEFAULT_DECIMALS,
};
use serde_json::Value;

/// Jupiter 기본 슬리피지 (0.5%)
pub const DEFAULT_SLIPPAGE_BPS: &str = "50";

/// Jupiter 응답 해석 결과
enum Interpreted {
    /// 2xx: `data` (없으면 본문 전체) 또는 원본 텍스트
    Success(Value),
    /// non-2xx: 상태 코드와 `error` (없으면 본문 전체) 또는 원본 텍스트
    Failed { status: u16, error: Value },
}

fn interpret(response: UpstreamResponse) -> Interpreted {
    if response.is_success() {
        match response.body {
            UpstreamBody::Json(body) => Interpreted::Success(unwrap_data(body)),
            UpstreamBody::Text(text) => Interpreted::Success(Value::String(text)),
        }
    } else {
        let error = match &response.body {
            UpstreamBody::Json(body) => error_or_body(body),
            UpstreamBody::Text(text) => Value::String(text.clone()),
        };
        Interpreted::Failed { status: response.status.as_u16(), error }
    }
}

fn upstream_error(e: anyhow::Error) -> SwapError {
    SwapError::Upstream(format!("{:#}", e))
}

// 스왑 서비스
// SwapService: quote proxy, quote preview, swap-transaction proxy
#[derive(Clone)]
pub struct SwapService {
    jupiter_client: JupiterClient,
}

impl SwapService {
    pub fn new(jupiter_client: JupiterClient) -> Self {
        Self { jupiter_client }
    }

    // 스왑 가격 조회 (프록시)
    // Get swap quote: forwards the query and reshapes the answer
    pub async fn get_quote(&self, request: QuoteRequest) -> Result<ProxyResponse, SwapError> {
        let (Some(input_mint), Some(output_mint), Some(amount)) = (
            request.input_mint.filter(|s| !s.is_empty()),
            request.output_mint.filter(|s| !s.is_empty()),
            request.amount.filter(|s| !s.is_empty()),
        ) else {
            return Err(SwapError::MissingParams("inputMint/outputMint/amount"));
        };

        let params = QuoteParams {
            input_mint,
            output_mint,
            amount,
            slippage_bps: request.slippage_bps.unwrap_or_else(|| DEFAULT_SLIPPAGE_BPS.to_string()),
            swap_mode: request.swap_mode.filter(|s| !s.is_empty()),
        };

        let outcome = self.jupiter_client.get_quote(&params).await.map_err(upstream_error)?;
        Ok(Self::quote_envelope(outcome))
    }

    fn quote_envelope(outcome: QuoteOutcome) -> ProxyResponse {
        let QuoteOutcome { response, primary_url, used_fallback } = outcome;
        match interpret(response) {
            Interpreted::Success(payload) => {
                if used_fallback {
                    tracing::info!(url = %primary_url, "Jupiter quote served by fallback URL");
                }
                ProxyResponse::ok(payload)
            }
            Interpreted::Failed { status, error } => {
                tracing::warn!(status, url = %primary_url, used_fallback, "Jupiter quote returned an error");
                ProxyResponse::failure(error).with_status(status).with_url(primary_url)
            }
        }
    }

    // quote 미리보기: UI 수량 → base unit, 슬리피지 % → bps 변환 후 quote 조회
    // Quote preview for the swap form (ExactIn)
    pub async fn preview_quote(&self, request: QuotePreviewRequest) -> Result<ProxyResponse, SwapError> {
        let (Some(input_mint), Some(output_mint), Some(amount)) = (
            request.input_mint.filter(|s| !s.is_empty()),
            request.output_mint.filter(|s| !s.is_empty()),
            request.amount.filter(|s| !s.is_empty()),
        ) else {
            return Err(SwapError::MissingParams("inputMint/outputMint/amount"));
        };

        let input_decimals = parse_decimals(request.input_decimals.as_deref(), DEFAULT_DECIMALS);
        let output_decimals = parse_decimals(request.output_decimals.as_deref(), DEFAULT_DECIMALS);

        let in_amount = ui_to_base_units(&amount, input_decimals).ok_or(SwapError::InvalidAmount)?;
        let slippage_bps = slippage_percent_to_bps(request.slippage.as_deref());

        let params = QuoteParams {
            input_mint,
            output_mint,
            amount: in_amount.to_string(),
            slippage_bps: slippage_bps.to_string(),
            swap_mode: Some("ExactIn".to_string()),
        };

        let outcome = self.jupiter_client.get_quote(&params).await.map_err(upstream_error)?;
        let primary_url = outcome.primary_url.clone();

        let quote = match interpret(outcome.response) {
            Interpreted::Success(quote) => quote,
            Interpreted::Failed { status, error } => {
                tracing::warn!(status, url = %primary_url, "Jupiter quote preview returned an error");
                return Ok(ProxyResponse::failure(error).with_status(status).with_url(primary_url));
            }
        };

        let Some(out_amount) = string_or_number(quote.get("outAmount")) else {
            return Ok(ProxyResponse::failure(Value::from("No outAmount in quote")).with_url(primary_url));
        };
        let Some(out_ui_amount) = base_units_to_ui(&out_amount, output_decimals, 6) else {
            return Ok(ProxyResponse::failure(Value::from("Invalid outAmount in quote")).with_url(primary_url));
        };

        let swap_usd_value = string_or_number(quote.get("swapUsdValue"))
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map(|v| to_fixed(v, 2));

        let preview = QuotePreview {
            in_amount: in_amount.to_string(),
            out_amount,
            out_ui_amount,
            swap_usd_value,
            slippage_bps,
            quote,
        };

        let data = serde_json::to_value(preview)
            .map_err(|e| SwapError::Upstream(format!("Failed to encode quote preview: {}", e)))?;
        Ok(ProxyResponse::ok(data))
    }

    // 스왑 트랜잭션 생성 (비즈니스 로직)
    // 1) quote 조회 (fallback 포함) 2) Jupiter swap API로 트랜잭션 생성
    // 서명/전송/확인은 브라우저 지갑이 담당
    pub async fn create_swap_transaction(
        &self,
        request: SwapTransactionRequest,
    ) -> Result<ProxyResponse, SwapError> {
        let (Some(input_mint), Some(output_mint), Some(amount), Some(user_public_key)) = (
            request.input_mint.filter(|s| !s.is_empty()),
            request.output_mint.filter(|s| !s.is_empty()),
            request.amount.as_ref().filter(|v| is_truthy(v)).and_then(|v| string_or_number(Some(v))),
            request.user_public_key.filter(|s| !s.is_empty()),
        ) else {
            return Err(SwapError::MissingParams("inputMint/outputMint/amount/userPublicKey"));
        };

        let slippage_bps = string_or_number(request.slippage_bps.as_ref())
            .unwrap_or_else(|| DEFAULT_SLIPPAGE_BPS.to_string());

        // 1. Quote 조회
        let params = QuoteParams {
            input_mint,
            output_mint,
            amount,
            slippage_bps,
            swap_mode: None,
        };
        let outcome = self.jupiter_client.get_quote(&params).await.map_err(upstream_error)?;

        let quote = match interpret(outcome.response) {
            Interpreted::Success(quote) => quote,
            Interpreted::Failed { status, error } => {
                tracing::warn!(status, "Swap aborted: quote stage failed");
                return Ok(ProxyResponse::failure(error).with_stage(SwapStage::Quote));
            }
        };

        if !is_truthy(&quote) {
            return Ok(ProxyResponse::failure(Value::from("No quote returned")).with_stage(SwapStage::Quote));
        }

        // 2. Swap 트랜잭션 생성
        let response = self
            .jupiter_client
            .create_swap_transaction(&quote, &user_public_key)
            .await
            .map_err(upstream_error)?;

        if !response.is_success() {
            let status = response.status.as_u16();
            let error = match &response.body {
                UpstreamBody::Json(body) => error_or_body(body),
                UpstreamBody::Text(text) => Value::String(text.clone()),
            };
            tracing::warn!(status, "Swap aborted: swap stage failed");
            return Ok(ProxyResponse::failure(error).with_stage(SwapStage::Swap));
        }

        let data = response.body.into_value();
        let swap_transaction = first_str(&data, &["swapTransaction", "swapTx", "transaction"]);
        if swap_transaction.is_none() {
            tracing::warn!("Swap response has no transaction field");
        }

        Ok(ProxyResponse::ok(data).with_swap_transaction(swap_transaction))
    }
}
