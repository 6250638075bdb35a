use crate::shared::clients::http::{set_query_params, UpstreamResponse};
use crate::shared::config::AppConfig;
use anyhow::{Context, Result};
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde_json::Value;

/// Quote 요청 파라미터 (Jupiter에 그대로 전달되는 문자열들)
/// Quote parameters, forwarded verbatim
#[derive(Debug, Clone)]
pub struct QuoteParams {
    pub input_mint: String,
    pub output_mint: String,
    /// base unit 정수 (문자열 그대로 전달)
    pub amount: String,
    pub slippage_bps: String,
    /// "ExactIn" 등 (없으면 Jupiter 기본값)
    pub swap_mode: Option<String>,
}

/// Quote 조회 결과
#[derive(Debug, Clone)]
pub struct QuoteOutcome {
    /// 최종 응답 (fallback을 사용했다면 fallback의 응답)
    pub response: UpstreamResponse,
    /// 기본 quote URL (에러 응답의 `url` 필드에 사용)
    pub primary_url: String,
    pub used_fallback: bool,
}

// Jupiter API 클라이언트
// Jupiter API client: quote (with one fallback), swap transaction, token list
#[derive(Clone)]
pub struct JupiterClient {
    http_client: reqwest::Client,
    quote_url: String,
    quote_fallback_url: String,
    swap_url: String,
    token_list_url: String,
}

impl JupiterClient {
    // 클라이언트 생성 (공유 reqwest::Client 사용)
    pub fn new(http_client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http_client,
            quote_url: config.jupiter_quote_url.clone(),
            quote_fallback_url: config.jupiter_quote_fallback_url.clone(),
            swap_url: config.jupiter_swap_url.clone(),
            token_list_url: config.jupiter_token_list_url.clone(),
        }
    }

    fn build_quote_url(base: &str, params: &QuoteParams) -> Result<Url> {
        let mut url = Url::parse(base).with_context(|| format!("Invalid quote URL: {}", base))?;

        let mut pairs = vec![
            ("inputMint", params.input_mint.as_str()),
            ("outputMint", params.output_mint.as_str()),
            ("amount", params.amount.as_str()),
            ("slippageBps", params.slippage_bps.as_str()),
        ];
        if let Some(mode) = params.swap_mode.as_deref() {
            pairs.push(("swapMode", mode));
        }
        set_query_params(&mut url, &pairs);

        Ok(url)
    }

    async fn send_quote(&self, url: &Url) -> Result<UpstreamResponse> {
        let response = self
            .http_client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to Jupiter quote API: {}", url))?;

        UpstreamResponse::read(response).await
    }

    // Quote 조회: 기본 URL 실패(non-2xx 또는 연결 실패) 시 fallback URL로 한 번만 재시도
    // Get quote: primary first, then the older lite path exactly once
    pub async fn get_quote(&self, params: &QuoteParams) -> Result<QuoteOutcome> {
        let primary = Self::build_quote_url(&self.quote_url, params)?;
        let primary_url = primary.to_string();

        tracing::debug!(url = %primary_url, "Requesting Jupiter quote");

        match self.send_quote(&primary).await {
            Ok(response) if response.is_success() => {
                return Ok(QuoteOutcome { response, primary_url, used_fallback: false });
            }
            Ok(response) => {
                tracing::warn!(status = %response.status, url = %primary_url, "Jupiter quote failed, trying fallback");
            }
            Err(e) => {
                tracing::warn!(error = %e, url = %primary_url, "Jupiter quote unreachable, trying fallback");
            }
        }

        let fallback = Self::build_quote_url(&self.quote_fallback_url, params)?;
        let response = self.send_quote(&fallback).await?;

        Ok(QuoteOutcome { response, primary_url, used_fallback: true })
    }

    // 스왑 트랜잭션 생성: Jupiter Swap API 호출 (fallback 없음)
    // Create swap transaction. The returned transaction is signed in the browser.
    pub async fn create_swap_transaction(
        &self,
        quote: &Value,
        user_public_key: &str,
    ) -> Result<UpstreamResponse> {
        let request_body = serde_json::json!({
            "quoteResponse": quote,
            "userPublicKey": user_public_key,
            "wrapAndUnwrapSol": true,
            "dynamicComputeUnitLimit": true,
            "prioritizationFeeLamports": "auto",
        });

        tracing::debug!(url = %self.swap_url, "Requesting Jupiter swap transaction");

        let response = self
            .http_client
            .post(&self.swap_url)
            .header(ACCEPT, "application/json")
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to Jupiter Swap API")?;

        UpstreamResponse::read(response).await
    }

    // Jupiter 전체 토큰 리스트 (popular tokens fallback 용)
    // Raw entries; mapping to TokenInfo happens in the tokens domain
    pub async fn get_token_list(&self) -> Result<Vec<Value>> {
        let response = self
            .http_client
            .get(&self.token_list_url)
            .send()
            .await
            .context("Failed to fetch Jupiter token list")?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch Jupiter token list");
        }

        let data: Value = response
            .json()
            .await
            .context("Failed to parse Jupiter token list")?;

        Ok(match data {
            Value::Array(items) => items,
            _ => Vec::new(),
        })
    }
}
