use crate::shared::clients::http::{set_query_params, UpstreamResponse};
use crate::shared::config::AppConfig;
use anyhow::{Context, Result};
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde_json::Value;

// SolanaTracker 데이터 API 클라이언트
// SolanaTracker data API client (token search, 24h volume ranking)
// 모든 요청에 x-api-key 헤더가 필요합니다.
#[derive(Clone)]
pub struct SolanaTrackerClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SolanaTrackerClient {
    pub fn new(http_client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http_client,
            base_url: config.backend_url.clone(),
            api_key: config.backend_api_key.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .context("Missing BACKEND_API_KEY")
    }

    // 토큰 검색 (24h timeframe)
    // 응답 본문 해석은 서비스에서 (status 필드, JSON 여부 등)
    pub async fn search(&self, query: &str) -> Result<UpstreamResponse> {
        let api_key = self.api_key()?;

        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .with_context(|| format!("Invalid backend URL: {}", self.base_url))?;
        set_query_params(&mut url, &[("timeframe", "24h"), ("query", query)]);

        tracing::debug!(%url, "Requesting SolanaTracker search");

        let response = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/json")
            .header("x-api-key", api_key)
            .send()
            .await
            .context("Failed to send request to SolanaTracker search API")?;

        UpstreamResponse::read(response).await
    }

    // 24시간 거래량 기준 토큰 목록
    // Tokens ranked by 24h volume (upstream order = ranking)
    pub async fn get_tokens_by_volume(&self) -> Result<Value> {
        let api_key = self.api_key()?;
        let url = format!("{}/tokens/volume/24h", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header("x-api-key", api_key)
            .send()
            .await
            .context("Failed to send request to SolanaTracker volume API")?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("SolanaTracker error: {}", body);
        }

        response
            .json()
            .await
            .context("Failed to parse SolanaTracker volume response")
    }
}
