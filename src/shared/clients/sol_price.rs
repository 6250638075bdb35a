use crate::shared::config::AppConfig;
use anyhow::{Context, Result};
use serde_json::Value;

// SOL/USD 가격 클라이언트 (pump.fun sol-price 엔드포인트, API 키 불필요)
// SOL/USD price client
#[derive(Clone)]
pub struct SolPriceClient {
    http_client: reqwest::Client,
    url: String,
}

impl SolPriceClient {
    pub fn new(http_client: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http_client,
            url: config.sol_price_url.clone(),
        }
    }

    /// 현재 SOL 가격 조회
    /// `solPrice`는 숫자 또는 숫자 문자열
    pub async fn fetch_sol_price(&self) -> Result<f64> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .context("Failed to send request to SOL price API")?;

        if !response.status().is_success() {
            anyhow::bail!("SOL price API returned error: {}", response.status());
        }

        let data: Value = response
            .json()
            .await
            .context("Failed to parse SOL price response")?;

        parse_sol_price(&data).context("No solPrice in SOL price response")
    }
}

/// `solPrice`는 숫자/숫자 문자열 모두 허용
pub fn parse_sol_price(data: &Value) -> Option<f64> {
    let price = match data.get("solPrice")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    price.is_finite().then_some(price)
}
