use crate::shared::config::{AppConfig, USER_AGENT};
use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use serde_json::Value;

/// 공유 HTTP 클라이언트 생성
/// Build the shared HTTP client (connection pool reused by every upstream client)
pub fn build_http_client(config: &AppConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.http_timeout)
        .build()
        .context("Failed to create HTTP client")
}

/// 업스트림 응답 본문
/// JSON으로 파싱되면 Json, 아니면 원본 텍스트
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    Json(Value),
    Text(String),
}

impl UpstreamBody {
    /// 응답에 그대로 실을 수 있는 JSON 값 (텍스트는 문자열로)
    pub fn into_value(self) -> Value {
        match self {
            UpstreamBody::Json(v) => v,
            UpstreamBody::Text(t) => Value::String(t),
        }
    }
}

/// 업스트림 응답 (상태 코드 + 본문)
/// Upstream response: status code and a defensively parsed body
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: UpstreamBody,
}

impl UpstreamResponse {
    /// 본문을 텍스트로 읽은 뒤 JSON 파싱을 시도
    /// Read body as text, then try JSON
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read upstream response body")?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => UpstreamBody::Json(json),
            Err(_) => UpstreamBody::Text(text),
        };

        Ok(Self { status, body })
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// URL의 쿼리 파라미터 설정 (같은 이름이 있으면 교체, 나머지는 유지)
/// Set query parameters, replacing existing ones with the same name
pub fn set_query_params(url: &mut Url, params: &[(&str, &str)]) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !params.iter().any(|(name, _)| name == k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    for (k, v) in params {
        pairs.append_pair(k, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_query_params_replaces_and_keeps() {
        let mut url = Url::parse("https://quote.example/v1/quote?slippageBps=10&onlyDirectRoutes=true").unwrap();
        set_query_params(&mut url, &[("inputMint", "A"), ("slippageBps", "50")]);
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("onlyDirectRoutes".to_string(), "true".to_string()),
                ("inputMint".to_string(), "A".to_string()),
                ("slippageBps".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_body_into_value() {
        assert_eq!(UpstreamBody::Text("oops".into()).into_value(), Value::String("oops".into()));
        assert_eq!(UpstreamBody::Json(serde_json::json!({"a": 1})).into_value(), serde_json::json!({"a": 1}));
    }
}
