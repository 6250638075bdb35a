use crate::domains::tokens::models::{
    tokens_from_jupiter_list, tokens_from_volume_response, PopularTokensResponse, TokenInfo,
    TokenSearchRequest, TokenSearchResponse, TokenSearchResult,
};
use crate::shared::clients::{JupiterClient, SolanaTrackerClient, UpstreamBody};
use crate::shared::errors::TokenError;
use crate::shared::utils::message_or_body;
use serde_json::Value;

const NOTE_NO_API_KEY: &str =
    "Using Jupiter fallback; set BACKEND_API_KEY to enable SolanaTracker volume ranking.";
const NOTE_TRACKER_FAILED: &str = "SolanaTracker failed; using Jupiter fallback.";

/// Token Service
/// 토큰 검색 및 인기 토큰 목록 서비스
///
/// SolanaTracker를 우선 사용하고, 목록 조회가 불가능하면 Jupiter 토큰 리스트로 대체합니다.
#[derive(Clone)]
pub struct TokenService {
    tracker_client: SolanaTrackerClient,
    jupiter_client: JupiterClient,
}

impl TokenService {
    pub fn new(tracker_client: SolanaTrackerClient, jupiter_client: JupiterClient) -> Self {
        Self {
            tracker_client,
            jupiter_client,
        }
    }

    /// 토큰 검색
    /// Search tokens by keyword
    ///
    /// # Returns
    /// * `Ok(TokenSearchResponse)` - 결과 목록, 또는 업스트림이 보고한 실패 (success:false)
    /// * `Err(TokenError)` - API 키 없음, JSON이 아닌 응답, 연결 실패
    pub async fn search_tokens(
        &self,
        request: TokenSearchRequest,
    ) -> Result<TokenSearchResponse, TokenError> {
        let keyword = request.keyword();
        if keyword.is_empty() {
            return Ok(TokenSearchResponse::results(Vec::new()));
        }

        if !self.tracker_client.has_api_key() {
            return Err(TokenError::MissingApiKey);
        }

        let response = self
            .tracker_client
            .search(keyword)
            .await
            .map_err(|e| TokenError::Upstream(format!("Search failed: {}", e)))?;

        let body = match response.body {
            UpstreamBody::Json(body) => body,
            UpstreamBody::Text(body) => {
                tracing::warn!(status = %response.status, "SolanaTracker search returned non-JSON body");
                return Err(TokenError::InvalidBackendJson { body });
            }
        };

        let status_ok = body.get("status").and_then(Value::as_str) == Some("success");
        if !response.status.is_success() || !status_ok {
            tracing::warn!(status = %response.status, "SolanaTracker search failed");
            return Ok(TokenSearchResponse::failure(message_or_body(&body)));
        }

        let results = body
            .get("data")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(TokenSearchResult::from_tracker_item).collect())
            .unwrap_or_default();

        Ok(TokenSearchResponse::results(results))
    }

    /// 인기 토큰 목록 (24시간 거래량 순)
    /// Popular tokens: SolanaTracker volume ranking, Jupiter token list as fallback
    pub async fn popular_tokens(&self) -> Result<PopularTokensResponse, TokenError> {
        if !self.tracker_client.has_api_key() {
            let tokens = self.jupiter_tokens().await.map_err(|e| {
                tracing::warn!(error = %e, "Jupiter token list fallback failed");
                TokenError::MissingKeyAndFallbackFailed
            })?;

            return Ok(PopularTokensResponse {
                success: true,
                tokens,
                note: Some(NOTE_NO_API_KEY.to_string()),
            });
        }

        match self.tracker_client.get_tokens_by_volume().await {
            Ok(body) => Ok(PopularTokensResponse {
                success: true,
                tokens: tokens_from_volume_response(&body),
                note: None,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "SolanaTracker volume ranking failed, using Jupiter fallback");

                let tokens = self
                    .jupiter_tokens()
                    .await
                    .map_err(|e| TokenError::FallbackFailed(e.to_string()))?;

                Ok(PopularTokensResponse {
                    success: true,
                    tokens,
                    note: Some(NOTE_TRACKER_FAILED.to_string()),
                })
            }
        }
    }

    async fn jupiter_tokens(&self) -> anyhow::Result<Vec<TokenInfo>> {
        let entries = self.jupiter_client.get_token_list().await?;
        Ok(tokens_from_jupiter_list(&entries))
    }
}
