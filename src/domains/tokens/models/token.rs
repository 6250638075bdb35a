use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use utoipa::{IntoParams, ToSchema};
use crate::shared::utils::{decimals_or_default, first_str, number_field};

// 스왑 화면에서 선택 가능한 토큰
// Token offered in the swap form's selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = TokenInfo)]
pub struct TokenInfo {
    #[schema(example = "SOL")]
    pub symbol: String,
    #[schema(example = "Solana")]
    pub name: String,
    #[schema(example = "So11111111111111111111111111111111111111112")]
    pub mint: String,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[schema(example = 9)]
    pub decimals: u8,
}

impl TokenInfo {
    /// SolanaTracker 거래량 응답의 한 행 → TokenInfo
    ///
    /// 행마다 필드 이름이 달라서 후보 키를 순서대로 확인합니다.
    /// mint나 symbol이 없으면 None
    pub fn from_tracker_row(row: &Value) -> Option<Self> {
        let token = match row.get("token") {
            Some(inner) if !inner.is_null() => inner,
            _ => row,
        };

        let mint = first_str(token, &["mint", "address", "mintAddress", "token_address", "tokenAddress"])?;
        let symbol = first_str(token, &["symbol", "ticker", "tokenSymbol"])?;
        let name = first_str(token, &["name", "tokenName"]).unwrap_or_else(|| symbol.clone());

        Some(Self {
            logo_uri: first_str(token, &["logoURI", "logo", "image", "icon"]),
            decimals: decimals_or_default(token),
            symbol,
            name,
            mint,
        })
    }

    /// Jupiter 토큰 리스트 항목 → TokenInfo
    pub fn from_jupiter_entry(entry: &Value) -> Option<Self> {
        let mint = first_str(entry, &["address"])?;
        let symbol = first_str(entry, &["symbol"])?;
        let name = first_str(entry, &["name"]).unwrap_or_else(|| symbol.clone());

        Some(Self {
            logo_uri: first_str(entry, &["logoURI"]),
            decimals: decimals_or_default(entry),
            symbol,
            name,
            mint,
        })
    }

    /// 정렬 우선순위: SOL → USDC/USDT → 나머지
    pub fn rank(&self) -> u8 {
        match self.symbol.as_str() {
            "SOL" => 0,
            "USDC" | "USDT" => 1,
            _ => 2,
        }
    }
}

/// SolanaTracker 거래량 응답 → 토큰 목록
///
/// - 응답이 배열이면 그대로, 아니면 `data` 배열, 둘 다 아니면 빈 목록
/// - mint 기준 중복 제거 (처음 나온 것 유지)
/// - SOL, USDC/USDT를 앞으로 (나머지는 거래량 순서 유지, stable sort)
pub fn tokens_from_volume_response(body: &Value) -> Vec<TokenInfo> {
    let rows: &[Value] = match body {
        Value::Array(items) => items,
        _ => body
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
    };

    let mut seen = HashSet::new();
    let mut tokens: Vec<TokenInfo> = rows
        .iter()
        .filter_map(TokenInfo::from_tracker_row)
        .filter(|token| seen.insert(token.mint.clone()))
        .collect();

    tokens.sort_by_key(TokenInfo::rank);
    tokens
}

/// Jupiter 토큰 리스트 → 토큰 목록 (address, symbol 없는 항목 제외)
pub fn tokens_from_jupiter_list(entries: &[Value]) -> Vec<TokenInfo> {
    entries.iter().filter_map(TokenInfo::from_jupiter_entry).collect()
}

// 토큰 검색 결과 (브라우저 토큰 선택 팝업 형식, snake_case)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(as = TokenSearchResult)]
pub struct TokenSearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    /// SolanaTracker 검색 결과에는 없음 (항상 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    /// SolanaTracker 검색 결과에는 없음 (항상 생략)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_24h_percent: Option<f64>,
}

impl TokenSearchResult {
    /// SolanaTracker 검색 항목 → 검색 결과
    pub fn from_tracker_item(item: &Value) -> Self {
        let text = |key: &str| item.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            name: text("name"),
            symbol: text("symbol"),
            address: text("mint"),
            decimals: decimals_or_default(item),
            logo_uri: text("image"),
            verified: None,
            price: number_field(item, "priceUsd"),
            market_cap: number_field(item, "marketCapUsd"),
            price_change_24h_percent: None,
        }
    }
}

// 토큰 검색 요청 파라미터 (q 또는 query)
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
#[schema(as = TokenSearchRequest)]
pub struct TokenSearchRequest {
    /// Search keyword (name, symbol, or mint)
    /// 검색어 (토큰 이름, 심볼, 또는 주소)
    #[param(example = "BONK")]
    pub q: Option<String>,
    /// Alias of `q`
    pub query: Option<String>,
}

impl TokenSearchRequest {
    /// `q`가 빈 문자열이면 `query` 사용, 고른 값의 앞뒤 공백 제거
    ///
    /// 공백만 있는 `q`도 값으로 취급하므로 `query`로 넘어가지 않습니다.
    pub fn keyword(&self) -> &str {
        self.q
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.query.as_deref())
            .map(str::trim)
            .unwrap_or("")
    }
}

// 토큰 검색 응답
// 성공: { success: true, results } / 업스트림 실패: { success: false, error }
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = TokenSearchResponse)]
pub struct TokenSearchResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<TokenSearchResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub error: Option<Value>,
}

impl TokenSearchResponse {
    pub fn results(results: Vec<TokenSearchResult>) -> Self {
        Self { success: true, results: Some(results), error: None }
    }

    pub fn failure(error: Value) -> Self {
        Self { success: false, results: None, error: Some(error) }
    }
}

// 인기 토큰 목록 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = PopularTokensResponse)]
pub struct PopularTokensResponse {
    pub success: bool,
    pub tokens: Vec<TokenInfo>,
    /// fallback을 사용한 경우 안내 문구
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
