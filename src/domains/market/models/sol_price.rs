use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// 마지막으로 성공한 SOL 가격 조회 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolPriceSnapshot {
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}

/// SOL 가격 응답
/// SOL price response (`price`/`updatedAt` are null until the first successful poll)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = SolPriceResponse)]
pub struct SolPriceResponse {
    pub success: bool,

    /// SOL/USD
    #[schema(example = 187.42)]
    pub price: Option<f64>,

    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Option<SolPriceSnapshot>> for SolPriceResponse {
    fn from(snapshot: Option<SolPriceSnapshot>) -> Self {
        Self {
            success: true,
            price: snapshot.map(|s| s.price),
            updated_at: snapshot.map(|s| s.updated_at),
        }
    }
}
