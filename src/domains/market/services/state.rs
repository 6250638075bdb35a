// Market domain state
use crate::shared::clients::SolPriceClient;
use crate::domains::market::services::SolPriceTracker;
use std::time::Duration;

/// Market domain state
#[derive(Clone)]
pub struct MarketState {
    pub price_tracker: SolPriceTracker,
}

impl MarketState {
    /// `enabled`가 false면 추적기를 비활성화 상태로 생성
    pub fn new(client: SolPriceClient, poll_interval: Duration, enabled: bool) -> Self {
        let price_tracker = SolPriceTracker::new(client, poll_interval);
        if enabled {
            price_tracker.enable();
        } else {
            price_tracker.disable();
        }

        Self { price_tracker }
    }
}
