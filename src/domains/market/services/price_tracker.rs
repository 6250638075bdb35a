use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use tokio::time::interval;
use crate::domains::market::models::SolPriceSnapshot;
use crate::shared::clients::SolPriceClient;

/// SOL 가격 추적기
/// SOL Price Tracker
///
/// 역할:
/// - 주기적으로 SOL/USD 가격을 조회해서 메모리에 보관
/// - 조회 실패 시 마지막 가격 유지
/// - 활성화/비활성화 제어 가능
///
/// 처리 흐름:
/// 1. `start()`로 백그라운드 태스크 실행 (첫 tick은 즉시)
/// 2. 주기마다 활성화 상태 확인 후 가격 갱신
/// 3. 핸들러는 `latest()`로 마지막 값을 읽음
#[derive(Clone)]
pub struct SolPriceTracker {
    client: SolPriceClient,

    poll_interval: Duration,

    /// 마지막으로 성공한 조회 결과
    latest: Arc<RwLock<Option<SolPriceSnapshot>>>,

    /// 활성화 상태
    enabled: Arc<AtomicBool>,
}

impl SolPriceTracker {
    pub fn new(client: SolPriceClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
            latest: Arc::new(RwLock::new(None)),
            enabled: Arc::new(AtomicBool::new(true)), // 기본값: 활성화
        }
    }

    /// 추적 시작
    /// Start polling in a background task
    pub fn start(&self) {
        let tracker = self.clone();

        tokio::spawn(async move {
            let mut interval = interval(tracker.poll_interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                interval.tick().await;

                if !tracker.is_enabled() {
                    continue;
                }

                if let Err(e) = tracker.refresh().await {
                    tracing::warn!(error = %e, "SOL price refresh failed, keeping last value");
                }
            }
        });

        tracing::info!(interval_secs = self.poll_interval.as_secs(), "SOL price tracker started");
    }

    /// 가격 한 번 갱신
    /// Fetch once and store on success; on failure the previous value stays
    pub async fn refresh(&self) -> Result<SolPriceSnapshot> {
        let price = self.client.fetch_sol_price().await?;
        let snapshot = SolPriceSnapshot {
            price,
            updated_at: Utc::now(),
        };

        *self.latest.write() = Some(snapshot);
        tracing::debug!(price, "SOL price updated");

        Ok(snapshot)
    }

    /// 마지막 가격 (아직 성공한 적 없으면 None)
    pub fn latest(&self) -> Option<SolPriceSnapshot> {
        *self.latest.read()
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}
