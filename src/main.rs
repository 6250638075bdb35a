use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use luma_api::routes::create_app;
use luma_api::shared::config::AppConfig;
use luma_api::shared::services::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // .env 로딩 (없어도 됨)
    dotenvy::dotenv().ok();

    // 로깅 초기화 (RUST_LOG 없으면 info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    if config.backend_api_key.is_none() {
        tracing::warn!("BACKEND_API_KEY not set; token search disabled, popular tokens use Jupiter fallback");
    }

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(config).context("Failed to initialize AppState")?;

    // SOL 가격 추적 시작 (SOL_PRICE_TRACKER_ENABLED=false면 주기만 돌고 조회는 건너뜀)
    let price_tracker = &app_state.market_state.price_tracker;
    if !price_tracker.is_enabled() {
        tracing::warn!("SOL price tracker disabled; /api/sol-price will stay empty");
    }
    price_tracker.start();

    let bind_addr = app_state.config.bind_addr.clone();
    let app = create_app(app_state)?;

    // 서버 시작
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("Server running on http://{}", bind_addr);
    tracing::info!("Swagger UI available at http://{}/docs", bind_addr);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
