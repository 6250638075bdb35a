// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 업스트림(Jupiter, SolanaTracker, pump.fun, Solana RPC)을 흉내내는
// 로컬 axum 서버와 테스트용 앱 서버를 띄우는 함수 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let upstream = spawn_server(Router::new().route(...)).await;
//     let config = AppConfig { jupiter_quote_url: format!("{}/swap/v1/quote", upstream), ..test_config() };
//     let (app_url, _state) = spawn_app(config).await;
//     // 테스트 코드...
// }
// ```
// =====================================================

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use luma_api::routes::create_app;
use luma_api::shared::config::AppConfig;
use luma_api::shared::services::AppState;
use tokio::net::TcpListener;

// 테스트용 상수
pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const TEST_WALLET: &str = "11111111111111111111111111111111";
pub const TEST_API_KEY: &str = "test-key";

/// 아무것도 listen하지 않는 주소 (연결 실패 시나리오용)
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// 라우터를 임의 포트로 띄우고 base URL 반환
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server error");
    });

    format!("http://{}", addr)
}

/// 모든 업스트림이 연결 불가능한 기본 설정
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        jupiter_quote_url: format!("{}/swap/v1/quote", UNREACHABLE_URL),
        jupiter_quote_fallback_url: format!("{}/v1/quote", UNREACHABLE_URL),
        jupiter_swap_url: format!("{}/swap/v1/swap", UNREACHABLE_URL),
        jupiter_token_list_url: format!("{}/all", UNREACHABLE_URL),
        backend_url: UNREACHABLE_URL.to_string(),
        backend_api_key: None,
        sol_price_url: format!("{}/sol-price", UNREACHABLE_URL),
        solana_rpc_url: UNREACHABLE_URL.to_string(),
        http_timeout: Duration::from_secs(5),
        ..AppConfig::default()
    }
}

/// Jupiter 관련 URL을 모두 mock 서버로
pub fn with_jupiter(config: AppConfig, jupiter: &str) -> AppConfig {
    AppConfig {
        jupiter_quote_url: format!("{}/swap/v1/quote", jupiter),
        jupiter_quote_fallback_url: format!("{}/v1/quote", jupiter),
        jupiter_swap_url: format!("{}/swap/v1/swap", jupiter),
        jupiter_token_list_url: format!("{}/all", jupiter),
        ..config
    }
}

/// 앱 서버 실행 (SOL 가격 추적기는 시작하지 않음)
pub async fn spawn_app(config: AppConfig) -> (String, AppState) {
    let app_state = AppState::new(config).expect("Failed to initialize AppState");
    let app = create_app(app_state.clone()).expect("Failed to build app");
    let url = spawn_server(app).await;
    (url, app_state)
}

/// 리다이렉트를 따라가지 않는 클라이언트
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build test client")
}

/// mock 핸들러 호출 횟수
#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
