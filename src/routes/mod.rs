// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합하고 공통 레이어(CORS, 로깅, Swagger)를 붙임
// Routes module: combines all domain routers

pub mod docs;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::shared::config::AppConfig;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::swap::routes::create_swap_router;
use crate::domains::tokens::routes::create_tokens_router;
use crate::domains::market::routes::create_market_router;
use crate::domains::wallet::routes::create_wallet_router;
use crate::domains::links::routes::create_links_router;
use docs::ApiDoc;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    let api = Router::new()
        .merge(create_swap_router())
        .merge(create_tokens_router())
        .merge(create_market_router())
        .merge(create_wallet_router());

    Router::new()
        .nest("/api", api)
        .merge(create_links_router())
}

/// CORS 설정 (브라우저 UI origin만 허용)
pub fn build_cors(config: &AppConfig) -> Result<CorsLayer> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS_ORIGIN: {}", config.cors_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}

/// 전체 애플리케이션 (라우터 + Swagger UI + CORS + 요청 로깅)
/// Build the complete application
pub fn create_app(app_state: AppState) -> Result<Router> {
    let cors = build_cors(&app_state.config)?;

    Ok(Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state))
}
