// Links domain routes (mounted at the root, not under /api)
use axum::{routing::get, Router};
use crate::domains::links::handlers::redirect_handler;
use crate::shared::services::AppState;

pub fn create_links_router() -> Router<AppState> {
    Router::new()
        .route("/luma", get(redirect_handler::redirect_to_luma))
}
