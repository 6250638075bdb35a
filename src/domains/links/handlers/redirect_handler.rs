use crate::shared::services::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use url::Url;

/// pump.fun 메인 페이지 (mint 미설정 시 이동)
pub const PUMP_FUN_URL: &str = "https://pump.fun/";

/// Luma 토큰 페이지 주소
/// mint가 있으면 `https://pump.fun/coin/<mint>` (mint는 경로 세그먼트로 인코딩)
pub fn luma_target_url(mint: Option<&str>) -> String {
    let Some(mint) = mint.filter(|m| !m.is_empty()) else {
        return PUMP_FUN_URL.to_string();
    };

    match Url::parse(PUMP_FUN_URL) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.clear().push("coin").push(mint);
            }
            url.to_string()
        }
        Err(_) => PUMP_FUN_URL.to_string(),
    }
}

// Luma 토큰 페이지로 이동 (302)
#[utoipa::path(
    get,
    path = "/luma",
    responses(
        (status = 302, description = "Redirect to the Luma token page on pump.fun")
    ),
    tag = "Links"
)]
pub async fn redirect_to_luma(State(app_state): State<AppState>) -> impl IntoResponse {
    let target = luma_target_url(app_state.config.luma_mint_address.as_deref());

    (StatusCode::FOUND, [(header::LOCATION, target)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_target_url() {
        assert_eq!(luma_target_url(None), "https://pump.fun/");
        assert_eq!(luma_target_url(Some("")), "https://pump.fun/");
        assert_eq!(
            luma_target_url(Some("LumaMint1111111111111111111111111111111pump")),
            "https://pump.fun/coin/LumaMint1111111111111111111111111111111pump"
        );
        assert_eq!(luma_target_url(Some("a b/c")), "https://pump.fun/coin/a%20b%2Fc");
    }
}
