// =====================================================
// 스왑 트랜잭션 프록시 통합 테스트 (/api/swap)
// =====================================================

mod common;
use common::*;

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

fn swap_body() -> Value {
    json!({
        "inputMint": SOL_MINT,
        "outputMint": USDC_MINT,
        "amount": 1000,
        "slippageBps": 75,
        "userPublicKey": TEST_WALLET,
    })
}

/// 테스트: 필수값 누락 / JSON이 아닌 본문
#[tokio::test]
async fn test_swap_missing_params() {
    let (app, _) = spawn_app(test_config()).await;
    let client = http_client();

    let res = client
        .post(format!("{}/api/swap", app))
        .json(&json!({ "inputMint": SOL_MINT, "outputMint": USDC_MINT, "amount": "1000" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing inputMint/outputMint/amount/userPublicKey");

    let res = client
        .post(format!("{}/api/swap", app))
        .body("definitely not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

/// 테스트: 숫자 0 수량은 누락으로 처리 (업스트림 호출 없음)
#[tokio::test]
async fn test_swap_zero_amount_is_missing() {
    let quote_hits = HitCounter::default();
    let hits = quote_hits.clone();
    let jupiter = spawn_server(Router::new().route(
        "/swap/v1/quote",
        get(move || {
            hits.hit();
            async { Json(json!({ "outAmount": "1" })) }
        }),
    ))
    .await;
    let (app, _) = spawn_app(with_jupiter(test_config(), &jupiter)).await;

    let mut body = swap_body();
    body["amount"] = json!(0);

    let res = http_client()
        .post(format!("{}/api/swap", app))
        .json(&body)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing inputMint/outputMint/amount/userPublicKey");
    assert_eq!(quote_hits.count(), 0);
}

/// 테스트: quote → swap 성공, Jupiter에 보낸 요청 형식 확인
#[tokio::test]
async fn test_swap_success() {
    let jupiter = spawn_server(
        Router::new()
            .route(
                "/swap/v1/quote",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    Json(json!({ "outAmount": "1", "echo": params }))
                }),
            )
            .route(
                "/swap/v1/swap",
                post(|Json(received): Json<Value>| async move {
                    Json(json!({
                        "swapTransaction": "AQIDBA==",
                        "lastValidBlockHeight": 279_000_000u64,
                        "received": received,
                    }))
                }),
            ),
    )
    .await;
    let (app, _) = spawn_app(with_jupiter(test_config(), &jupiter)).await;

    let res = http_client()
        .post(format!("{}/api/swap", app))
        .json(&swap_body())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["swapTransaction"], "AQIDBA==");
    assert_eq!(body["data"]["lastValidBlockHeight"], 279_000_000u64);

    // 숫자 amount/slippageBps도 문자열로 전달
    let received = &body["data"]["received"];
    assert_eq!(received["quoteResponse"]["echo"]["amount"], "1000");
    assert_eq!(received["quoteResponse"]["echo"]["slippageBps"], "75");
    assert_eq!(received["userPublicKey"], TEST_WALLET);
    assert_eq!(received["wrapAndUnwrapSol"], true);
    assert_eq!(received["dynamicComputeUnitLimit"], true);
    assert_eq!(received["prioritizationFeeLamports"], "auto");
}

/// 테스트: quote 단계 실패 → stage "quote"
#[tokio::test]
async fn test_swap_quote_stage_failure() {
    let jupiter = spawn_server(
        Router::new()
            .route(
                "/swap/v1/quote",
                get(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "No route" }))) }),
            )
            .route(
                "/v1/quote",
                get(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "No route" }))) }),
            ),
    )
    .await;
    let (app, _) = spawn_app(with_jupiter(test_config(), &jupiter)).await;

    let res = http_client()
        .post(format!("{}/api/swap", app))
        .json(&swap_body())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "stage": "quote", "error": "No route" }));
}

/// 테스트: 빈 quote → "No quote returned"
#[tokio::test]
async fn test_swap_empty_quote() {
    let jupiter = spawn_server(Router::new().route("/swap/v1/quote", get(|| async { "" }))).await;
    let (app, _) = spawn_app(with_jupiter(test_config(), &jupiter)).await;

    let body: Value = http_client()
        .post(format!("{}/api/swap", app))
        .json(&swap_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], false);
    assert_eq!(body["stage"], "quote");
    assert_eq!(body["error"], "No quote returned");
}

/// 테스트: swap 단계 실패 → stage "swap"
#[tokio::test]
async fn test_swap_swap_stage_failure() {
    let jupiter = spawn_server(
        Router::new()
            .route("/swap/v1/quote", get(|| async { Json(json!({ "outAmount": "1" })) }))
            .route(
                "/swap/v1/swap",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "simulation failed" }))) }),
            ),
    )
    .await;
    let (app, _) = spawn_app(with_jupiter(test_config(), &jupiter)).await;

    let body: Value = http_client()
        .post(format!("{}/api/swap", app))
        .json(&swap_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({ "success": false, "stage": "swap", "error": "simulation failed" }));
}

/// 테스트: 트랜잭션 필드 이름이 swapTx / transaction이어도 최상위 swapTransaction으로
#[tokio::test]
async fn test_swap_transaction_field_aliases() {
    for key in ["swapTx", "transaction"] {
        let jupiter = spawn_server(
            Router::new()
                .route("/swap/v1/quote", get(|| async { Json(json!({ "outAmount": "1" })) }))
                .route(
                    "/swap/v1/swap",
                    post(move || async move {
                        let mut body = serde_json::Map::new();
                        body.insert(key.to_string(), json!("BQYHCA=="));
                        Json(Value::Object(body))
                    }),
                ),
        )
        .await;
        let (app, _) = spawn_app(with_jupiter(test_config(), &jupiter)).await;

        let body: Value = http_client()
            .post(format!("{}/api/swap", app))
            .json(&swap_body())
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["success"], true, "{}", key);
        assert_eq!(body["swapTransaction"], "BQYHCA==", "{}", key);
        assert_eq!(body["data"][key], "BQYHCA==");
    }
}
