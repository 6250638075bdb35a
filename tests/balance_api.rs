// =====================================================
// 지갑 잔액 통합 테스트 (/api/balance)
// =====================================================
// Solana JSON-RPC를 흉내내는 mock 서버 사용

mod common;
use common::*;

use axum::routing::post;
use axum::{Json, Router};
use luma_api::shared::config::AppConfig;
use serde_json::{json, Value};

fn token_account(ui_amount: Value) -> Value {
    json!({
        "pubkey": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
        "account": {
            "lamports": 2039280,
            "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
            "executable": false,
            "rentEpoch": 0,
            "space": 165,
            "data": {
                "program": "spl-token",
                "parsed": {
                    "type": "account",
                    "info": {
                        "mint": USDC_MINT,
                        "owner": TEST_WALLET,
                        "tokenAmount": { "amount": "0", "decimals": 6, "uiAmount": ui_amount, "uiAmountString": "0" }
                    }
                },
                "space": 165
            }
        }
    })
}

async fn mock_rpc(Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let context = json!({ "slot": 250_000_000u64 });

    let result = match request["method"].as_str().unwrap_or_default() {
        "getVersion" => json!({ "solana-core": "1.18.26", "feature-set": 3469865029u64 }),
        "getBalance" => json!({ "context": context, "value": 1_500_000_000u64 }),
        "getTokenAccountsByOwner" => json!({
            "context": context,
            "value": [token_account(json!(1.25)), token_account(json!(0.75)), token_account(Value::Null)]
        }),
        other => {
            return Json(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": -32601, "message": format!("Method not found: {}", other) }
            }))
        }
    };

    Json(json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

async fn spawn_rpc_app() -> String {
    let rpc = spawn_server(Router::new().route("/", post(mock_rpc))).await;
    let config = AppConfig {
        solana_rpc_url: rpc,
        ..test_config()
    };
    spawn_app(config).await.0
}

/// 테스트: 네이티브 SOL 잔액 (lamports → SOL)
#[tokio::test]
async fn test_native_sol_balance() {
    let app = spawn_rpc_app().await;

    let res = http_client()
        .get(format!("{}/api/balance?owner={}&mint={}", app, TEST_WALLET, SOL_MINT))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "owner": TEST_WALLET, "mint": SOL_MINT, "balance": 1.5 }));
}

/// 테스트: SPL 토큰 잔액 (모든 토큰 계정 uiAmount 합계)
#[tokio::test]
async fn test_token_balance_sums_accounts() {
    let app = spawn_rpc_app().await;

    let body: Value = http_client()
        .get(format!("{}/api/balance?owner={}&mint={}", app, TEST_WALLET, USDC_MINT))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["balance"], 2.0);
}

/// 테스트: 잘못된 주소 / 파라미터 누락 → 400
#[tokio::test]
async fn test_balance_bad_request() {
    let (app, _) = spawn_app(test_config()).await;
    let client = http_client();

    let res = client
        .get(format!("{}/api/balance?owner=not-a-key&mint={}", app, SOL_MINT))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = client
        .get(format!("{}/api/balance?owner={}", app, TEST_WALLET))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing owner/mint");
}

/// 테스트: RPC 연결 실패 → 502
#[tokio::test]
async fn test_balance_rpc_unreachable() {
    let (app, _) = spawn_app(test_config()).await;

    let res = http_client()
        .get(format!("{}/api/balance?owner={}&mint={}", app, TEST_WALLET, SOL_MINT))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 502);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
}
