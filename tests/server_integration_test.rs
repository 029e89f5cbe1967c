//! End-to-end lookups against a server bound to an ephemeral local port.

use barcode_names::{create_router, LookupService};
use std::net::SocketAddr;

async fn start_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(LookupService::new("https://example.com/barcodes"));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_single_lookup_over_http() {
    let addr = start_server().await;

    let resp = reqwest::Client::new()
        .get(format!("http://{}/barcode", addr))
        .query(&[("agent", "@LLLLIIII")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["barcode_name"], "lllliiii");
    // length offset 254 + 0b1111_0000
    assert_eq!(json["integer_value"], 494);
}

#[tokio::test]
async fn test_batch_lookup_over_http() {
    let addr = start_server().await;

    let resp = reqwest::Client::new()
        .post(format!("http://{}/barcodemulti", addr))
        .json(&serde_json::json!({"agents": ["ii", "li"]}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["ii"]["integer_value"], 2);
    assert_eq!(json["li"]["integer_value"], 4);
}

#[tokio::test]
async fn test_invalid_lookup_over_http() {
    let addr = start_server().await;

    let resp = reqwest::Client::new()
        .post(format!("http://{}/barcode", addr))
        .json(&serde_json::json!({"agent": "@"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "Invalid/non-barcode agent name: @");
}
