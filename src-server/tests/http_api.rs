//! HTTP contract tests: the router on an ephemeral port, driven with reqwest.

use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use shopping_list_lib::repository::{KvListStore, KvStore, MemoryKvStore, DEFAULT_LIST_KEY};
use shopping_list_lib::{build_router, AppState};

struct TestServer {
    base: String,
    client: Client,
    kv: MemoryKvStore,
}

impl TestServer {
    async fn start() -> Self {
        let kv = MemoryKvStore::new();
        let state = AppState::new(KvListStore::with_default_key(kv.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.expect("serve");
        });
        Self {
            base: format!("http://{}/api/items", addr),
            client: Client::new(),
            kv,
        }
    }

    async fn send(&self, method: Method, body: Option<Value>) -> (StatusCode, reqwest::header::HeaderMap, Value) {
        let mut req = self.client.request(method, &self.base);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let resp = req.send().await.expect("request");
        let status = resp.status();
        let headers = resp.headers().clone();
        let text = resp.text().await.expect("body");
        let value = if text.is_empty() { Value::Null } else { serde_json::from_str(&text).expect("json body") };
        (status, headers, value)
    }

    async fn list(&self) -> Vec<Value> {
        let (status, _, body) = self.send(Method::GET, None).await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().expect("array").clone()
    }
}

fn assert_cors(headers: &reqwest::header::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, PATCH, DELETE, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

#[tokio::test]
async fn get_returns_empty_array_initially() {
    let server = TestServer::start().await;
    let (status, headers, body) = server.send(Method::GET, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert_cors(&headers);
}

#[tokio::test]
async fn post_creates_trimmed_item() {
    let server = TestServer::start().await;
    let (status, headers, item) = server.send(Method::POST, Some(json!({"text": "  Milk  "}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_cors(&headers);
    assert_eq!(item["text"], "Milk");
    assert_eq!(item["checked"], false);
    assert!(item["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(item["createdAt"].as_i64().is_some());

    assert_eq!(server.list().await, vec![item]);
}

#[tokio::test]
async fn post_blank_text_is_400_and_list_unchanged() {
    let server = TestServer::start().await;
    for body in [json!({"text": ""}), json!({"text": "   "}), json!({})] {
        let (status, headers, resp) = server.send(Method::POST, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp, json!({"error": "Item text is required"}));
        assert_cors(&headers);
    }
    assert!(server.list().await.is_empty());
}

#[tokio::test]
async fn patch_toggles_and_reports_missing() {
    let server = TestServer::start().await;
    let (_, _, item) = server.send(Method::POST, Some(json!({"text": "Eggs"}))).await;

    let (status, _, toggled) = server.send(Method::PATCH, Some(json!({"id": item["id"]}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["checked"], true);
    assert_eq!(toggled["id"], item["id"]);

    let (status, _, resp) = server.send(Method::PATCH, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp, json!({"error": "Item ID is required"}));

    let (status, headers, resp) = server.send(Method::PATCH, Some(json!({"id": "missing"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp, json!({"error": "Item not found"}));
    assert_cors(&headers);

    let (status, _, resp) = server.send(Method::PATCH, Some(json!({"id": 5}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp, json!({"error": "Item not found"}));

    assert_eq!(server.list().await, vec![toggled]);
}

#[tokio::test]
async fn oversized_body_is_json_error() {
    let server = TestServer::start().await;
    let text = "x".repeat(3_000_000);
    let (status, headers, resp) = server.send(Method::POST, Some(json!({"text": text}))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(resp["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    assert_cors(&headers);
    assert!(server.list().await.is_empty());
}

#[tokio::test]
async fn delete_clears_checked_or_all() {
    let server = TestServer::start().await;
    let (_, _, a) = server.send(Method::POST, Some(json!({"text": "a"}))).await;
    let (_, _, b) = server.send(Method::POST, Some(json!({"text": "b"}))).await;
    server.send(Method::PATCH, Some(json!({"id": a["id"]}))).await;

    let (status, _, resp) = server.send(Method::DELETE, Some(json!({"mode": "checked"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({"cleared": "checked"}));
    assert_eq!(server.list().await, vec![b]);

    // No body at all means "all"
    let (status, _, resp) = server.send(Method::DELETE, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, json!({"cleared": "all"}));
    assert!(server.list().await.is_empty());
}

#[tokio::test]
async fn options_is_empty_preflight() {
    let server = TestServer::start().await;
    let (status, headers, body) = server.send(Method::OPTIONS, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
    assert_cors(&headers);
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let server = TestServer::start().await;
    let (status, headers, body) = server.send(Method::PUT, Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
    assert_cors(&headers);
}

#[tokio::test]
async fn malformed_stored_value_is_generic_500() {
    let server = TestServer::start().await;
    server.kv.set(DEFAULT_LIST_KEY, "definitely not json").await.unwrap();

    let (status, headers, body) = server.send(Method::GET, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
    assert_cors(&headers);
}
