//! End-to-end tests for `HttpApiClient` + `force_offline` against a local
//! axum server.

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use frp_panel_client::{force_offline, ForceOfflineRequest, HttpApiClient};
use serde_json::{json, Value};
use std::net::SocketAddr;

/// Binds the router on an ephemeral port and serves it in the background.
async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> HttpApiClient {
    HttpApiClient::with_timeout(&format!("http://{}", addr), 5000).unwrap()
}

#[tokio::test]
async fn force_offline_passes_backend_response_through() {
    let app = Router::new().route(
        "/forceOff",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({"proxy_id": 12345}));
            Json(json!({"data": {"ok": true}, "flag": true, "msg": ""}))
        }),
    );
    let addr = spawn_server(app).await;

    let response = force_offline(&client_for(addr), ForceOfflineRequest { proxy_id: 12345 }).await;

    assert!(response.flag);
    assert_eq!(response.data, json!({"ok": true}));
    assert_eq!(response.msg, "");
}

#[tokio::test]
async fn backend_failure_envelope_is_not_rewritten() {
    // A flag=false envelope from the backend is a successful call; it must
    // reach the caller untouched.
    let app = Router::new().route(
        "/forceOff",
        post(|| async { Json(json!({"data": null, "flag": false, "msg": "tunnel not found"})) }),
    );
    let addr = spawn_server(app).await;

    let response = force_offline(&client_for(addr), ForceOfflineRequest { proxy_id: 1 }).await;

    assert!(!response.flag);
    assert_eq!(response.msg, "tunnel not found");
}

#[tokio::test]
async fn null_body_normalizes_to_empty_response_failure() {
    let app = Router::new().route("/forceOff", post(|| async { Json(Value::Null) }));
    let addr = spawn_server(app).await;

    let response = force_offline(&client_for(addr), ForceOfflineRequest { proxy_id: 2 }).await;

    assert!(!response.flag);
    assert_eq!(response.data, Value::Null);
    assert_eq!(response.msg, "empty response from API");
}

#[tokio::test]
async fn blank_body_normalizes_to_empty_response_failure() {
    let app = Router::new().route("/forceOff", post(|| async { "" }));
    let addr = spawn_server(app).await;

    let response = force_offline(&client_for(addr), ForceOfflineRequest { proxy_id: 3 }).await;

    assert!(!response.flag);
    assert_eq!(response.msg, "empty response from API");
}

#[tokio::test]
async fn server_error_status_normalizes_to_failure() {
    let app = Router::new().route(
        "/forceOff",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_server(app).await;

    let response = force_offline(&client_for(addr), ForceOfflineRequest { proxy_id: 4 }).await;

    assert!(!response.flag);
    assert_eq!(response.data, Value::Null);
    assert!(!response.msg.is_empty());
}

#[tokio::test]
async fn unreachable_backend_normalizes_to_failure() {
    // Bind then drop the listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = force_offline(&client_for(addr), ForceOfflineRequest { proxy_id: 5 }).await;

    assert!(!response.flag);
    assert_eq!(response.data, Value::Null);
    assert!(!response.msg.is_empty());
}
