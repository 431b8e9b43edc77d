use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;
use tower::ServiceExt;
use whub::domain::config::{ApiConfig, ExclusivityMode, SslConfig};
use whub_server::Server;

fn server(config: ApiConfig) -> Server {
    Server::builder().config(config).build().expect("server builds")
}

async fn call(server: &Server, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = server.router().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn health_counts_registered_slices() {
    let server = server(ApiConfig::default());
    let (status, bytes) = call(&server, Request::get("/health").body(Body::empty()).expect("request")).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["status"], "up");
    assert_eq!(body["slices"], 1);
}

#[tokio::test]
async fn configured_exclusivity_applies_to_validation() {
    let mut config = ApiConfig::default();
    config.catalog.exclusivity = ExclusivityMode::Mutual;
    let server = server(config);

    let request = Request::post("/catalog/product-types/mug/positions/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "positions": ["Full Wrap", "Left Side"] }).to_string()))
        .expect("request");
    let (status, bytes) = call(&server, request).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body, json!({ "isValid": true, "errors": [], "warnings": [] }));
}

#[tokio::test]
async fn api_docs_are_served() {
    let server = server(ApiConfig::default());
    let (status, bytes) = call(&server, Request::get("/api").body(Body::empty()).expect("request")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&bytes).contains("Warehouse Hub API"));
}

#[test]
fn state_holds_the_configuration() {
    let server = Server::builder().port(9123).build().expect("server builds");
    assert_eq!(server.state().config.server.port, 9123);
    assert_eq!(server.state().slice_count(), 1);
}

#[test]
fn missing_certificate_fails_the_build() {
    let dir = tempdir().expect("tempdir");
    let mut config = ApiConfig::default();
    config.server.ssl =
        Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(config).build().expect_err("cert is missing");
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn missing_key_fails_the_build() {
    let dir = tempdir().expect("tempdir");
    let cert = dir.path().join("cert.pem");
    fs::write(&cert, "not a real certificate").expect("write cert");

    let mut config = ApiConfig::default();
    config.server.ssl = Some(SslConfig { cert, key: dir.path().join("key.pem") });

    let err = Server::builder().config(config).build().expect_err("key is missing");
    assert!(err.to_string().contains("SSL key not found"));
}
