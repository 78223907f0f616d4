//! Shared fixtures for the sync integration tests
//!
//! An in-process axum server stands in for the models API, and every run
//! gets its own scratch directory laid out like the real site.

#![allow(dead_code)]

use std::path::Path;

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use tempfile::TempDir;
use tokio::net::TcpListener;

use models_sync::SyncConfig;

pub const MODELS_PATH: &str = "/api/v1/models";

/// Serve `body` with `status` on a random local port; returns the endpoint URL.
pub async fn serve_models(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        MODELS_PATH,
        get(move || async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }),
    );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock models server");
    let addr = listener.local_addr().expect("mock server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock models server");
    });

    format!("http://{addr}{MODELS_PATH}")
}

/// URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}{MODELS_PATH}")
}

/// Scratch site with a `package.json` holding `manifest`.
pub fn site_with_manifest(manifest: &str) -> (TempDir, SyncConfig) {
    let dir = tempfile::tempdir().expect("create scratch site");
    std::fs::write(dir.path().join("package.json"), manifest).expect("write manifest");
    let config = SyncConfig::rooted_at(dir.path());
    (dir, config)
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// What `JSON.stringify(value, null, 2)` would write for `text`.
pub fn pretty(text: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(text).expect("fixture is valid JSON");
    serde_json::to_string_pretty(&value).expect("serialize fixture")
}
