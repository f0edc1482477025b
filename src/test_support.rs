//! Helpers shared by the router-level tests: a real server on an ephemeral port,
//! driven over HTTP with `reqwest`.

use crate::server::build_router;
use crate::store::document::DocumentStore;

use axum::http::{StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><title>companion</title>";

/// A running server over a fresh store in a temporary directory.
pub struct TestApp {
    pub base_url: String,
    pub store: Arc<DocumentStore>,
    client: reqwest::Client,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let public_dir = dir.path().join("public");
        std::fs::create_dir_all(&public_dir).unwrap();
        std::fs::write(public_dir.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(public_dir.join("app.js"), "console.log('companion');").unwrap();

        let store = Arc::new(DocumentStore::open(dir.path().join("data")).await.unwrap());
        let app = build_router(store.clone(), &public_dir);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            store,
            client: reqwest::Client::new(),
            _dir: dir,
        }
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap();
        Self::json(response).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(path, body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: impl Into<String>) -> (StatusCode, Value) {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .send()
            .await
            .unwrap();
        Self::json(response).await
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.text().await.unwrap())
    }

    async fn json(response: reqwest::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = response.bytes().await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Registers a user and returns its id.
    pub async fn setup_user(&self, display: &str, panel_token: &str, phone_token: &str) -> String {
        let (status, body) = self
            .post(
                "/api/setup",
                serde_json::json!({
                    "display": display,
                    "panelToken": panel_token,
                    "phoneToken": phone_token,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "setup failed: {}", body);
        body["user"]["id"].as_str().unwrap().to_string()
    }

    pub fn document_bytes(&self) -> Vec<u8> {
        std::fs::read(self.store.path()).unwrap()
    }
}
