//! Shared test harness for E2E integration tests.
//!
//! Wires a real `Session` → `QueryBridge` → `GeminiClient` stack against a
//! wiremock Gemini server, with config parsed from TOML the way the binary
//! loads it.

#![allow(dead_code)]

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ft_terminal::config::{ApiKey, TerminalConfig};
use ft_terminal::{GeminiClient, QueryBridge, Session, Submission};

pub const MODEL: &str = "gemini-3-flash-preview";
pub const API_KEY: &str = "e2e-test-key";

/// End-to-end harness: one session talking to a mock Gemini endpoint.
pub struct TestHarness {
    /// Mock Gemini server.
    pub server: MockServer,
    /// Session under test.
    pub session: Session,
    /// Config the session was built from.
    pub config: TerminalConfig,
}

impl TestHarness {
    /// Harness with an API key configured.
    pub async fn start() -> Self {
        Self::build(Some(ApiKey::new(API_KEY)), None).await
    }

    /// Harness whose config carries no API key.
    pub async fn without_api_key() -> Self {
        Self::build(None, None).await
    }

    /// Harness with a client-side timeout.
    pub async fn with_timeout(secs: u64) -> Self {
        Self::build(Some(ApiKey::new(API_KEY)), Some(secs)).await
    }

    async fn build(api_key: Option<ApiKey>, timeout_secs: Option<u64>) -> Self {
        let server = MockServer::start().await;

        let mut toml = format!(
            "[gemini]\nbase_url = \"{}/v1beta/models\"\nmodel = \"{MODEL}\"\n",
            server.uri()
        );
        if let Some(secs) = timeout_secs {
            toml.push_str(&format!("timeout_secs = {secs}\n"));
        }
        let mut config: TerminalConfig = toml::from_str(&toml).unwrap();
        config.api_key = api_key;

        let client = GeminiClient::new(config.gemini.clone(), config.api_key.clone()).unwrap();
        let session = Session::new(QueryBridge::new(Arc::new(client)));

        Self {
            server,
            session,
            config,
        }
    }

    /// Path of the generateContent endpoint on the mock server.
    pub fn endpoint_path() -> String {
        format!("/v1beta/models/{MODEL}:generateContent")
    }

    /// Mount a successful reply carrying `text`.
    pub async fn mount_reply(&self, text: &str) {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        });
        self.mount(ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Mount a successful reply with no candidates.
    pub async fn mount_empty(&self) {
        self.mount(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })))
            .await;
    }

    /// Mount an error status with a Gemini-style error body.
    pub async fn mount_error(&self, status: u16, api_status: &str, message: &str) {
        let body = serde_json::json!({
            "error": { "code": status, "message": message, "status": api_status }
        });
        self.mount(ResponseTemplate::new(status).set_body_json(body))
            .await;
    }

    /// Mount an arbitrary response template.
    pub async fn mount(&self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint_path()))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Drop all mounted mocks.
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Submit a line and wait for it to resolve.
    pub async fn submit(&mut self, line: &str) -> Submission {
        self.session.submit(line).await
    }

    /// (input, response) pairs currently in history.
    pub fn history_pairs(&self) -> Vec<(String, String)> {
        self.session
            .history()
            .iter()
            .map(|e| (e.input.clone(), e.response.clone()))
            .collect()
    }

    /// JSON bodies of every request the mock server received.
    pub async fn request_bodies(&self) -> Vec<serde_json::Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}
