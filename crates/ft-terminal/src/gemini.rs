//! Gemini REST client for the query bridge.
//!
//! Calls `POST {base_url}/{model}:generateContent` with the terminal persona
//! as system instruction and a fixed generation config. The API key travels in
//! the `x-goog-api-key` header.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::bridge::{SYSTEM_INSTRUCTION, TextGenerator};
use crate::config::{ApiKey, GeminiConfig};
use crate::error::{BridgeError, BridgeResult};

/// generateContent request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// generateContent response (only fields we need).
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
    api_key: Option<ApiKey>,
}

impl GeminiClient {
    /// Build a client. A missing key is accepted here and reported per call.
    pub fn new(config: GeminiConfig, api_key: Option<ApiKey>) -> BridgeResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BridgeError::Client(e.to_string()))?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> BridgeResult<Option<String>> {
        let api_key = self.api_key.as_ref().ok_or(BridgeError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BridgeError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(BridgeError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| BridgeError::Decode(e.to_string()))?;

        Ok(extract_text(parsed))
    }

    fn backend_name(&self) -> &str {
        &self.config.model
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Best-effort summary of an error body, for logs only.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorWrapper>(body) {
        Ok(ErrorWrapper { error }) => match (error.status, error.message) {
            (Some(status), Some(message)) => format!("{status}: {message}"),
            (Some(status), None) => status,
            (None, Some(message)) => message,
            (None, None) => "unknown error".into(),
        },
        Err(_) if body.trim().is_empty() => "empty error body".into(),
        Err(_) => body.chars().take(200).collect(),
    }
}
