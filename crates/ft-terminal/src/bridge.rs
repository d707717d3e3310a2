//! Fallback query bridge: turns `ask` prompts into a reply string.
//!
//! The generator behind the bridge may fail in many ways; the bridge itself
//! never does. Failures are logged and replaced with a fixed sentence, and an
//! empty result gets its own fixed sentence. There are no retries.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BridgeResult;

/// Persona sent with every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI personality living inside an interactive portfolio terminal. \
The user is interacting with you. Be witty, concise, and helpful. \
If they ask about projects, skills, or experience, use the context of a world-class engineer.";

/// Reply when the service answered without usable text.
pub const NO_WORDS_RESPONSE: &str = "Command processed, but I have no words.";

/// Reply when the call failed for any reason.
pub const GLITCH_RESPONSE: &str = "The terminal encountered a glitch in the Matrix. (API Error)";

/// A text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `prompt`.
    ///
    /// `Ok(None)` means the service answered but produced no text.
    async fn generate(&self, prompt: &str) -> BridgeResult<Option<String>>;

    /// Backend name for log fields.
    fn backend_name(&self) -> &str;
}

/// Infallible front of a [`TextGenerator`].
#[derive(Clone)]
pub struct QueryBridge {
    generator: Arc<dyn TextGenerator>,
}

impl QueryBridge {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the backend. Always resolves to a non-empty string.
    pub async fn ask(&self, prompt: &str) -> String {
        match self.generator.generate(prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::debug!(
                    backend = self.generator.backend_name(),
                    "generator returned no text"
                );
                NO_WORDS_RESPONSE.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    backend = self.generator.backend_name(),
                    auth_or_quota = e.is_auth_or_quota(),
                    error = %e,
                    "query bridge call failed"
                );
                GLITCH_RESPONSE.to_string()
            }
        }
    }

    pub fn backend_name(&self) -> &str {
        self.generator.backend_name()
    }
}
