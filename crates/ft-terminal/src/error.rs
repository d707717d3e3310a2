//! Query bridge error types.

use thiserror::Error;

/// Failures on the way to (or back from) the text-generation service.
///
/// These never reach the user: the bridge logs them and answers with a
/// fixed sentence instead.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl BridgeError {
    /// Authentication or quota rejection from the service.
    pub fn is_auth_or_quota(&self) -> bool {
        matches!(self, BridgeError::Status { status: 401 | 403 | 429, .. })
    }
}

/// Convenience alias for bridge results.
pub type BridgeResult<T> = Result<T, BridgeError>;
