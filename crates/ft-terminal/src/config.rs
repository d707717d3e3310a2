//! Terminal configuration, loadable from TOML with the API key from the environment.
//!
//! The config is built once at startup and handed to the query bridge; nothing
//! reads the environment after that.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio-terminal.toml";

/// Environment variables checked for the Gemini key, in order.
pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Top-level configuration for the terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// User shown in the prompt.
    #[serde(default = "default_user")]
    pub user: String,
    /// Host shown in the prompt.
    #[serde(default = "default_host")]
    pub host: String,
    /// Gemini query bridge settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Credential for the bridge. Never read from the file.
    #[serde(skip)]
    pub api_key: Option<ApiKey>,
}

fn default_user() -> String {
    "tahmidur".into()
}
fn default_host() -> String {
    "automation".into()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
            gemini: GeminiConfig::default(),
            api_key: None,
        }
    }
}

impl TerminalConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path`, else from [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else defaults. Then attach the API key from the environment.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };
        config.api_key = ApiKey::from_env();
        Ok(config)
    }

    /// Prompt prefix, e.g. `tahmidur@automation:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$ ", self.user, self.host)
    }
}

/// Settings for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// Base URL up to and including `/models`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on generated tokens.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Request timeout in seconds. Unset means wait for the service.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".into()
}
fn default_model() -> String {
    "gemini-3-flash-preview".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_output_tokens() -> u32 {
    200
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: None,
        }
    }
}

/// API key with a redacted `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Read the key from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// First non-blank value among [`API_KEY_VARS`] according to `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(Self)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
