use serde::{Deserialize, Serialize};

/// Prefix that routes a line to the query bridge.
pub const ASK_PREFIX: &str = "ask ";

/// One submitted line, trimmed and ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    /// Trimmed input in its original casing (shown in history).
    pub input: String,
    /// Trimmed, lower-cased input used for matching.
    pub normalized: String,
}

impl CommandLine {
    /// Build a command line from raw input.
    ///
    /// Returns `None` for blank input: a blank line is never classified
    /// and never produces a history entry.
    pub fn parse(raw: &str) -> Option<Self> {
        let input = raw.trim();
        if input.is_empty() {
            return None;
        }
        Some(Self {
            input: input.to_string(),
            normalized: input.to_lowercase(),
        })
    }

    /// The lower-cased text after the `ask ` prefix.
    ///
    /// `None` when the line does not start with the prefix. The original
    /// casing only survives in `input`, for history display.
    pub fn ask_prompt(&self) -> Option<&str> {
        self.normalized.strip_prefix(ASK_PREFIX)
    }
}

/// Closed set of command kinds the terminal understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "prompt", rename_all = "snake_case")]
pub enum Command {
    /// Empty the session history.
    Clear,
    /// List the recognized commands.
    Help,
    /// Describe the operator's automation toolset.
    Automation,
    /// Forward a free-text prompt to the query bridge.
    Ask(String),
    /// Anything else.
    Unrecognized,
}

impl Command {
    /// Whether this command needs the query bridge to resolve.
    pub fn is_remote(&self) -> bool {
        matches!(self, Command::Ask(_))
    }

    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Automation => "automation",
            Command::Ask(_) => "ask",
            Command::Unrecognized => "unrecognized",
        }
    }
}
