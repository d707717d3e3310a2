//! Command interpreter: classifies a line into a [`Command`].
//!
//! Literal commands are matched exactly on the trimmed, lower-cased line.
//! Only after those miss is the `ask ` prefix checked. Everything else is
//! `Unrecognized`.

use ft_protocol::{Command, CommandLine};

pub const HELP_RESPONSE: &str =
    "Available commands: automation, n8n, journey, ask [question], clear, help";

pub const AUTOMATION_RESPONSE: &str =
    "Automating the boring stuff using n8n and PostgreSQL. JSON is my first language.";

pub const UNRECOGNIZED_RESPONSE: &str =
    "System error: Code 404. Type 'help' for available manual commands.";

/// Names offered for completion, in the order `help` lists them.
pub const COMMAND_NAMES: &[&str] = &["automation", "ask ", "clear", "help"];

/// Classify a command line. Total over all non-blank input.
pub fn classify(line: &CommandLine) -> Command {
    match line.normalized.as_str() {
        "clear" => Command::Clear,
        "help" => Command::Help,
        "automation" => Command::Automation,
        _ => match line.ask_prompt() {
            Some(prompt) => Command::Ask(prompt.to_string()),
            None => Command::Unrecognized,
        },
    }
}

/// The fixed response for a locally answered command.
///
/// `Clear` has no response and `Ask` resolves through the bridge, so both
/// return `None`.
pub fn fixed_response(command: &Command) -> Option<&'static str> {
    match command {
        Command::Help => Some(HELP_RESPONSE),
        Command::Automation => Some(AUTOMATION_RESPONSE),
        Command::Unrecognized => Some(UNRECOGNIZED_RESPONSE),
        Command::Clear | Command::Ask(_) => None,
    }
}
