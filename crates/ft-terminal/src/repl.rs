//! Readline front end for a [`Session`].

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use ft_protocol::HistoryEntry;

use crate::config::TerminalConfig;
use crate::interpreter::COMMAND_NAMES;
use crate::session::{Dispatch, Session, Submission};

pub const TITLE: &str = "Tahmidur_Automation_Terminal_v2.0";
pub const WELCOME: &str = "Welcome to the automation hub. Try typing 'help'.";
pub const LOADING: &str = "Processing workflow...";

/// Completion and hints for the terminal's command names.
#[derive(Clone)]
pub struct TerminalHelper {
    commands: Vec<&'static str>,
}

impl TerminalHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.to_vec(),
        }
    }

    /// Command names starting with what has been typed so far.
    fn matches(&self, typed: &str) -> Vec<&'static str> {
        let typed = typed.trim_start().to_lowercase();
        if typed.is_empty() || typed.contains(' ') {
            return Vec::new();
        }
        self.commands
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(&typed))
            .collect()
    }
}

impl Default for TerminalHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for TerminalHelper {}

impl Completer for TerminalHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        let start = typed.len() - typed.trim_start().len();
        let candidates = self
            .matches(typed)
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.trim_end().to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for TerminalHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let typed = line.trim_start();
        self.matches(typed)
            .first()
            .filter(|cmd| cmd.len() > typed.len())
            .map(|cmd| cmd[typed.len()..].to_string())
    }
}

impl Highlighter for TerminalHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let normalized = line.trim().to_lowercase();
        let known = COMMAND_NAMES.contains(&normalized.as_str()) || normalized.starts_with("ask ");
        if known {
            Owned(line.bright_white().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for TerminalHelper {}

fn print_banner() {
    println!("{}", TITLE.bright_magenta().bold());
    println!("{}", WELCOME.bright_black());
    println!();
}

fn print_entry(entry: &HistoryEntry) {
    for line in entry.response.lines() {
        println!("    {}", line.white());
    }
}

/// Run the prompt loop until EOF.
///
/// The next line is not read until the current one has resolved, so at most
/// one query is ever in flight.
pub async fn run(session: &mut Session, config: &TerminalConfig) -> anyhow::Result<()> {
    let mut rl: Editor<TerminalHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(TerminalHelper::new()));

    let prompt = config.prompt();
    print_banner();

    loop {
        match rl.readline(&prompt.purple().to_string()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        tracing::debug!(error = %err, "could not record line history");
                    }
                }

                match session.dispatch(&line) {
                    // Busy needs a line read while a query is pending,
                    // which this loop never does.
                    Dispatch::Done(Submission::Ignored | Submission::Busy) => {}
                    Dispatch::Done(Submission::Cleared) => {
                        rl.clear_screen()?;
                        print_banner();
                    }
                    Dispatch::Done(Submission::Resolved(entry)) => print_entry(&entry),
                    Dispatch::Query(query) => {
                        println!("{}", LOADING.bright_black().italic());
                        let entry = session.resolve(query).await;
                        print_entry(&entry);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Press Ctrl-D to close the terminal.".yellow());
            }
            Err(ReadlineError::Eof) => {
                tracing::debug!(
                    session_id = %session.id(),
                    entries = session.history().len(),
                    "terminal closed"
                );
                break;
            }
            Err(err) => {
                tracing::error!(error = %err, "readline failed");
                return Err(err.into());
            }
        }
    }

    Ok(())
}
