//! Folio terminal: interactive portfolio command line.
//!
//! Usage: `folio-terminal [config.toml]`. The Gemini key comes from
//! `GEMINI_API_KEY` (or `API_KEY`); without it `ask` answers with the
//! glitch sentence and everything else still works.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ft_terminal::config::TerminalConfig;
use ft_terminal::{GeminiClient, QueryBridge, Session, repl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the prompt on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "folio-terminal starting"
    );

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args().nth(1);
    let config = TerminalConfig::load(config_path.as_deref())?;
    tracing::info!(
        model = %config.gemini.model,
        api_key_present = config.api_key.is_some(),
        "config loaded"
    );
    if config.api_key.is_none() {
        tracing::warn!("no Gemini API key set; ask queries will fail");
    }

    // ── Query bridge ────────────────────────────────────────────
    let client = GeminiClient::new(config.gemini.clone(), config.api_key.clone())?;
    let bridge = QueryBridge::new(Arc::new(client));

    // ── Session ─────────────────────────────────────────────────
    let mut session = Session::new(bridge);
    repl::run(&mut session, &config).await?;

    tracing::info!(
        session_id = %session.id(),
        entries = session.history().len(),
        "folio-terminal stopped"
    );
    Ok(())
}
