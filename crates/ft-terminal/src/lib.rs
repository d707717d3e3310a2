//! Folio terminal: the interactive command line behind the portfolio page.
//!
//! Literal commands are answered locally by the interpreter; `ask <question>`
//! goes through the query bridge to Gemini. The session owns history and
//! the single in-flight query guard.

pub mod bridge;
pub mod config;
pub mod error;
pub mod gemini;
pub mod interpreter;
pub mod mock;
pub mod repl;
pub mod session;

pub use bridge::{QueryBridge, TextGenerator};
pub use config::{ApiKey, GeminiConfig, TerminalConfig};
pub use error::{BridgeError, BridgeResult};
pub use gemini::GeminiClient;
pub use mock::{MockGenerator, MockReply};
pub use session::{Dispatch, PendingQuery, Session, Submission};
