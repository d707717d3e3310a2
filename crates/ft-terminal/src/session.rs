//! Interactive session: history plus the single in-flight query guard.
//!
//! A submission goes `idle → pending → idle`: literal commands resolve
//! immediately, `ask` leaves the session pending until its reply is
//! appended. While pending, every submission except `clear` is rejected as
//! [`Submission::Busy`]. `clear` always empties history at once; a pending
//! reply still lands afterwards.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use ft_protocol::{Command, CommandLine, HistoryEntry, ResponseSource, SessionHistory};

use crate::bridge::QueryBridge;
use crate::interpreter;

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank line: nothing classified, nothing recorded.
    Ignored,
    /// A query is in flight; this line was dropped.
    Busy,
    /// History was emptied.
    Cleared,
    /// The entry appended for this line.
    Resolved(HistoryEntry),
}

/// An `ask` waiting on the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub seq: u64,
    /// Trimmed input in original casing.
    pub input: String,
    /// Text forwarded to the bridge.
    pub prompt: String,
    pub submitted_at: DateTime<Utc>,
}

/// What the caller has to do after [`Session::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing left to do.
    Done(Submission),
    /// Resolve the query with [`Session::resolve`].
    Query(PendingQuery),
}

/// One interactive terminal session.
pub struct Session {
    id: Uuid,
    bridge: QueryBridge,
    history: SessionHistory,
    pending: Option<u64>,
    next_seq: u64,
}

impl Session {
    pub fn new(bridge: QueryBridge) -> Self {
        let id = Uuid::now_v7();
        tracing::debug!(session_id = %id, backend = bridge.backend_name(), "session started");
        Self {
            id,
            bridge,
            history: SessionHistory::new(),
            pending: None,
            next_seq: 1,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Whether a query is awaiting its reply.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit a line and wait for it to resolve.
    pub async fn submit(&mut self, raw: &str) -> Submission {
        match self.dispatch(raw) {
            Dispatch::Done(submission) => submission,
            Dispatch::Query(query) => Submission::Resolved(self.resolve(query).await),
        }
    }

    /// Classify a line and apply every synchronous effect.
    ///
    /// An `ask` marks the session pending and is handed back as
    /// [`Dispatch::Query`]; nothing is appended until it resolves.
    pub fn dispatch(&mut self, raw: &str) -> Dispatch {
        let Some(line) = CommandLine::parse(raw) else {
            return Dispatch::Done(Submission::Ignored);
        };

        let command = interpreter::classify(&line);

        if command == Command::Clear {
            tracing::debug!(
                session_id = %self.id,
                dropped = self.history.len(),
                pending = self.is_pending(),
                "history cleared"
            );
            self.history.clear();
            return Dispatch::Done(Submission::Cleared);
        }

        if let Some(seq) = self.pending {
            tracing::debug!(
                session_id = %self.id,
                pending_seq = seq,
                command = command.name(),
                "submission rejected while query pending"
            );
            return Dispatch::Done(Submission::Busy);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        let submitted_at = Utc::now();

        tracing::debug!(session_id = %self.id, seq, command = command.name(), "command classified");

        if let Command::Ask(prompt) = command {
            self.pending = Some(seq);
            return Dispatch::Query(PendingQuery {
                seq,
                input: line.input,
                prompt,
                submitted_at,
            });
        }

        let response = interpreter::fixed_response(&command).unwrap_or_default();
        let entry = HistoryEntry {
            seq,
            input: line.input,
            response: response.to_string(),
            source: ResponseSource::Local,
            submitted_at,
            resolved_at: submitted_at,
        };
        self.history.push(entry.clone());
        Dispatch::Done(Submission::Resolved(entry))
    }

    /// Run a pending query through the bridge and append its entry.
    pub async fn resolve(&mut self, query: PendingQuery) -> HistoryEntry {
        let response = self.bridge.ask(&query.prompt).await;
        self.complete(query, response)
    }

    /// Append the entry for a pending query that resolved to `response`.
    pub fn complete(&mut self, query: PendingQuery, response: String) -> HistoryEntry {
        if self.pending == Some(query.seq) {
            self.pending = None;
        }

        let entry = HistoryEntry {
            seq: query.seq,
            input: query.input,
            response,
            source: ResponseSource::Bridge,
            submitted_at: query.submitted_at,
            resolved_at: Utc::now(),
        };

        tracing::info!(
            session_id = %self.id,
            seq = entry.seq,
            latency_ms = (entry.resolved_at - entry.submitted_at).num_milliseconds(),
            "query resolved"
        );

        self.history.push(entry.clone());
        entry
    }
}
