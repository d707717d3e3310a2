//! E2E tests for the submission lifecycle:
//! raw line → interpreter → (bridge → Gemini) → history.

mod helpers;

use ft_protocol::ResponseSource;
use ft_terminal::interpreter::{AUTOMATION_RESPONSE, HELP_RESPONSE, UNRECOGNIZED_RESPONSE};
use ft_terminal::{Dispatch, Submission};

use helpers::TestHarness;

/// Literal commands resolve without touching the network.
#[tokio::test]
async fn e2e_literal_commands_stay_local() {
    let mut h = TestHarness::start().await;

    for (line, expected) in [
        ("help", HELP_RESPONSE),
        ("  HELP\t", HELP_RESPONSE),
        ("Automation", AUTOMATION_RESPONSE),
        ("  aUtOmAtIoN ", AUTOMATION_RESPONSE),
    ] {
        let Submission::Resolved(entry) = h.submit(line).await else {
            panic!("'{line}' should resolve");
        };
        assert_eq!(entry.response, expected, "response for {line:?}");
        assert_eq!(entry.input, line.trim(), "history keeps original casing");
        assert_eq!(entry.source, ResponseSource::Local);
    }

    assert!(h.request_bodies().await.is_empty());
}

/// Full ask path: prompt reaches Gemini, reply lands in history.
#[tokio::test]
async fn e2e_ask_full_lifecycle() {
    let mut h = TestHarness::start().await;
    h.mount_reply("42").await;

    let Submission::Resolved(entry) = h.submit("ask What is the meaning of life?").await else {
        panic!("ask should resolve");
    };
    assert_eq!(entry.response, "42");
    assert_eq!(entry.source, ResponseSource::Bridge);
    assert!(entry.resolved_at >= entry.submitted_at);

    let bodies = h.request_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0]["contents"][0]["parts"][0]["text"],
        "what is the meaning of life?"
    );
}

/// The prefix check is case-insensitive; the prompt is sent lower-cased
/// while history keeps the typed casing.
#[tokio::test]
async fn e2e_ask_prefix_case_insensitive() {
    let mut h = TestHarness::start().await;
    h.mount_reply("n8n is a workflow tool").await;

    h.submit("ASK What is N8N?").await;

    let bodies = h.request_bodies().await;
    assert_eq!(bodies[0]["contents"][0]["parts"][0]["text"], "what is n8n?");
    assert_eq!(
        h.history_pairs(),
        [("ASK What is N8N?".to_string(), "n8n is a workflow tool".to_string())]
    );
}

/// Unknown input gets the 404 line and is recorded.
#[tokio::test]
async fn e2e_unrecognized_recorded() {
    let mut h = TestHarness::start().await;

    for line in ["journey", "n8n", "ask", "asking nicely", "help me"] {
        let Submission::Resolved(entry) = h.submit(line).await else {
            panic!("'{line}' should resolve");
        };
        assert_eq!(entry.response, UNRECOGNIZED_RESPONSE, "response for {line:?}");
    }

    assert_eq!(h.session.history().len(), 5);
    assert!(h.request_bodies().await.is_empty());
}

/// Blank lines are dropped before classification.
#[tokio::test]
async fn e2e_blank_input_dropped() {
    let mut h = TestHarness::start().await;

    assert_eq!(h.submit("").await, Submission::Ignored);
    assert_eq!(h.submit("     ").await, Submission::Ignored);
    assert_eq!(h.submit("\t\n").await, Submission::Ignored);
    assert!(h.session.history().is_empty());
}

/// `clear` empties history, never records itself, and works on an empty history.
#[tokio::test]
async fn e2e_clear_semantics() {
    let mut h = TestHarness::start().await;

    assert_eq!(h.submit("clear").await, Submission::Cleared);
    assert!(h.session.history().is_empty());

    h.submit("help").await;
    h.submit("automation").await;
    assert_eq!(h.session.history().len(), 2);

    assert_eq!(h.submit("  Clear ").await, Submission::Cleared);
    assert!(h.session.history().is_empty());
}

/// N submissions produce N entries (minus clears) in submission order.
#[tokio::test]
async fn e2e_history_order_mixed() {
    let mut h = TestHarness::start().await;
    h.mount_reply("scripted").await;

    let lines = ["help", "ask one", "whoami", "automation", "ask two"];
    for line in lines {
        h.submit(line).await;
    }

    let pairs = h.history_pairs();
    let inputs: Vec<&str> = pairs.iter().map(|(i, _)| i.as_str()).collect();
    assert_eq!(inputs, lines);

    let responses: Vec<&str> = pairs.iter().map(|(_, r)| r.as_str()).collect();
    assert_eq!(
        responses,
        [
            HELP_RESPONSE,
            "scripted",
            UNRECOGNIZED_RESPONSE,
            AUTOMATION_RESPONSE,
            "scripted"
        ]
    );

    let seqs: Vec<u64> = h.session.history().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, [1, 2, 3, 4, 5]);
}

/// While an ask is pending, other lines are rejected and `clear` still clears.
#[tokio::test]
async fn e2e_pending_guard() {
    let mut h = TestHarness::start().await;
    h.mount_reply("eventually").await;
    h.submit("help").await;

    let Dispatch::Query(query) = h.session.dispatch("ask hold on") else {
        panic!("ask should be pending");
    };
    assert!(h.session.is_pending());

    assert_eq!(h.session.dispatch("automation"), Dispatch::Done(Submission::Busy));
    assert_eq!(h.session.dispatch("clear"), Dispatch::Done(Submission::Cleared));
    assert!(h.session.history().is_empty());

    let entry = h.session.resolve(query).await;
    assert_eq!(entry.response, "eventually");
    assert!(!h.session.is_pending());
    assert_eq!(
        h.history_pairs(),
        [("ask hold on".to_string(), "eventually".to_string())]
    );
}
