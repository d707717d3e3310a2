//! Mock text generator for testing.
//!
//! Replies come from a scripted FIFO queue, falling back to a fixed reply once
//! the queue is drained. Every prompt is recorded for assertions.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::bridge::TextGenerator;
use crate::error::{BridgeError, BridgeResult};

/// One scripted outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Successful reply with this text.
    Text(String),
    /// Successful call with no text.
    Empty,
    /// Transport failure with this message.
    Fail(String),
}

impl MockReply {
    fn into_result(self) -> BridgeResult<Option<String>> {
        match self {
            MockReply::Text(text) => Ok(Some(text)),
            MockReply::Empty => Ok(None),
            MockReply::Fail(message) => Err(BridgeError::Transport(message)),
        }
    }
}

/// Scripted [`TextGenerator`].
pub struct MockGenerator {
    replies: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Answer every prompt with `reply`.
    pub fn always(reply: MockReply) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback: reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answer with `replies` in order, then with `Empty`.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fallback: MockReply::Empty,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Queue an additional reply.
    pub fn queue_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of generate calls.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::always(MockReply::Empty)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> BridgeResult<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        reply.into_result()
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
