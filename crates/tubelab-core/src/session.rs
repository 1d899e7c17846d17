//! Conversation session — an append-only transcript with a single-flight
//! guard on submission.
//!
//! The session is a two-state machine (idle / pending). `submit` appends
//! the user turn synchronously before the assistant is asked, so the
//! question is visible in the transcript while the answer is in flight,
//! and stays visible if the answer fails.

use tubelab_types::{Result, config::ChatMode, message::Turn};

use crate::ports::{AssistantPort, AssistantReply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// One request in flight; further submissions are rejected, not queued
    Pending,
}

pub struct ConversationSession {
    pub id: String,
    pub mode: ChatMode,
    /// Append-only, strictly ordered by submission time
    pub turns: Vec<Turn>,
    state: SessionState,
    turn_counter: u64,
    pub created_at: String,
}

impl ConversationSession {
    pub fn new(mode: ChatMode) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            mode,
            turns: Vec::new(),
            state: SessionState::Idle,
            turn_counter: 0,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SessionState::Pending
    }

    /// Guard half of `submit`: rejects while a request is in flight and
    /// rejects whitespace-only input, otherwise appends the user turn and
    /// moves to `Pending`. Returns the logical request id, or `None` when
    /// the submission was rejected.
    pub fn begin_turn(&mut self, text: &str) -> Option<u64> {
        if self.state == SessionState::Pending {
            log::debug!("session {}: submit rejected, request in flight", self.id);
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.turn_counter += 1;
        self.turns.push(Turn::user(text));
        self.state = SessionState::Pending;
        Some(self.turn_counter)
    }

    /// Record a successful reply: appends exactly one assistant turn and
    /// returns to `Idle`.
    pub fn resolve_turn(&mut self, reply: AssistantReply) {
        let turn = match reply.data {
            Some(data) => Turn::assistant_with_data(reply.text, data),
            None => Turn::assistant(reply.text),
        };
        self.turns.push(turn);
        self.state = SessionState::Idle;
    }

    /// Record a failed request: no assistant turn is appended, and the
    /// already-appended user turn is not rolled back, so the question
    /// remains visible for a retry.
    pub fn fail_turn(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Submit one user turn: append it, ask the assistant, append the
    /// reply.
    ///
    /// Returns `Ok(false)` when the submission was rejected (empty input,
    /// or a request already in flight), `Ok(true)` when the turn was
    /// answered, and the ask error when the request failed — in which
    /// case the transcript grew by exactly the user turn and the session
    /// is back to `Idle`.
    pub async fn submit(&mut self, text: &str, assistant: &dyn AssistantPort) -> Result<bool> {
        let question = text.trim().to_string();
        let Some(request_id) = self.begin_turn(&question) else {
            return Ok(false);
        };
        log::debug!("session {}: request {} in flight", self.id, request_id);

        match assistant.ask(&question).await {
            Ok(reply) => {
                self.resolve_turn(reply);
                Ok(true)
            }
            Err(e) => {
                log::warn!("session {}: request {} failed: {}", self.id, request_id, e);
                self.fail_turn();
                Err(e)
            }
        }
    }
}
