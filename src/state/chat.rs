//! Chat transcript, input and turn-taking.

use crate::models::{ChatMessage, ChatReply, FALLBACK_REPLY, SUGGESTIONS};

use super::input::TextInput;
use super::session::SessionState;

/// How a chat turn settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The backend answered.
    Replied(ChatReply),
    /// The request failed; carries the error code for logging.
    Failed(String),
    /// The request task ended without reporting.
    Aborted,
}

/// A turn accepted by [`ChatState::begin_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pub input: TextInput,
    session: SessionState,
    busy: bool,
    suggestion: Option<usize>,
    /// Lines scrolled up from the bottom of the transcript
    scroll: u16,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Accept the current input as a new turn.
    ///
    /// Returns `None` without touching any state when the input is blank or
    /// a turn is already in flight. Otherwise the trimmed text is echoed into
    /// the transcript, the input is cleared and the state goes busy.
    pub fn begin_turn(&mut self) -> Option<PendingTurn> {
        if self.busy || self.input.is_blank() {
            return None;
        }
        let message = self.input.take().trim().to_string();
        self.messages.push(ChatMessage::user(message.clone()));
        self.busy = true;
        self.suggestion = None;
        self.scroll = 0;
        Some(PendingTurn {
            message,
            session_id: self.session.id().map(str::to_string),
        })
    }

    /// Apply the settlement of the in-flight turn. A settlement arriving
    /// while no turn is in flight is ignored.
    pub fn settle_turn(&mut self, outcome: ChatOutcome) {
        if !self.busy {
            return;
        }
        match outcome {
            ChatOutcome::Replied(reply) => {
                self.session.adopt(&reply.session_id);
                self.messages.push(ChatMessage::assistant(reply.text));
            }
            ChatOutcome::Failed(_) | ChatOutcome::Aborted => {
                self.messages.push(ChatMessage::assistant(FALLBACK_REPLY));
            }
        }
        self.busy = false;
        self.scroll = 0;
    }

    /// Starter prompts are offered only before the first turn.
    pub fn suggestions_visible(&self) -> bool {
        self.messages.is_empty() && !self.busy
    }

    /// Index of the highlighted starter prompt.
    pub fn selected_suggestion(&self) -> Option<usize> {
        self.suggestion
    }

    pub fn next_suggestion(&mut self) {
        let next = match self.suggestion {
            Some(i) => (i + 1) % SUGGESTIONS.len(),
            None => 0,
        };
        self.apply_suggestion(next);
    }

    pub fn prev_suggestion(&mut self) {
        let prev = match self.suggestion {
            Some(0) | None => SUGGESTIONS.len() - 1,
            Some(i) => i - 1,
        };
        self.apply_suggestion(prev);
    }

    fn apply_suggestion(&mut self, index: usize) {
        if !self.suggestions_visible() {
            return;
        }
        self.suggestion = Some(index);
        self.input.set_content(SUGGESTIONS[index]);
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Clamp the scroll offset to what the transcript can show.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}
