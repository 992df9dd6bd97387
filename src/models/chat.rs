//! Chat transcript and wire types for `POST /api/chat`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply appended to the transcript when a chat request fails for any reason.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble connecting right now. Please try again in a moment.";

/// Starter prompts offered while the transcript is empty.
pub const SUGGESTIONS: [&str; 4] = [
    "I'm feeling anxious about work",
    "I need help with sleep issues",
    "I want to learn coping strategies",
    "I'm having a difficult day",
];

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub origin: Origin,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

/// Request body for `POST /api/chat`. `session_id` serializes as `null`
/// until the backend has assigned one.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: Option<&'a str>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub response: String,
}

/// A successful chat round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub session_id: String,
    pub text: String,
}

impl From<ChatResponse> for ChatReply {
    fn from(r: ChatResponse) -> Self {
        Self {
            session_id: r.session_id,
            text: r.response,
        }
    }
}
