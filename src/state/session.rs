//! Conversational session binding.

use tracing::{info, warn};

/// Backend-assigned chat session.
///
/// Starts `Unbound` and becomes `Bound` on the first successful chat reply.
/// There is no way back to `Unbound`, and a bound id never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unbound,
    Bound(String),
}

/// What [`SessionState::adopt`] did with an offered id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The session was unbound and is now bound to the offered id.
    Bound,
    /// The offered id matched the held id.
    Unchanged,
    /// The offered id differed from the held id and was ignored.
    Ignored,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session id to send with the next chat turn.
    pub fn id(&self) -> Option<&str> {
        match self {
            SessionState::Unbound => None,
            SessionState::Bound(id) => Some(id),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, SessionState::Bound(_))
    }

    /// Offer the id carried by a chat reply.
    pub fn adopt(&mut self, offered: &str) -> SessionUpdate {
        match self {
            SessionState::Unbound => {
                info!("chat session bound: {}", offered);
                *self = SessionState::Bound(offered.to_string());
                SessionUpdate::Bound
            }
            SessionState::Bound(held) if held == offered => SessionUpdate::Unchanged,
            SessionState::Bound(held) => {
                warn!(
                    "backend returned session {} but {} is already bound; keeping {}",
                    offered, held, held
                );
                SessionUpdate::Ignored
            }
        }
    }
}
