//! Chat turn dispatch.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::{App, AppMessage};
use crate::state::ChatOutcome;

/// Permit for the single in-flight chat request.
///
/// Moved into the request task. It reports exactly one settlement: the one
/// passed to [`ChatTurn::settle`], or `Aborted` from `Drop` if the task ends
/// without settling.
pub struct ChatTurn {
    tx: mpsc::UnboundedSender<AppMessage>,
    settled: bool,
}

impl ChatTurn {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx, settled: false }
    }

    pub fn settle(mut self, outcome: ChatOutcome) {
        self.settled = true;
        let _ = self.tx.send(AppMessage::ChatSettled(outcome));
    }
}

impl Drop for ChatTurn {
    fn drop(&mut self) {
        if !self.settled {
            warn!("chat request ended without a result");
            let _ = self.tx.send(AppMessage::ChatSettled(ChatOutcome::Aborted));
        }
    }
}

impl App {
    /// Send the chat input as a new turn. Returns `false` when the input is
    /// blank or a turn is already in flight; nothing changes in that case.
    pub fn submit_chat(&mut self) -> bool {
        let Some(turn) = self.chat.begin_turn() else {
            return false;
        };
        self.mark_dirty();

        let permit = ChatTurn::new(self.message_tx.clone());
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            debug!("sending chat turn ({} chars)", turn.message.chars().count());
            let outcome = match client
                .send_chat_message(&turn.message, turn.session_id.as_deref())
                .await
            {
                Ok(reply) => ChatOutcome::Replied(reply),
                Err(e) => {
                    warn!("[{}] chat request failed: {}", e.error_code(), e);
                    ChatOutcome::Failed(e.error_code().to_string())
                }
            };
            permit.settle(outcome);
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_sends_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        ChatTurn::new(tx).settle(ChatOutcome::Failed("E_NET_CONN".into()));
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessage::ChatSettled(ChatOutcome::Failed(_)))
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_drop_reports_aborted() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(ChatTurn::new(tx));
        assert!(matches!(
            rx.try_recv(),
            Ok(AppMessage::ChatSettled(ChatOutcome::Aborted))
        ));
    }
}
