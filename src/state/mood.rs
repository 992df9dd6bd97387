//! Mood form and history.

use crate::models::{MoodEntry, MoodLevel, MoodSubmission};

use super::input::TextInput;
use super::sequence::{RequestSequence, RequestToken};

#[derive(Debug, Clone, Default)]
pub struct MoodState {
    level: MoodLevel,
    pub notes: TextInput,
    history: Vec<MoodEntry>,
    history_seq: RequestSequence,
    history_loaded: bool,
    submitting: bool,
}

impl MoodState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> MoodLevel {
        self.level
    }

    pub fn set_level(&mut self, level: MoodLevel) {
        self.level = level;
    }

    pub fn raise_level(&mut self) {
        self.level = self.level.raised();
    }

    pub fn lower_level(&mut self) {
        self.level = self.level.lowered();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The entry the form currently describes.
    pub fn submission(&self) -> MoodSubmission {
        MoodSubmission::new(self.level, self.notes.content())
    }

    /// Mark a submission as in flight. `None` if one already is.
    pub fn begin_submit(&mut self) -> Option<MoodSubmission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.submission())
    }

    /// Settle the in-flight submission. Only success resets the form.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.reset_form();
        }
    }

    /// Back to level 5 with empty notes.
    pub fn reset_form(&mut self) {
        self.level = MoodLevel::DEFAULT;
        self.notes.clear();
    }

    /// Issue a token for a history fetch about to be sent.
    pub fn issue_history_request(&mut self) -> RequestToken {
        self.history_seq.issue()
    }

    /// Replace the history if `token` is the latest issued. Returns whether
    /// the entries were applied.
    pub fn apply_history(&mut self, token: RequestToken, entries: Vec<MoodEntry>) -> bool {
        if !self.history_seq.is_latest(token) {
            return false;
        }
        self.history = entries;
        self.history_loaded = true;
        true
    }

    /// A history fetch failed. The previous history stays. Returns whether
    /// `token` was the latest issued.
    pub fn history_failed(&self, token: RequestToken) -> bool {
        self.history_seq.is_latest(token)
    }

    /// Token of the most recent history fetch, if any.
    pub fn latest_history_request(&self) -> Option<RequestToken> {
        self.history_seq.latest()
    }

    pub fn history_loaded(&self) -> bool {
        self.history_loaded
    }

    pub fn history(&self) -> &[MoodEntry] {
        &self.history
    }

    /// The first `limit` entries, most recent first.
    pub fn recent_history(&self, limit: usize) -> &[MoodEntry] {
        &self.history[..self.history.len().min(limit)]
    }
}
