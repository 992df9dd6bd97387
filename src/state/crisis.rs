//! Crisis tab content and scroll position.

use crate::models::crisis::{default_contacts, default_steps};
use crate::models::{CrisisContact, CrisisResources};

#[derive(Debug, Clone)]
pub struct CrisisState {
    contacts: Vec<CrisisContact>,
    steps: Vec<String>,
    refreshed: bool,
    scroll: u16,
}

impl Default for CrisisState {
    fn default() -> Self {
        Self {
            contacts: default_contacts(),
            steps: default_steps(),
            refreshed: false,
            scroll: 0,
        }
    }
}

impl CrisisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[CrisisContact] {
        &self.contacts
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// True once backend content has replaced the bundled lists.
    pub fn is_refreshed(&self) -> bool {
        self.refreshed
    }

    /// Replace the bundled lists with backend content. Empty lists keep
    /// the bundled content.
    pub fn apply(&mut self, resources: CrisisResources) {
        if !resources.emergency_contacts.is_empty() {
            self.contacts = resources.emergency_contacts;
            self.refreshed = true;
        }
        if !resources.immediate_steps.is_empty() {
            self.steps = resources.immediate_steps;
            self.refreshed = true;
        }
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let state = CrisisState::new();
        assert_eq!(state.contacts().len(), 4);
        assert!(!state.steps().is_empty());
        assert!(!state.is_refreshed());
    }

    #[test]
    fn test_apply_replaces_non_empty_lists() {
        let mut state = CrisisState::new();
        state.apply(CrisisResources {
            emergency_contacts: vec![CrisisContact {
                name: "Local line".into(),
                phone: "555-0100".into(),
                description: String::new(),
            }],
            immediate_steps: Vec::new(),
        });
        assert_eq!(state.contacts().len(), 1);
        assert_eq!(state.steps().len(), default_steps().len());
        assert!(state.is_refreshed());
    }

    #[test]
    fn test_empty_payload_keeps_defaults() {
        let mut state = CrisisState::new();
        state.apply(CrisisResources::default());
        assert_eq!(state.contacts().len(), 4);
        assert!(!state.is_refreshed());
    }
}
