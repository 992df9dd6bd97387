//! Type definitions for the application state.
//!
//! - [`Tab`] - Which panel is displayed
//! - [`Alert`] - Blocking dialog that swallows input until dismissed
//! - [`Notice`] - Transient status-bar message

/// The four top-level panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Chat,
    Mood,
    Resources,
    Crisis,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Chat, Tab::Mood, Tab::Resources, Tab::Crisis];

    pub fn index(self) -> usize {
        match self {
            Tab::Chat => 0,
            Tab::Mood => 1,
            Tab::Resources => 2,
            Tab::Crisis => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Chat => "Chat",
            Tab::Mood => "Mood Tracker",
            Tab::Resources => "Resources",
            Tab::Crisis => "Crisis Support",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A modal message. While one is showing only dismissal and quit keys act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Ticks a notice stays visible (about four seconds at 16 ms per tick).
pub const NOTICE_TICKS: u64 = 250;

/// A non-blocking status message that expires on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: AlertKind,
    pub message: String,
    pub expires_at: u64,
}
