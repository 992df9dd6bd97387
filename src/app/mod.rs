//! Application state and logic.
//!
//! `App` composes the per-tab state containers. The UI loop is its only
//! mutator: key events go through [`App::handle_key`] and results from
//! spawned request tasks come back as [`AppMessage`]s through
//! [`App::handle_message`].

mod chat;
mod handlers;
mod keys;
mod loaders;
mod messages;
mod types;

pub use chat::ChatTurn;
pub use handlers::{MOOD_FAILED, MOOD_LOGGED};
pub use messages::{AppMessage, LoadSource};
pub use types::{Alert, AlertKind, Notice, Tab, NOTICE_TICKS};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::state::{ChatState, CrisisState, MoodState, ResourcesState};
use crate::ui::theme::Palette;

pub struct App {
    pub config: Config,
    pub palette: Palette,
    pub tab: Tab,
    pub chat: ChatState,
    pub mood: MoodState,
    pub resources: ResourcesState,
    pub crisis: CrisisState,
    /// Blocking dialog, if any
    pub alert: Option<Alert>,
    pub notice: Option<Notice>,
    /// `None` until the first health check returns
    pub connection_status: Option<bool>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
    pub client: Arc<BackendClient>,
    /// Sender handed to request tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Taken by the UI loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create an App talking to `config.backend_url` over reqwest.
    pub fn new(config: Config) -> Self {
        let client = Arc::new(BackendClient::with_base_url(config.backend_url.clone()));
        Self::with_client(config, client)
    }

    /// Create an App with a custom BackendClient.
    pub fn with_client(config: Config, client: Arc<BackendClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            palette: config.skin.palette(),
            config,
            tab: Tab::default(),
            chat: ChatState::new(),
            mood: MoodState::new(),
            resources: ResourcesState::new(),
            crisis: CrisisState::new(),
            alert: None,
            notice: None,
            connection_status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            client,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Drain and apply every message already queued. Returns how many were
    /// applied.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut applied = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            applied += 1;
        }
        self.message_rx = Some(rx);
        applied
    }

    /// Wait for the next message and apply it. Returns `false` if the
    /// channel is closed or the receiver has been taken.
    pub async fn process_next_message(&mut self) -> bool {
        let Some(mut rx) = self.message_rx.take() else {
            return false;
        };
        let received = rx.recv().await;
        self.message_rx = Some(rx);
        match received {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }
}
