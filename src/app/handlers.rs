//! Applying async results to application state.

use tracing::debug;

use super::{Alert, AlertKind, App, AppMessage, Notice, NOTICE_TICKS};

pub const MOOD_LOGGED: &str = "Mood logged successfully!";
pub const MOOD_FAILED: &str = "Error logging mood. Please try again.";

impl App {
    /// Apply one message from a request task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::HealthChecked(healthy) => {
                self.connection_status = Some(healthy);
            }
            AppMessage::ResourcesLoaded { token, resources } => {
                let count = resources.len();
                if self.resources.apply_resources(token, resources) {
                    debug!("applied {} resources for {}", count, token);
                } else {
                    debug!(
                        "dropped stale resources response {} (latest {:?})",
                        token,
                        self.resources.latest_request()
                    );
                }
            }
            AppMessage::ResourcesFailed { token, error } => {
                if self.resources.fetch_failed(token) {
                    self.show_error_notice(error);
                }
            }
            AppMessage::CategoriesLoaded(categories) => {
                self.resources.set_categories(categories);
            }
            AppMessage::MoodHistoryLoaded { token, entries } => {
                if !self.mood.apply_history(token, entries) {
                    debug!(
                        "dropped stale mood history response {} (latest {:?})",
                        token,
                        self.mood.latest_history_request()
                    );
                }
            }
            AppMessage::MoodHistoryFailed { token, error } => {
                if self.mood.history_failed(token) {
                    self.show_error_notice(error);
                }
            }
            AppMessage::CrisisResourcesLoaded(resources) => {
                self.crisis.apply(resources);
            }
            AppMessage::LoadFailed { source, error } => {
                // Categories and crisis content have usable fallbacks.
                debug!("{} unavailable, keeping defaults: {}", source, error);
            }
            AppMessage::ChatSettled(outcome) => {
                self.chat.settle_turn(outcome);
            }
            AppMessage::MoodSubmitted { success } => {
                self.mood.finish_submit(success);
                if success {
                    self.show_notice(MOOD_LOGGED);
                    self.load_mood_history();
                } else {
                    self.alert = Some(Alert::error(MOOD_FAILED));
                }
            }
        }
    }

    /// Advance the animation clock and expire notices.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(notice) = &self.notice {
            if self.tick_count >= notice.expires_at {
                self.notice = None;
                self.mark_dirty();
            }
        }
        // Spinners animate while anything is pending.
        if (self.chat.is_busy() || self.resources.is_loading() || self.mood.is_submitting())
            && self.tick_count % 6 == 0
        {
            self.mark_dirty();
        }
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.set_notice(AlertKind::Info, message.into());
    }

    /// Non-blocking failure message for the status bar.
    pub fn show_error_notice(&mut self, message: impl Into<String>) {
        self.set_notice(AlertKind::Error, message.into());
    }

    fn set_notice(&mut self, kind: AlertKind, message: String) {
        self.notice = Some(Notice {
            kind,
            message,
            expires_at: self.tick_count + NOTICE_TICKS,
        });
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::app::LoadSource;
    use crate::backend::BackendClient;
    use crate::config::Config;
    use crate::models::CategoryFilter;
    use std::sync::Arc;

    fn app() -> App {
        let client = BackendClient::with_http_client(
            "http://mindwell.test",
            Arc::new(MockHttpClient::new()),
        );
        App::with_client(Config::default(), Arc::new(client))
    }

    #[test]
    fn test_stale_resource_failure_is_silent() {
        let mut app = app();
        let stale = app.resources.select_category(CategoryFilter::All);
        let latest = app.resources.select_category(CategoryFilter::from("sleep"));

        app.handle_message(AppMessage::ResourcesFailed {
            token: stale,
            error: "gone".into(),
        });
        assert!(app.notice.is_none());
        assert!(app.resources.is_loading());

        app.handle_message(AppMessage::ResourcesFailed {
            token: latest,
            error: "gone".into(),
        });
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, AlertKind::Error);
        assert_eq!(notice.message, "gone");
        assert!(!app.resources.is_loading());
    }

    #[test]
    fn test_fallback_loads_fail_quietly() {
        let mut app = app();
        app.handle_message(AppMessage::LoadFailed {
            source: LoadSource::CrisisResources,
            error: "down".into(),
        });
        app.handle_message(AppMessage::LoadFailed {
            source: LoadSource::Categories,
            error: "down".into(),
        });
        assert!(app.notice.is_none());
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_stale_mood_history_failure_is_silent() {
        let mut app = app();
        let stale = app.mood.issue_history_request();
        let latest = app.mood.issue_history_request();
        app.handle_message(AppMessage::MoodHistoryLoaded {
            token: latest,
            entries: Vec::new(),
        });

        app.handle_message(AppMessage::MoodHistoryFailed {
            token: stale,
            error: "stale".into(),
        });
        assert!(app.notice.is_none());
        assert!(app.mood.history_loaded());

        let newest = app.mood.issue_history_request();
        app.handle_message(AppMessage::MoodHistoryFailed {
            token: newest,
            error: "down".into(),
        });
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, AlertKind::Error);
        assert_eq!(notice.message, "down");
    }

    #[test]
    fn test_notice_expiry() {
        let mut app = app();
        app.show_notice(MOOD_LOGGED);
        for _ in 0..NOTICE_TICKS - 1 {
            app.tick();
        }
        assert!(app.notice.is_some());
        app.tick();
        assert!(app.notice.is_none());
    }
}
