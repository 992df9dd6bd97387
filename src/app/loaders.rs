//! Background loads. Each spawns one request task that reports back
//! through `message_tx`.

use std::sync::Arc;

use tracing::{info, warn};

use super::{App, AppMessage, LoadSource};
use crate::models::CategoryFilter;
use crate::state::RequestToken;

impl App {
    /// Fetch everything the tabs show on startup.
    pub fn initialize(&mut self) {
        info!("loading initial data from {}", self.client.base_url);
        self.check_health();
        self.load_resources(CategoryFilter::All);
        self.load_categories();
        self.load_mood_history();
        self.load_crisis_resources();
    }

    pub fn check_health(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let healthy = match client.health_check().await {
                Ok(healthy) => healthy,
                Err(e) => {
                    warn!("[{}] health check failed: {}", e.error_code(), e);
                    false
                }
            };
            let _ = tx.send(AppMessage::HealthChecked(healthy));
        });
    }

    /// Select `category` and fetch its resources.
    pub fn load_resources(&mut self, category: CategoryFilter) {
        let token = self.resources.select_category(category.clone());
        self.spawn_resources_fetch(category, token);
    }

    pub(crate) fn spawn_resources_fetch(&self, category: CategoryFilter, token: RequestToken) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.fetch_resources(&category).await {
                Ok(resources) => AppMessage::ResourcesLoaded { token, resources },
                Err(e) => {
                    warn!("[{}] resource fetch {} failed: {}", e.error_code(), token, e);
                    AppMessage::ResourcesFailed {
                        token,
                        error: e.user_message(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }

    pub fn load_categories(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.fetch_categories().await {
                Ok(categories) => AppMessage::CategoriesLoaded(categories),
                Err(e) => {
                    warn!("[{}] loading categories failed: {}", e.error_code(), e);
                    AppMessage::LoadFailed {
                        source: LoadSource::Categories,
                        error: e.user_message(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }

    pub fn load_mood_history(&mut self) {
        let token = self.mood.issue_history_request();
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.fetch_mood_history().await {
                Ok(entries) => AppMessage::MoodHistoryLoaded { token, entries },
                Err(e) => {
                    warn!("[{}] mood history fetch {} failed: {}", e.error_code(), token, e);
                    AppMessage::MoodHistoryFailed {
                        token,
                        error: e.user_message(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }

    pub fn load_crisis_resources(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match client.fetch_crisis_resources().await {
                Ok(resources) => AppMessage::CrisisResourcesLoaded(resources),
                Err(e) => {
                    warn!("[{}] loading crisis resources failed: {}", e.error_code(), e);
                    AppMessage::LoadFailed {
                        source: LoadSource::CrisisResources,
                        error: e.user_message(),
                    }
                }
            };
            let _ = tx.send(message);
        });
    }

    /// Submit the mood form. Returns `false` if a submission is already in
    /// flight.
    pub fn submit_mood(&mut self) -> bool {
        let Some(submission) = self.mood.begin_submit() else {
            return false;
        };
        self.mark_dirty();

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let success = match client.submit_mood(&submission).await {
                Ok(true) => {
                    info!("mood logged at {}", submission.mood_level);
                    true
                }
                Ok(false) => {
                    warn!("mood submission rejected by backend");
                    false
                }
                Err(e) => {
                    warn!("[{}] mood submission failed: {}", e.error_code(), e);
                    false
                }
            };
            let _ = tx.send(AppMessage::MoodSubmitted { success });
        });
        true
    }
}
