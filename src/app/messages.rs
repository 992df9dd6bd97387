//! AppMessage enum for async communication within the application.

use crate::models::{CategoryFilter, CrisisResources, MoodEntry, Resource};
use crate::state::{ChatOutcome, RequestToken};

/// Which background load a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Categories,
    CrisisResources,
}

impl std::fmt::Display for LoadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LoadSource::Categories => "categories",
            LoadSource::CrisisResources => "crisis resources",
        };
        f.write_str(name)
    }
}

/// Results sent back from spawned request tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Health probe finished
    HealthChecked(bool),
    /// Resource list fetched for the request holding `token`
    ResourcesLoaded {
        token: RequestToken,
        resources: Vec<Resource>,
    },
    /// Resource fetch for `token` failed
    ResourcesFailed { token: RequestToken, error: String },
    /// Category filters fetched, `All` first
    CategoriesLoaded(Vec<CategoryFilter>),
    /// Mood history fetched for the request holding `token`
    MoodHistoryLoaded {
        token: RequestToken,
        entries: Vec<MoodEntry>,
    },
    /// Mood history fetch for `token` failed
    MoodHistoryFailed { token: RequestToken, error: String },
    /// Crisis contacts and steps fetched
    CrisisResourcesLoaded(CrisisResources),
    /// Categories or crisis content failed to load
    LoadFailed { source: LoadSource, error: String },
    /// The in-flight chat turn settled
    ChatSettled(ChatOutcome),
    /// Mood submission finished; `false` covers transport errors and non-2xx
    MoodSubmitted { success: bool },
}
