//! Domain and wire types shared between the backend client, state and UI.

pub mod chat;
pub mod crisis;
pub mod mood;
pub mod resource;

pub use chat::{ChatMessage, ChatReply, ChatRequest, ChatResponse, Origin, FALLBACK_REPLY, SUGGESTIONS};
pub use crisis::{CopingStrategy, CrisisContact, CrisisResources, COPING_STRATEGIES, EMERGENCY_NUMBERS};
pub use mood::{MoodBand, MoodEntry, MoodHistoryResponse, MoodLevel, MoodSubmission};
pub use resource::{CategoriesResponse, CategoryFilter, Resource, ResourcesResponse};
