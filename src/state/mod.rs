//! Per-tab state containers.
//!
//! Each container owns its tab's data and exposes explicit mutation
//! methods; `App` composes them and is the only caller.

pub mod chat;
pub mod crisis;
pub mod input;
pub mod mood;
pub mod resources;
pub mod sequence;
pub mod session;

pub use chat::{ChatOutcome, ChatState, PendingTurn};
pub use crisis::CrisisState;
pub use input::TextInput;
pub use mood::MoodState;
pub use resources::ResourcesState;
pub use sequence::{RequestSequence, RequestToken};
pub use session::{SessionState, SessionUpdate};
