//! Reusable UI components.
//!
//! - `TabSelector` - Horizontal tab bar with arrow marker
//! - `DialogFrame` - Centered dialog overlay

mod dialog_frame;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use tab_selector::render_tab_selector;
