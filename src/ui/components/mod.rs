//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal tab row used by the navigation bar and the
//!   alert filter chips
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use tab_selector::{render_tab_selector, TabItem};
