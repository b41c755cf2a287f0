//! Dialog rendering helpers

pub mod board_dialogs;
pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use scroll_behavior::ScrollPosition;
