//! Utility modules for the Event Board.
//!
//! - [`datetime`] - Date parsing, short-date formatting and calendar arithmetic
//! - [`color`] - Hex color parsing for palette overrides

pub mod color;
pub mod datetime;
