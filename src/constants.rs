//! Constants used throughout the application
//!
//! This module centralizes UI text, the seeded event and layout defaults.

// Seeded event present when the board first mounts
pub const SEED_EVENT_ID: &str = "5123";
pub const SEED_EVENT_TITLE: &str = "Timed event";
pub const SEED_EVENT_DATE: &str = "2022-09-28";

// Page header
pub const PAGE_TITLE: &str = "Calendar";
pub const PAGE_SUBTITLE: &str = "Full Calendar Interactive Page";
pub const SIDEBAR_TITLE: &str = "Events";

// Dialog titles
pub const DIALOG_TITLE_NEW_EVENT: &str = "📅 New Event";
pub const DIALOG_TITLE_CONFIRM_DELETE: &str = "⚠️  Confirm Delete";
pub const DIALOG_TITLE_HELP: &str = "❓ Keys - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Default terminal width (columns) at which sidebar and grid sit side by side
pub const MEDIUM_BREAKPOINT_DEFAULT: u16 = 100;
/// Default sidebar share of the width in side-by-side layout
pub const SIDEBAR_DEFAULT_PERCENT: u16 = 20;
/// Minimum sidebar share in side-by-side layout
pub const SIDEBAR_MIN_PERCENT: u16 = 10;
/// Maximum sidebar share in side-by-side layout
pub const SIDEBAR_MAX_PERCENT: u16 = 50;
/// Height of the sidebar when stacked above the grid
pub const STACKED_SIDEBAR_HEIGHT: u16 = 8;
/// Height of the page header banner
pub const HEADER_HEIGHT: u16 = 3;
/// Width of the hour gutter in time-grid views
pub const HOUR_GUTTER_WIDTH: u16 = 6;

/// Maximum in-memory log entries kept for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 500;
