//! Event Board - an interactive calendar page for the terminal
//!
//! The page shows a calendar grid next to a sidebar listing every event on
//! the calendar. Selecting a date range asks for a title and adds an event;
//! clicking an event asks whether to delete it.
//!
//! # Modules
//!
//! * [`board`] - Page state: the calendar plus the mirrored event list
//! * [`calendar`] - Calendar widget, events, selections and views
//! * [`view`] - Pure projection of board state into renderable data
//! * [`config`] - Application configuration management
//! * [`theme`] - Color palette passed into rendering
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and color helpers

/// Page state machine and mirrored event list
pub mod board;

/// Embedded calendar widget
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Typed errors for board operations
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Color roles and palettes
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// Board state projected into plain view data
pub mod view;

pub use board::{BoardMode, EventBoard, Prompt};
pub use calendar::{CalendarEvent, DateSelection};
pub use error::BoardError;
