//! Core UI functionality for the Event Board.
//!
//! - [`actions`] - Action definitions and dialog kinds
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal input polling
//!
//! Components translate input into [`Action`]s; the app component applies
//! them to the board and routes the rest back through the component tree.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
