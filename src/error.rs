//! Typed errors for board operations that are called out of order.

use thiserror::Error;

use crate::calendar::InstanceKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no prompt is open")]
    NotPrompting,

    #[error("a {0} is already open")]
    AlreadyPrompting(&'static str),

    #[error("open prompt is a {open}, not a {expected}")]
    WrongPrompt { open: &'static str, expected: &'static str },

    #[error("no event with instance key {0}")]
    UnknownEvent(InstanceKey),

    #[error("events are not editable")]
    NotEditable,

    #[error("event '{0}' has a start or end that is not a date")]
    UnparseableDate(String),

    #[error("resize would end event '{0}' at or before its start")]
    InvalidResize(String),
}
