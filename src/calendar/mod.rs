//! In-crate calendar widget.
//!
//! The widget owns the canonical event set and all grid state (view kind,
//! cursor, range selection, focused event). Every change to the event set
//! returns an [`EventsSet`] carrying the full set, which the board mirrors.

mod event;
mod selection;
mod view_kind;
mod widget;

pub use event::{CalendarEvent, EventTime};
pub use selection::{Cell, DateSelection};
pub use view_kind::ViewKind;
pub use widget::{CalendarOptions, CalendarWidget, Direction, EventInstance, EventsSet, InstanceKey};
