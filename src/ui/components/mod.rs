//! Reusable UI components

// Component architecture
pub mod calendar_component;
pub mod dialog_component;
pub mod dialogs;
pub mod header;
pub mod scrollbar_helper;
pub mod sidebar_component;
pub mod status_bar;

// Component exports
pub use calendar_component::CalendarComponent;
pub use dialog_component::DialogComponent;
pub use header::HeaderComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::{StatusBar, StatusMessage};
