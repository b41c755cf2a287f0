use crate::calendar::{Cell, Direction, InstanceKey, ViewKind};
use crate::view::PromptView;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Grid navigation
    MoveCursor { direction: Direction, extend: bool },
    PreviousRange,
    NextRange,
    Today,
    ChangeView(ViewKind),
    FocusNextEvent,
    SidebarScroll(i32),

    // Selection gestures
    BeginSelection(Cell),
    ExtendSelection(Cell),
    CompleteSelection,

    // Event operations
    ClickEvent(InstanceKey),
    MoveEvent { key: InstanceKey, days: i64 },
    ResizeEvent { key: InstanceKey, days: i64 },

    // Prompt resolution
    SubmitTitle(Option<String>),
    ConfirmRemoval(bool),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    EventTitle { message: String, range: String },
    RemovalConfirmation { message: String },
    Help,
    Logs,
}

impl From<PromptView> for DialogType {
    fn from(prompt: PromptView) -> Self {
        match prompt {
            PromptView::Title { message, range } => DialogType::EventTitle { message, range },
            PromptView::RemovalConfirmation { message } => DialogType::RemovalConfirmation { message },
        }
    }
}
