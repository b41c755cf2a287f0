//! The Event Board: calendar widget plus the mirrored event list.
//!
//! The board is the authoritative holder of page state. The calendar widget
//! owns the canonical event set and reports the full set after every change;
//! the board replaces its mirrored list with each report. Rendering reads the
//! mirrored list only (see [`crate::view::BoardView::project`]).
//!
//! The board is a two-state machine. Selecting a range or clicking an event
//! opens a prompt; resolving the prompt always returns to idle.

use crate::calendar::{CalendarEvent, CalendarOptions, CalendarWidget, DateSelection, EventsSet, InstanceKey};
use crate::constants::{SEED_EVENT_DATE, SEED_EVENT_ID, SEED_EVENT_TITLE};
use crate::error::BoardError;

/// A prompt the board is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Ask for the title of an event covering `selection`
    Title { selection: DateSelection },
    /// Ask whether to remove the clicked event
    RemovalConfirmation { key: InstanceKey, title: String },
}

impl Prompt {
    fn kind(&self) -> &'static str {
        match self {
            Prompt::Title { .. } => "title prompt",
            Prompt::RemovalConfirmation { .. } => "removal confirmation",
        }
    }

    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Prompt::Title { .. } => "Please enter a new title for your event".to_string(),
            Prompt::RemovalConfirmation { title, .. } => {
                format!("Are you sure you want to delete the event '{}'", title)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardMode {
    #[default]
    Idle,
    Prompting(Prompt),
}

pub struct EventBoard {
    calendar: CalendarWidget,
    mirrored: Vec<CalendarEvent>,
    mode: BoardMode,
}

impl EventBoard {
    /// Mount the board with the given calendar options.
    pub fn mount(options: CalendarOptions) -> Self {
        let (calendar, initial) = CalendarWidget::new(options);
        let mut board = Self {
            calendar,
            mirrored: Vec::new(),
            mode: BoardMode::Idle,
        };
        board.on_events_set(initial);
        log::info!("Board: mounted with {} event(s)", board.mirrored.len());
        board
    }

    /// The single event every board starts with.
    pub fn seed_event() -> CalendarEvent {
        CalendarEvent::new(SEED_EVENT_ID, SEED_EVENT_TITLE, SEED_EVENT_DATE)
    }

    /// Mirrored event list, in the order the calendar reported it.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.mirrored
    }

    pub fn mode(&self) -> &BoardMode {
        &self.mode
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        match &self.mode {
            BoardMode::Idle => None,
            BoardMode::Prompting(prompt) => Some(prompt),
        }
    }

    pub fn is_prompting(&self) -> bool {
        matches!(self.mode, BoardMode::Prompting(_))
    }

    pub fn calendar(&self) -> &CalendarWidget {
        &self.calendar
    }

    /// Grid navigation and selection gestures. Event-set changes must go
    /// through the board so the mirror stays in sync.
    pub fn calendar_mut(&mut self) -> &mut CalendarWidget {
        &mut self.calendar
    }

    /// Replace the mirrored list with the full set the calendar reported.
    pub fn on_events_set(&mut self, set: EventsSet) {
        let events = set.into_events();
        if events != self.mirrored {
            log::debug!("Board: mirrored list {} -> {} event(s)", self.mirrored.len(), events.len());
        }
        self.mirrored = events;
    }

    /// A range was selected on the grid: ask for a title.
    pub fn select_range(&mut self, selection: DateSelection) -> Result<(), BoardError> {
        self.ensure_idle()?;
        log::info!(
            "Board: range selected {} .. {} (exclusive)",
            selection.start_str(),
            selection.end_str()
        );
        self.mode = BoardMode::Prompting(Prompt::Title { selection });
        Ok(())
    }

    /// Resolve the title prompt. `None` means the prompt was cancelled.
    ///
    /// The selection highlight is cleared whatever the outcome. A non-empty
    /// title adds one event; returns the event added, if any.
    pub fn submit_title(&mut self, title: Option<&str>) -> Result<Option<CalendarEvent>, BoardError> {
        let selection = match &self.mode {
            BoardMode::Prompting(Prompt::Title { selection }) => *selection,
            BoardMode::Prompting(open) => return Err(wrong_prompt(open, "title prompt")),
            BoardMode::Idle => return Err(BoardError::NotPrompting),
        };
        self.mode = BoardMode::Idle;
        self.calendar.unselect();

        let title = match title {
            Some(title) if !title.is_empty() => title,
            _ => {
                log::info!("Board: title prompt cancelled, nothing added");
                return Ok(None);
            }
        };

        let event = CalendarEvent::new(format!("{}-{}", selection.date_str(), title), title, selection.start_str())
            .with_end(selection.end_str());
        log::info!("Board: adding event '{}' ({})", event.title, event.id);
        let (_, set) = self.calendar.add_event(event.clone());
        self.on_events_set(set);
        Ok(Some(event))
    }

    /// An event chip was clicked: ask whether to remove it.
    pub fn click_event(&mut self, key: InstanceKey) -> Result<(), BoardError> {
        self.ensure_idle()?;
        let title = self
            .calendar
            .event(key)
            .map(|e| e.title.clone())
            .ok_or(BoardError::UnknownEvent(key))?;
        log::info!("Board: event '{}' clicked", title);
        self.mode = BoardMode::Prompting(Prompt::RemovalConfirmation { key, title });
        Ok(())
    }

    /// Resolve the removal confirmation; returns the removed event, if any.
    pub fn confirm_removal(&mut self, accepted: bool) -> Result<Option<CalendarEvent>, BoardError> {
        let key = match &self.mode {
            BoardMode::Prompting(Prompt::RemovalConfirmation { key, .. }) => *key,
            BoardMode::Prompting(open) => return Err(wrong_prompt(open, "removal confirmation")),
            BoardMode::Idle => return Err(BoardError::NotPrompting),
        };
        self.mode = BoardMode::Idle;
        if !accepted {
            log::info!("Board: removal declined");
            return Ok(None);
        }
        let (removed, set) = self.calendar.remove_event(key)?;
        log::info!("Board: removed event '{}' ({})", removed.title, removed.id);
        self.on_events_set(set);
        Ok(Some(removed))
    }

    /// Drag an event by whole days.
    pub fn move_event(&mut self, key: InstanceKey, days: i64) -> Result<(), BoardError> {
        self.ensure_idle()?;
        let set = self.calendar.move_event(key, days)?;
        log::info!("Board: moved event {} by {} day(s)", key, days);
        self.on_events_set(set);
        Ok(())
    }

    /// Change an event's end by whole days.
    pub fn resize_event(&mut self, key: InstanceKey, days: i64) -> Result<(), BoardError> {
        self.ensure_idle()?;
        let set = self.calendar.resize_event(key, days)?;
        log::info!("Board: resized event {} by {} day(s)", key, days);
        self.on_events_set(set);
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), BoardError> {
        match &self.mode {
            BoardMode::Idle => Ok(()),
            BoardMode::Prompting(prompt) => Err(BoardError::AlreadyPrompting(prompt.kind())),
        }
    }
}

fn wrong_prompt(open: &Prompt, expected: &'static str) -> BoardError {
    BoardError::WrongPrompt {
        open: open.kind(),
        expected,
    }
}

impl Default for EventBoard {
    fn default() -> Self {
        Self::mount(CalendarOptions {
            initial_events: vec![Self::seed_event()],
            ..CalendarOptions::default()
        })
    }
}
