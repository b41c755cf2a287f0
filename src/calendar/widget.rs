//! The embedded calendar: canonical event set plus view and selection state.

use chrono::{Duration, NaiveDate};
use std::fmt;

use super::event::{CalendarEvent, EventTime};
use super::selection::{Cell, DateSelection};
use super::view_kind::ViewKind;
use crate::error::BoardError;
use crate::utils::datetime;

/// Identity of one event occurrence inside the widget.
///
/// Event ids may collide; instance keys never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceKey(u64);

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInstance {
    pub key: InstanceKey,
    pub event: CalendarEvent,
}

/// Full event set reported after every change to the canonical set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct EventsSet(Vec<CalendarEvent>);

impl EventsSet {
    pub fn events(&self) -> &[CalendarEvent] {
        &self.0
    }

    pub fn into_events(self) -> Vec<CalendarEvent> {
        self.0
    }
}

/// Cursor movement on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Construction options, mirroring the widget's configurable behaviors.
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    pub initial_view: ViewKind,
    pub initial_date: NaiveDate,
    pub today: NaiveDate,
    pub editable: bool,
    pub selectable: bool,
    /// Chips per month cell before "+N more"; 0 fits as many as the cell allows
    pub day_max_events: usize,
    pub initial_events: Vec<CalendarEvent>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        let today = datetime::today();
        Self {
            initial_view: ViewKind::Month,
            initial_date: today,
            today,
            editable: true,
            selectable: true,
            day_max_events: 0,
            initial_events: Vec::new(),
        }
    }
}

pub struct CalendarWidget {
    events: Vec<EventInstance>,
    next_key: u64,
    view: ViewKind,
    today: NaiveDate,
    cursor: Cell,
    anchor: Option<Cell>,
    selection: Option<DateSelection>,
    focused_event: Option<InstanceKey>,
    editable: bool,
    selectable: bool,
    day_max_events: usize,
}

impl CalendarWidget {
    /// Build the widget and report its initial event set.
    pub fn new(options: CalendarOptions) -> (Self, EventsSet) {
        let mut widget = Self {
            events: Vec::new(),
            next_key: 0,
            view: options.initial_view,
            today: options.today,
            cursor: Cell::day(options.initial_date),
            anchor: None,
            selection: None,
            focused_event: None,
            editable: options.editable,
            selectable: options.selectable,
            day_max_events: options.day_max_events,
        };
        for event in options.initial_events {
            widget.insert(event);
        }
        let initial = widget.events_set();
        (widget, initial)
    }

    pub fn events(&self) -> &[EventInstance] {
        &self.events
    }

    pub fn event(&self, key: InstanceKey) -> Option<&CalendarEvent> {
        self.events.iter().find(|i| i.key == key).map(|i| &i.event)
    }

    /// Current full set, in insertion order.
    pub fn events_set(&self) -> EventsSet {
        EventsSet(self.events.iter().map(|i| i.event.clone()).collect())
    }

    pub fn add_event(&mut self, event: CalendarEvent) -> (InstanceKey, EventsSet) {
        let key = self.insert(event);
        (key, self.events_set())
    }

    pub fn remove_event(&mut self, key: InstanceKey) -> Result<(CalendarEvent, EventsSet), BoardError> {
        let index = self
            .events
            .iter()
            .position(|i| i.key == key)
            .ok_or(BoardError::UnknownEvent(key))?;
        let removed = self.events.remove(index).event;
        if self.focused_event == Some(key) {
            self.focused_event = None;
        }
        Ok((removed, self.events_set()))
    }

    /// Drag an event by whole days, keeping its duration.
    pub fn move_event(&mut self, key: InstanceKey, days: i64) -> Result<EventsSet, BoardError> {
        let event = self.editable_event(key)?;
        let start = event
            .start_time()
            .ok_or_else(|| BoardError::UnparseableDate(event.title.clone()))?;
        let end = match &event.end {
            Some(raw) => Some(EventTime::parse(raw).ok_or_else(|| BoardError::UnparseableDate(event.title.clone()))?),
            None => None,
        };
        event.start = start.shifted(days).format();
        event.end = end.map(|end| end.shifted(days).format());
        self.cursor = Cell {
            date: self.cursor.date + Duration::days(days),
            ..self.cursor
        };
        Ok(self.events_set())
    }

    /// Move an event's end by whole days. The end must stay after the start.
    pub fn resize_event(&mut self, key: InstanceKey, days: i64) -> Result<EventsSet, BoardError> {
        let event = self.editable_event(key)?;
        let start = event
            .start_time()
            .ok_or_else(|| BoardError::UnparseableDate(event.title.clone()))?;
        let end = match event.end_time() {
            Some(end) => end,
            None if event.end.is_some() => return Err(BoardError::UnparseableDate(event.title.clone())),
            None => match start {
                EventTime::AllDay(date) => EventTime::AllDay(date + Duration::days(1)),
                EventTime::Timed(dt) => EventTime::Timed(dt + Duration::hours(1)),
            },
        };
        let new_end = end.shifted(days);
        if !ends_after(start, new_end) {
            return Err(BoardError::InvalidResize(event.title.clone()));
        }
        event.end = Some(new_end.format());
        Ok(self.events_set())
    }

    fn editable_event(&mut self, key: InstanceKey) -> Result<&mut CalendarEvent, BoardError> {
        if !self.editable {
            return Err(BoardError::NotEditable);
        }
        self.events
            .iter_mut()
            .find(|i| i.key == key)
            .map(|i| &mut i.event)
            .ok_or(BoardError::UnknownEvent(key))
    }

    fn insert(&mut self, event: CalendarEvent) -> InstanceKey {
        if self.events.iter().any(|i| i.event.id == event.id) {
            log::warn!("Calendar: event id '{}' already present, keeping both occurrences", event.id);
        }
        let key = InstanceKey(self.next_key);
        self.next_key += 1;
        self.events.push(EventInstance { key, event });
        key
    }

    // ---- view state ----

    pub fn view(&self) -> ViewKind {
        self.view
    }

    pub fn set_view(&mut self, view: ViewKind) {
        self.view = view;
        if !view.is_time_grid() {
            self.cursor = Cell::day(self.cursor.date);
        }
        self.anchor = None;
        self.focused_event = None;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn day_max_events(&self) -> usize {
        self.day_max_events
    }

    /// First and last (inclusive) visible dates.
    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        let focus = self.cursor.date;
        match self.view {
            ViewKind::Month => {
                let first = datetime::week_start(datetime::month_start(focus));
                (first, first + Duration::days(41))
            }
            ViewKind::Week => {
                let first = datetime::week_start(focus);
                (first, first + Duration::days(6))
            }
            ViewKind::Day => (focus, focus),
        }
    }

    pub fn visible_days(&self) -> Vec<NaiveDate> {
        let (first, last) = self.visible_range();
        first.iter_days().take_while(|d| *d <= last).collect()
    }

    pub fn title(&self) -> String {
        let (first, last) = self.visible_range();
        self.view.title(self.cursor.date, first, last)
    }

    pub fn prev(&mut self) {
        self.jump(-1);
    }

    pub fn next(&mut self) {
        self.jump(1);
    }

    pub fn go_today(&mut self) {
        self.cursor = Cell { date: self.today, ..self.cursor };
        self.anchor = None;
        self.focused_event = None;
    }

    fn jump(&mut self, step: i32) {
        let date = match self.view {
            ViewKind::Month => datetime::add_months(self.cursor.date, step),
            ViewKind::Week => self.cursor.date + Duration::days(7 * step as i64),
            ViewKind::Day => self.cursor.date + Duration::days(step as i64),
        };
        self.cursor = Cell { date, ..self.cursor };
        self.anchor = None;
        self.focused_event = None;
    }

    // ---- cursor and selection ----

    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Move the cursor one cell. With `extend`, grow a range from where the
    /// cursor was when extension started.
    pub fn move_cursor(&mut self, direction: Direction, extend: bool) {
        if extend && self.selectable {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        self.focused_event = None;

        let Cell { date, hour } = self.cursor;
        self.cursor = match (self.view, direction) {
            (_, Direction::Left) => Cell { date: date - Duration::days(1), hour },
            (_, Direction::Right) => Cell { date: date + Duration::days(1), hour },
            (ViewKind::Month, Direction::Up) => Cell::day(date - Duration::days(7)),
            (ViewKind::Month, Direction::Down) => Cell::day(date + Duration::days(7)),
            (_, Direction::Up) => match hour {
                None | Some(0) => Cell::day(date),
                Some(h) => Cell::slot(date, h - 1),
            },
            (_, Direction::Down) => match hour {
                None => Cell::slot(date, 0),
                Some(h) => Cell::slot(date, (h + 1).min(23)),
            },
        };
    }

    /// Start a pointer gesture on `cell`.
    pub fn begin_selection(&mut self, cell: Cell) {
        self.cursor = cell;
        self.focused_event = None;
        self.anchor = self.selectable.then_some(cell);
    }

    /// Continue a pointer gesture over `cell`.
    pub fn extend_selection_to(&mut self, cell: Cell) {
        if self.anchor.is_some() {
            self.cursor = cell;
        }
    }

    /// Finish the gesture and commit the selection highlight.
    ///
    /// Returns `None` when selection is disabled.
    pub fn complete_selection(&mut self) -> Option<DateSelection> {
        if !self.selectable {
            self.anchor = None;
            return None;
        }
        let anchor = self.anchor.take().unwrap_or(self.cursor);
        let selection = DateSelection::between(anchor, self.cursor);
        self.selection = Some(selection);
        Some(selection)
    }

    /// Range being dragged out but not yet committed.
    pub fn pending_selection(&self) -> Option<DateSelection> {
        self.anchor.map(|anchor| DateSelection::between(anchor, self.cursor))
    }

    pub fn selection(&self) -> Option<DateSelection> {
        self.selection
    }

    pub fn unselect(&mut self) {
        self.selection = None;
        self.anchor = None;
    }

    pub fn is_highlighted(&self, cell: Cell) -> bool {
        self.selection.or_else(|| self.pending_selection()).is_some_and(|s| s.contains(cell))
    }

    // ---- event lookup and focus ----

    /// Events shown in `cell` for the current view, in insertion order.
    pub fn events_at(&self, cell: Cell) -> Vec<&EventInstance> {
        self.events
            .iter()
            .filter(|i| match (self.view, cell.hour) {
                (ViewKind::Month, _) => i.event.occurs_on(cell.date),
                (_, None) => i.event.is_all_day() && i.event.occurs_on(cell.date),
                (_, Some(hour)) => i.event.occupies_hour(cell.date, hour),
            })
            .collect()
    }

    pub fn focused_event(&self) -> Option<InstanceKey> {
        self.focused_event
    }

    /// Cycle focus through the events in the cursor cell, then back to none.
    pub fn focus_next_event(&mut self) -> Option<InstanceKey> {
        let keys: Vec<InstanceKey> = self.events_at(self.cursor).iter().map(|i| i.key).collect();
        self.focused_event = match self.focused_event.and_then(|k| keys.iter().position(|x| *x == k)) {
            Some(pos) => keys.get(pos + 1).copied(),
            None => keys.first().copied(),
        };
        self.focused_event
    }

    pub fn focus_event(&mut self, key: InstanceKey) {
        if self.event(key).is_some() {
            self.focused_event = Some(key);
        }
    }
}

fn ends_after(start: EventTime, end: EventTime) -> bool {
    match (start, end) {
        (EventTime::AllDay(s), EventTime::AllDay(e)) => e > s,
        (EventTime::Timed(s), EventTime::Timed(e)) => e > s,
        (s, e) => e.date() > s.date(),
    }
}
