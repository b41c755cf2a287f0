use chrono::NaiveDate;
use eventboard::calendar::{CalendarEvent, CalendarOptions, CalendarWidget, Cell, Direction, ViewKind};
use eventboard::error::BoardError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn options(view: ViewKind, focus: NaiveDate, events: Vec<CalendarEvent>) -> CalendarOptions {
    CalendarOptions {
        initial_view: view,
        initial_date: focus,
        today: date(2022, 9, 28),
        editable: true,
        selectable: true,
        day_max_events: 0,
        initial_events: events,
    }
}

fn widget(view: ViewKind, events: Vec<CalendarEvent>) -> CalendarWidget {
    CalendarWidget::new(options(view, date(2022, 9, 28), events)).0
}

#[test]
fn test_new_reports_initial_set() {
    let seed = CalendarEvent::new("5123", "Timed event", "2022-09-28");
    let (calendar, set) = CalendarWidget::new(options(ViewKind::Month, date(2022, 9, 28), vec![seed.clone()]));
    assert_eq!(set.events(), &[seed]);
    assert_eq!(calendar.events().len(), 1);
}

#[test]
fn test_month_range_covers_six_weeks() {
    let calendar = widget(ViewKind::Month, Vec::new());
    assert_eq!(calendar.visible_range(), (date(2022, 8, 28), date(2022, 10, 8)));
    assert_eq!(calendar.visible_days().len(), 42);
    assert_eq!(calendar.title(), "September 2022");
}

#[test]
fn test_week_and_day_ranges() {
    let mut calendar = widget(ViewKind::Week, Vec::new());
    assert_eq!(calendar.visible_range(), (date(2022, 9, 25), date(2022, 10, 1)));
    assert_eq!(calendar.title(), "Sep 25 – Oct 1, 2022");

    calendar.set_view(ViewKind::Day);
    assert_eq!(calendar.visible_days(), vec![date(2022, 9, 28)]);
    assert_eq!(calendar.title(), "September 28, 2022");
}

#[test]
fn test_navigation() {
    let mut calendar = CalendarWidget::new(options(ViewKind::Month, date(2022, 1, 31), Vec::new())).0;
    calendar.next();
    assert_eq!(calendar.cursor().date, date(2022, 2, 28));
    calendar.prev();
    assert_eq!(calendar.cursor().date, date(2022, 1, 28));

    calendar.set_view(ViewKind::Week);
    calendar.next();
    assert_eq!(calendar.cursor().date, date(2022, 2, 4));

    calendar.set_view(ViewKind::Day);
    calendar.prev();
    assert_eq!(calendar.cursor().date, date(2022, 2, 3));

    calendar.go_today();
    assert_eq!(calendar.cursor().date, date(2022, 9, 28));
}

#[test]
fn test_month_cursor_moves_by_day_and_week() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    calendar.move_cursor(Direction::Right, false);
    assert_eq!(calendar.cursor(), Cell::day(date(2022, 9, 29)));
    calendar.move_cursor(Direction::Up, false);
    assert_eq!(calendar.cursor(), Cell::day(date(2022, 9, 22)));
    calendar.move_cursor(Direction::Down, false);
    calendar.move_cursor(Direction::Left, false);
    assert_eq!(calendar.cursor(), Cell::day(date(2022, 9, 28)));
}

#[test]
fn test_time_grid_cursor_enters_and_leaves_all_day_row() {
    let mut calendar = widget(ViewKind::Week, Vec::new());
    assert!(calendar.cursor().is_all_day());

    calendar.move_cursor(Direction::Down, false);
    assert_eq!(calendar.cursor(), Cell::slot(date(2022, 9, 28), 0));
    calendar.move_cursor(Direction::Down, false);
    assert_eq!(calendar.cursor(), Cell::slot(date(2022, 9, 28), 1));
    calendar.move_cursor(Direction::Up, false);
    calendar.move_cursor(Direction::Up, false);
    assert_eq!(calendar.cursor(), Cell::day(date(2022, 9, 28)));

    calendar.move_cursor(Direction::Down, false);
    calendar.set_view(ViewKind::Month);
    assert!(calendar.cursor().is_all_day(), "month view has no hour slots");
}

#[test]
fn test_keyboard_range_selection() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    calendar.move_cursor(Direction::Right, true);
    calendar.move_cursor(Direction::Right, true);

    let pending = calendar.pending_selection().unwrap();
    assert_eq!(pending.start(), Cell::day(date(2022, 9, 28)));
    assert!(calendar.is_highlighted(Cell::day(date(2022, 9, 29))));

    let selection = calendar.complete_selection().unwrap();
    assert_eq!(selection.start_str(), "2022-09-28");
    assert_eq!(selection.end_str(), "2022-10-01");
    assert_eq!(calendar.selection(), Some(selection));
    assert!(calendar.pending_selection().is_none());

    calendar.unselect();
    assert!(!calendar.is_highlighted(Cell::day(date(2022, 9, 29))));
}

#[test]
fn test_plain_move_drops_anchor() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    calendar.move_cursor(Direction::Right, true);
    calendar.move_cursor(Direction::Right, false);
    let selection = calendar.complete_selection().unwrap();
    assert_eq!(selection.start(), selection.end());
    assert_eq!(selection.start(), Cell::day(date(2022, 9, 30)));
}

#[test]
fn test_pointer_selection_backwards() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    calendar.begin_selection(Cell::day(date(2022, 10, 3)));
    calendar.extend_selection_to(Cell::day(date(2022, 10, 1)));
    let selection = calendar.complete_selection().unwrap();
    assert_eq!(selection.start_str(), "2022-10-01");
    assert_eq!(selection.end_str(), "2022-10-04");
}

#[test]
fn test_selection_disabled() {
    let mut opts = options(ViewKind::Month, date(2022, 9, 28), Vec::new());
    opts.selectable = false;
    let mut calendar = CalendarWidget::new(opts).0;

    calendar.begin_selection(Cell::day(date(2022, 10, 1)));
    calendar.extend_selection_to(Cell::day(date(2022, 10, 3)));
    assert_eq!(calendar.complete_selection(), None);
    assert!(!calendar.is_highlighted(Cell::day(date(2022, 10, 1))));
}

#[test]
fn test_events_at_by_view() {
    let events = vec![
        CalendarEvent::new("a", "All day", "2022-09-28"),
        CalendarEvent::new("t", "Meeting", "2022-09-28T10:00:00").with_end("2022-09-28T12:00:00"),
    ];
    let mut calendar = widget(ViewKind::Month, events);
    assert_eq!(calendar.events_at(Cell::day(date(2022, 9, 28))).len(), 2);

    calendar.set_view(ViewKind::Week);
    let all_day: Vec<&str> = calendar
        .events_at(Cell::day(date(2022, 9, 28)))
        .iter()
        .map(|i| i.event.title.as_str())
        .collect();
    assert_eq!(all_day, vec!["All day"]);
    assert_eq!(calendar.events_at(Cell::slot(date(2022, 9, 28), 11)).len(), 1);
    assert!(calendar.events_at(Cell::slot(date(2022, 9, 28), 12)).is_empty());
}

#[test]
fn test_focus_cycles_through_cursor_cell() {
    let events = vec![
        CalendarEvent::new("a", "First", "2022-09-28"),
        CalendarEvent::new("b", "Second", "2022-09-28"),
        CalendarEvent::new("c", "Elsewhere", "2022-09-29"),
    ];
    let mut calendar = widget(ViewKind::Month, events);
    let keys: Vec<_> = calendar.events().iter().map(|i| i.key).collect();

    assert_eq!(calendar.focus_next_event(), Some(keys[0]));
    assert_eq!(calendar.focus_next_event(), Some(keys[1]));
    assert_eq!(calendar.focus_next_event(), None);
    assert_eq!(calendar.focus_next_event(), Some(keys[0]));

    calendar.move_cursor(Direction::Right, false);
    assert_eq!(calendar.focused_event(), None);
}

#[test]
fn test_add_duplicate_id_keeps_both() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    let (first, _) = calendar.add_event(CalendarEvent::new("x", "X", "2022-09-28"));
    let (second, set) = calendar.add_event(CalendarEvent::new("x", "X", "2022-09-28"));
    assert_ne!(first, second);
    assert_eq!(set.events().len(), 2);

    let (removed, set) = calendar.remove_event(first).unwrap();
    assert_eq!(removed.id, "x");
    assert_eq!(set.events().len(), 1);
    assert!(calendar.event(second).is_some());
}

#[test]
fn test_remove_unknown_key() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    let (key, _) = calendar.add_event(CalendarEvent::new("x", "X", "2022-09-28"));
    calendar.remove_event(key).unwrap();
    assert!(matches!(calendar.remove_event(key), Err(BoardError::UnknownEvent(_))));
}

#[test]
fn test_move_keeps_duration_and_time() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    let (key, _) = calendar.add_event(
        CalendarEvent::new("m", "Meeting", "2022-09-28T10:00:00").with_end("2022-09-28T11:30:00"),
    );
    let set = calendar.move_event(key, 1).unwrap();
    assert_eq!(set.events()[0].start, "2022-09-29T10:00:00");
    assert_eq!(set.events()[0].end.as_deref(), Some("2022-09-29T11:30:00"));
    assert_eq!(calendar.cursor().date, date(2022, 9, 29), "cursor follows the moved event");
}

#[test]
fn test_resize_adds_missing_end() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    let (key, _) = calendar.add_event(CalendarEvent::new("a", "A", "2022-09-28"));
    let set = calendar.resize_event(key, 2).unwrap();
    assert_eq!(set.events()[0].end.as_deref(), Some("2022-10-01"));
}

#[test]
fn test_resize_cannot_end_before_start() {
    let mut calendar = widget(ViewKind::Month, Vec::new());
    let (key, _) = calendar.add_event(CalendarEvent::new("a", "A", "2022-09-28"));
    assert_eq!(calendar.resize_event(key, -1), Err(BoardError::InvalidResize("A".to_string())));
    assert_eq!(calendar.event(key).and_then(|e| e.end.clone()), None);
}

#[test]
fn test_edits_need_editable() {
    let mut opts = options(ViewKind::Month, date(2022, 9, 28), vec![CalendarEvent::new("a", "A", "2022-09-28")]);
    opts.editable = false;
    let mut calendar = CalendarWidget::new(opts).0;
    let key = calendar.events()[0].key;

    assert_eq!(calendar.move_event(key, 1), Err(BoardError::NotEditable));
    assert_eq!(calendar.resize_event(key, 1), Err(BoardError::NotEditable));
    assert_eq!(calendar.events()[0].event.start, "2022-09-28");
}

#[test]
fn test_unparseable_start_is_listed_but_not_placed() {
    let calendar = widget(ViewKind::Month, vec![CalendarEvent::new("q", "Someday", "whenever")]);
    assert_eq!(calendar.events().len(), 1);
    assert!(calendar
        .visible_days()
        .iter()
        .all(|d| calendar.events_at(Cell::day(*d)).is_empty()));
}
