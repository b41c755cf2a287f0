use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use eventboard::board::{EventBoard, Prompt};
use eventboard::calendar::{CalendarOptions, ViewKind};
use eventboard::logger::Logger;
use eventboard::ui::components::StatusMessage;
use eventboard::ui::core::actions::DialogType;
use eventboard::ui::core::event_handler::EventType;
use eventboard::ui::AppComponent;
use eventboard::view::ViewConfig;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn app() -> AppComponent {
    let board = EventBoard::mount(CalendarOptions {
        initial_view: ViewKind::Month,
        initial_date: date(2022, 9, 28),
        today: date(2022, 9, 28),
        editable: true,
        selectable: true,
        day_max_events: 0,
        initial_events: vec![EventBoard::seed_event()],
    });
    AppComponent::new(board, ViewConfig::default(), true, Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

fn press_with(app: &mut AppComponent, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers))).unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Move from Sep 28 to Oct 1 and stretch the selection to Oct 3
fn select_trip_range(app: &mut AppComponent) {
    for _ in 0..3 {
        press(app, KeyCode::Right);
    }
    press_with(app, KeyCode::Right, KeyModifiers::SHIFT);
    press_with(app, KeyCode::Right, KeyModifiers::SHIFT);
    press(app, KeyCode::Enter);
}

#[test]
fn test_create_and_delete_with_keyboard() {
    let mut app = app();

    select_trip_range(&mut app);
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::EventTitle { .. })));
    assert!(matches!(app.board().prompt(), Some(Prompt::Title { .. })));

    // letters reach the dialog, not the global key map
    type_text(&mut app, "Trip q");
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);

    assert!(!app.dialog().is_visible());
    let ids: Vec<&str> = app.board().events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["5123", "2022-10-01-Trip"]);
    assert_eq!(app.board().events()[1].end.as_deref(), Some("2022-10-04"));
    assert_eq!(app.status(), Some(&StatusMessage::Info("Added 'Trip'".to_string())));

    // cursor rests on Oct 3, which the trip covers
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::RemovalConfirmation {
            message: "Are you sure you want to delete the event 'Trip'".to_string()
        })
    );

    press(&mut app, KeyCode::Char('y'));
    assert!(!app.dialog().is_visible());
    assert_eq!(app.board().events().len(), 1);
    assert_eq!(app.status(), Some(&StatusMessage::Info("Deleted 'Trip'".to_string())));
}

#[test]
fn test_escape_cancels_title() {
    let mut app = app();
    select_trip_range(&mut app);
    type_text(&mut app, "Nope");
    press(&mut app, KeyCode::Esc);

    assert!(!app.dialog().is_visible());
    assert!(!app.board().is_prompting());
    assert_eq!(app.board().events().len(), 1);
    assert!(app.board().calendar().selection().is_none());
    assert_eq!(app.status(), Some(&StatusMessage::Info("No event added".to_string())));
}

#[test]
fn test_declining_removal_keeps_event() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.board().prompt(), Some(Prompt::RemovalConfirmation { .. })));

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.board().events().len(), 1);
    assert_eq!(app.status(), Some(&StatusMessage::Info("Event kept".to_string())));
}

#[test]
fn test_move_event_from_keyboard() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.board().events()[0].start, "2022-09-29");

    // focus follows the event, so resizing hits the same one
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.board().events()[0].end.as_deref(), Some("2022-10-01"));
}

#[test]
fn test_edit_without_focus_does_nothing() {
    let mut app = app();
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.board().events()[0].start, "2022-09-28");
    assert!(app.status().is_none());
}

#[test]
fn test_navigation_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.board().calendar().title(), "October 2022");
    press(&mut app, KeyCode::Char('w'));
    assert_eq!(app.board().calendar().view(), ViewKind::Week);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.board().calendar().cursor().date, date(2022, 9, 28));
}

#[test]
fn test_help_and_logs_dialogs() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Help));

    // q closes the dialog instead of quitting
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog().dialog_type, Some(DialogType::Logs));
    press(&mut app, KeyCode::Esc);
    assert!(!app.dialog().is_visible());
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
}

#[test]
fn test_refused_edit_sets_error_status() {
    let board = EventBoard::mount(CalendarOptions {
        initial_view: ViewKind::Month,
        initial_date: date(2022, 9, 28),
        today: date(2022, 9, 28),
        editable: false,
        selectable: true,
        day_max_events: 0,
        initial_events: vec![EventBoard::seed_event()],
    });
    let mut app = AppComponent::new(board, ViewConfig::default(), true, Logger::new());
    let key = app.board().calendar().events()[0].key;

    app.handle_app_action(eventboard::ui::core::actions::Action::MoveEvent { key, days: 1 });
    assert!(matches!(app.status(), Some(StatusMessage::Error(_))));
    assert_eq!(app.board().events()[0].start, "2022-09-28");
}
