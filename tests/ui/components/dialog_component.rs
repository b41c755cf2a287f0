use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use eventboard::logger::Logger;
use eventboard::ui::components::DialogComponent;
use eventboard::ui::core::{Action, Component, DialogType};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn title_dialog() -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::EventTitle {
        message: "Please enter a new title for your event".to_string(),
        range: "2022-10-01 → 2022-10-04".to_string(),
    }));
    dialog
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_title_input_submits_buffer() {
    let mut dialog = title_dialog();
    assert!(dialog.is_visible());
    assert!(dialog.is_prompt());

    type_text(&mut dialog, "Trip");
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::SubmitTitle(Some("Trip".to_string()))
    );
}

#[test]
fn test_empty_submit_is_some_empty() {
    let mut dialog = title_dialog();
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::SubmitTitle(Some(String::new()))
    );
}

#[test]
fn test_escape_cancels_title() {
    let mut dialog = title_dialog();
    type_text(&mut dialog, "abc");
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::SubmitTitle(None));
}

#[test]
fn test_cursor_editing_handles_multibyte_chars() {
    let mut dialog = title_dialog();
    type_text(&mut dialog, "café");
    dialog.handle_key_events(key(KeyCode::Left));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "caé");
    assert_eq!(dialog.cursor_position, 2);

    dialog.handle_key_events(key(KeyCode::Home));
    type_text(&mut dialog, "ô");
    assert_eq!(dialog.input_buffer, "ôcaé");

    dialog.handle_key_events(key(KeyCode::Delete));
    assert_eq!(dialog.input_buffer, "ôaé");

    dialog.handle_key_events(key(KeyCode::End));
    assert_eq!(dialog.cursor_position, 3);
    dialog.handle_key_events(key(KeyCode::Right));
    assert_eq!(dialog.cursor_position, 3, "cursor stops at the end");
}

#[test]
fn test_showing_a_dialog_clears_old_input() {
    let mut dialog = title_dialog();
    type_text(&mut dialog, "stale");
    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());

    let mut dialog_again = dialog;
    dialog_again.update(Action::ShowDialog(DialogType::EventTitle {
        message: "Please enter a new title for your event".to_string(),
        range: "2022-10-05 → 2022-10-06".to_string(),
    }));
    assert!(dialog_again.input_buffer.is_empty());
    assert_eq!(dialog_again.cursor_position, 0);
}

#[test]
fn test_removal_confirmation_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::RemovalConfirmation {
        message: "Are you sure you want to delete the event 'Trip'".to_string(),
    }));
    assert!(dialog.is_prompt());

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::ConfirmRemoval(true));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::ConfirmRemoval(true));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::ConfirmRemoval(false));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::ConfirmRemoval(false));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
}

#[test]
fn test_help_dialog_closes() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(!dialog.is_prompt());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Down)), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
}

#[test]
fn test_dialogs_render() {
    let logger = Logger::new();
    logger.log("Board mounted with 1 event(s)".to_string());

    let mut dialog = title_dialog();
    dialog.set_logger(logger);
    type_text(&mut dialog, "Trip");

    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            dialog.render(f, area);
        })
        .unwrap();
    let text = buffer_text(&terminal);
    assert!(text.contains("Please enter a new title for your event"));
    assert!(text.contains("Trip"));

    dialog.update(Action::ShowDialog(DialogType::Logs));
    terminal
        .draw(|f| {
            let area = f.area();
            dialog.render(f, area);
        })
        .unwrap();
    assert!(buffer_text(&terminal).contains("Board mounted"));
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
