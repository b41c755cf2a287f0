use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use eventboard::theme::Palette;
use eventboard::ui::components::SidebarComponent;
use eventboard::ui::core::{Action, Component};
use eventboard::view::{SidebarRow, SidebarView};
use ratatui::{backend::TestBackend, Terminal};

fn sidebar_view(count: usize) -> SidebarView {
    SidebarView {
        title: "Events".to_string(),
        rows: (0..count)
            .map(|i| SidebarRow {
                id: format!("e{}", i),
                title: format!("Event {}", i),
                date_label: "Oct 1, 2022".to_string(),
            })
            .collect(),
    }
}

/// Sidebar drawn into a 30x12 terminal: five two-line rows fit
fn rendered_sidebar(count: usize) -> (SidebarComponent, Terminal<TestBackend>) {
    let mut sidebar = SidebarComponent::new();
    sidebar.update_data(sidebar_view(count), Palette::default());
    let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            sidebar.render(f, area);
        })
        .unwrap();
    (sidebar, terminal)
}

fn wheel(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_ctrl_arrows_scroll() {
    let (mut sidebar, _) = rendered_sidebar(8);
    assert_eq!(sidebar.row_count(), 8);

    let action = sidebar.handle_key_events(KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL));
    assert_eq!(action, Action::SidebarScroll(1));
    assert_eq!(sidebar.update(action), Action::None);
    assert_eq!(sidebar.scroll_offset(), 1);

    // plain arrows belong to the grid
    assert_eq!(sidebar.handle_key_events(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)), Action::None);
}

#[test]
fn test_scroll_is_clamped() {
    let (mut sidebar, _) = rendered_sidebar(8);
    for _ in 0..10 {
        sidebar.update(Action::SidebarScroll(1));
    }
    assert_eq!(sidebar.scroll_offset(), 3);

    sidebar.update(Action::SidebarScroll(-10));
    assert_eq!(sidebar.scroll_offset(), 0);
}

#[test]
fn test_short_list_does_not_scroll() {
    let (mut sidebar, _) = rendered_sidebar(2);
    sidebar.update(Action::SidebarScroll(1));
    assert_eq!(sidebar.scroll_offset(), 0);
}

#[test]
fn test_wheel_only_inside_area() {
    let (mut sidebar, _) = rendered_sidebar(8);
    assert_eq!(sidebar.handle_mouse(wheel(MouseEventKind::ScrollDown, 5, 5)), Action::SidebarScroll(1));
    assert_eq!(sidebar.handle_mouse(wheel(MouseEventKind::ScrollDown, 50, 5)), Action::None);
}

#[test]
fn test_other_actions_pass_through() {
    let mut sidebar = SidebarComponent::new();
    assert_eq!(sidebar.update(Action::Today), Action::Today);
}

#[test]
fn test_rows_are_drawn() {
    let (_, terminal) = rendered_sidebar(1);
    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(text.contains("Event 0"));
    assert!(text.contains("Oct 1, 2022"));
    assert!(text.contains("Events (1)"));
}
