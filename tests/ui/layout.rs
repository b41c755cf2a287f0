use eventboard::ui::LayoutManager;
use eventboard::view::LayoutMode;
use ratatui::layout::Rect;

#[test]
fn test_stacked_layout() {
    let areas = LayoutManager::board_layout(Rect::new(0, 0, 80, 40), LayoutMode::Stacked);
    assert_eq!(areas.header.height, 3);
    assert_eq!(areas.status, Rect::new(0, 39, 80, 1));
    assert_eq!(areas.sidebar.width, 80);
    assert_eq!(areas.sidebar.height, 8);
    assert_eq!(areas.calendar.y, areas.sidebar.y + areas.sidebar.height);
    assert_eq!(areas.calendar.width, 80);
}

#[test]
fn test_side_by_side_layout() {
    let areas = LayoutManager::board_layout(
        Rect::new(0, 0, 100, 40),
        LayoutMode::SideBySide { sidebar_percent: 20 },
    );
    assert_eq!(areas.sidebar.width, 20);
    assert_eq!(areas.calendar.x, 20);
    assert_eq!(areas.calendar.width, 80);
    assert_eq!(areas.sidebar.y, areas.calendar.y);
    assert_eq!(areas.sidebar.height, areas.calendar.height);
}

#[test]
fn test_month_cells() {
    let (weekdays, cells) = LayoutManager::month_cells(Rect::new(0, 0, 70, 37), 6);
    assert_eq!(weekdays.len(), 7);
    assert!(weekdays.iter().all(|r| r.height == 1));
    assert_eq!(cells.len(), 6);
    assert!(cells.iter().all(|row| row.len() == 7));
    assert_eq!(cells[0][0].x, 0);
    assert_eq!(cells[0][1].x, 10);
}

#[test]
fn test_columns_cover_area() {
    let columns = LayoutManager::columns(Rect::new(5, 0, 21, 1), 7);
    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0].x, 5);
    let last = columns[6];
    assert_eq!(last.x + last.width, 26);
}

#[test]
fn test_gutter_and_columns() {
    let (gutter, columns) = LayoutManager::gutter_and_columns(Rect::new(0, 0, 76, 1), 7);
    assert_eq!(gutter.width, 6);
    assert_eq!(columns[0].x, 6);
}

#[test]
fn test_centered_rect_lines() {
    let rect = LayoutManager::centered_rect_lines(60, 13, Rect::new(0, 0, 100, 41));
    assert_eq!(rect.height, 13);
    assert_eq!(rect.width, 60);
    assert_eq!(rect.x, 20);
}

#[test]
fn test_contains() {
    let rect = Rect::new(10, 5, 4, 2);
    assert!(LayoutManager::contains(rect, 10, 5));
    assert!(LayoutManager::contains(rect, 13, 6));
    assert!(!LayoutManager::contains(rect, 14, 6));
    assert!(!LayoutManager::contains(rect, 12, 7));
    assert!(!LayoutManager::contains(Rect::default(), 0, 0));
}
