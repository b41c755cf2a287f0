use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::theme::{ColorRole, Palette};
use crate::ui::components::dialogs::scroll_behavior::ScrollPosition;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation},
    Frame,
};

pub const HELP_CONTENT: &str = r"
EVENT BOARD
===========

CALENDAR NAVIGATION
-------------------
←↓↑→ / hjkl     Move the cursor
Shift+Arrows    Extend a range selection (also HJKL)
n / PageDown    Next month, week or day
p / PageUp      Previous month, week or day
t               Jump to today
m / w / d       Month, week or day view

EVENTS
------
Enter           Select the range under the cursor and name a new event
Tab             Cycle through events in the cursor cell
Enter           On a focused event: ask to delete it
] / [           Move the focused event one day later / earlier
+ / -           Make the focused event one day longer / shorter

MOUSE
-----
Press, drag, release    Select a range
Click an event          Ask to delete it
Toolbar buttons         Navigate and switch views
Wheel over sidebar      Scroll the event list

PROMPTS
-------
Enter           Save the title / confirm deletion (also y)
Esc             Cancel the title / keep the event (also n)

SIDEBAR
-------
Ctrl+↑ / Ctrl+↓ Scroll the event list

GENERAL
-------
?               Toggle this help
G               Show logs
q / Ctrl+C      Quit

Press 'Esc' or '?' to close this help
";

pub fn render_help_dialog(f: &mut Frame, area: Rect, palette: &Palette, scroll: &mut ScrollPosition) {
    render_scrollable_text(f, area, palette, DIALOG_TITLE_HELP, HELP_CONTENT, scroll);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    logger: Option<&Logger>,
    scroll: &mut ScrollPosition,
) {
    let logs = match logger {
        Some(logger) => logger.get_logs(),
        None => vec!["No logger available".to_string()],
    };

    let logs_content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_text(f, area, palette, DIALOG_TITLE_LOGS, &logs_content, scroll);
}

fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    title: &str,
    content: &str,
    scroll: &mut ScrollPosition,
) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        dialog_area.x + margin_x,
        dialog_area.y + margin_y,
        dialog_area.width.saturating_sub(margin_x * 2),
        dialog_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(palette.color(ColorRole::Accent))),
        )
        .style(
            Style::default()
                .fg(palette.color(ColorRole::Text))
                .bg(palette.color(ColorRole::Surface)),
        )
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(palette.color(ColorRole::Muted)))
            .thumb_style(Style::default().fg(palette.color(ColorRole::Text)));

        f.render_stateful_widget(scrollbar, content_area, &mut scroll.scrollbar_state);
    }
}
