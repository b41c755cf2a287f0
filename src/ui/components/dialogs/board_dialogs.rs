use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use crate::constants::{DIALOG_TITLE_CONFIRM_DELETE, DIALOG_TITLE_NEW_EVENT};
use crate::theme::{ColorRole, Palette};
use crate::ui::layout::LayoutManager;

pub fn render_event_title_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    message: &str,
    range: &str,
    input_buffer: &str,
    cursor_position: usize,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 13, area);
    f.render_widget(Clear, dialog_area);

    let main_block = common::create_dialog_block(DIALOG_TITLE_NEW_EVENT, palette.color(ColorRole::Accent), palette);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Prompt message
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Selected range
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(palette.color(ColorRole::Text)))
        .alignment(Alignment::Left);
    let input_paragraph = common::create_input_paragraph(input_buffer, cursor_position, "Title", palette);
    let range_paragraph = common::create_selection_paragraph(range.to_string(), "When", palette);
    let instructions = common::create_instructions_paragraph(
        &[shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL],
        palette,
    );

    f.render_widget(main_block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(input_paragraph, chunks[1]);
    f.render_widget(range_paragraph, chunks[2]);
    f.render_widget(instructions, chunks[3]);
}

pub fn render_removal_confirmation_dialog(f: &mut Frame, area: Rect, palette: &Palette, message: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(DIALOG_TITLE_CONFIRM_DELETE, palette.color(ColorRole::Danger), palette);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner_area);

    let message_paragraph = Paragraph::new(format!("{}?", message))
        .style(Style::default().fg(palette.color(ColorRole::Text)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = common::create_instructions_paragraph(
        &[shortcuts::YES_DELETE, shortcuts::SEPARATOR, shortcuts::NO_KEEP],
        palette,
    );

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}
