use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

/// Lines moved by PageUp/PageDown
const PAGE: usize = 10;

/// Scroll offset of a long dialog body plus its scrollbar state.
///
/// Offsets may run past the end while keys are handled; [`Self::clamp`] pulls
/// them back once the content and viewport sizes are known at render time.
#[derive(Debug, Default, Clone)]
pub struct ScrollPosition {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl ScrollPosition {
    /// Apply a scrolling key; returns whether the key was a scroll key.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.offset = match code {
            KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset.saturating_sub(PAGE),
            KeyCode::PageDown => self.offset.saturating_add(PAGE),
            KeyCode::Home => 0,
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        true
    }

    /// Clamp to the content and sync the scrollbar; returns the clamped offset.
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        self.offset = self.offset.min(total_lines.saturating_sub(visible_height));
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
