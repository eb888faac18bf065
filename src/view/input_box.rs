//! Bordered single-line text input.

use super::styles::Palette;
use crate::state::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Text input widget.
///
/// Shows a block cursor when focused. An error, if any, is written into the
/// bottom border. Text wider than the box scrolls so the cursor stays visible.
pub struct InputBox<'a> {
    text: &'a str,
    cursor: usize,
    title: &'a str,
    focused: bool,
    show_cursor: bool,
    error: Option<String>,
    palette: &'a Palette,
}

impl<'a> InputBox<'a> {
    /// Input showing `input`'s text and cursor.
    pub fn new(input: &'a TextInput, title: &'a str, palette: &'a Palette) -> Self {
        Self::with_text(input.text(), input.cursor(), title, palette)
    }

    /// Input showing raw `text` with the cursor at char index `cursor`.
    pub fn with_text(text: &'a str, cursor: usize, title: &'a str, palette: &'a Palette) -> Self {
        Self {
            text,
            cursor,
            title,
            focused: false,
            show_cursor: true,
            error: None,
            palette,
        }
    }

    /// Draw the cursor and highlight the border.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Highlight the border only; used by choice fields.
    pub fn hide_cursor(mut self) -> Self {
        self.show_cursor = false;
        self
    }

    /// Message shown in the bottom border.
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Columns to scroll so the cursor fits in `inner_width`.
    fn scroll_offset(&self, inner_width: u16) -> u16 {
        if !(self.focused && self.show_cursor) {
            return 0;
        }
        let before: String = self.text.chars().take(self.cursor).collect();
        let cursor_column = before.width();
        let visible = usize::from(inner_width.saturating_sub(1));
        u16::try_from(cursor_column.saturating_sub(visible)).unwrap_or(u16::MAX)
    }

    fn content(&self) -> Line<'a> {
        if !(self.focused && self.show_cursor) {
            return Line::from(self.text);
        }

        let before: String = self.text.chars().take(self.cursor).collect();
        let mut after = self.text.chars().skip(self.cursor);
        let cursor_char = after.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = after.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char,
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            ),
            Span::raw(after),
        ])
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.palette.selected
        } else {
            self.palette.border
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title);
        if let Some(error) = &self.error {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {error} "),
                self.palette.error,
            )));
        }

        let offset = self.scroll_offset(area.width.saturating_sub(2));
        Paragraph::new(self.content())
            .block(block)
            .scroll((0, offset))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(widget: InputBox<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(widget, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn shows_title_and_text() {
        let palette = Palette::default();
        let input = TextInput::with_text("jazz");
        let screen = render(InputBox::new(&input, "Search", &palette));
        assert!(screen.contains("Search"));
        assert!(screen.contains("jazz"));
    }

    #[test]
    fn error_goes_into_bottom_border() {
        let palette = Palette::default();
        let input = TextInput::default();
        let screen = render(
            InputBox::new(&input, "Email", &palette).error(Some("Required".to_string())),
        );
        let last_line = screen.lines().last().unwrap();
        assert!(last_line.contains("Required"), "got {last_line:?}");
    }

    #[test]
    fn long_text_scrolls_to_the_cursor() {
        let palette = Palette::default();
        let input = TextInput::with_text("abcdefghijklmnopqrstuvwxyz0123456789");
        let screen = render(InputBox::new(&input, "Name", &palette).focused(true));
        assert!(screen.contains("0123456789"));
        assert!(!screen.contains("abc"));
    }

    #[test]
    fn unfocused_long_text_shows_the_start() {
        let palette = Palette::default();
        let input = TextInput::with_text("abcdefghijklmnopqrstuvwxyz0123456789");
        let screen = render(InputBox::new(&input, "Name", &palette));
        assert!(screen.contains("abc"));
    }

    #[test]
    fn focused_input_keeps_text_intact() {
        let palette = Palette::default();
        let input = TextInput::with_text("abc");
        let screen = render(InputBox::new(&input, "Name", &palette).focused(true));
        assert!(screen.contains("abc"));
    }
}
