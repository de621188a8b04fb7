//! Single-line text input with a label and placeholder
//!
//! The field only draws; editing lives in the calculator view. When the
//! text is wider than the field, the visible window follows the cursor.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use sumcalc_core::Theme;

/// Bordered input field
///
/// ```ignore
/// let field = InputField::new("Number 1:", "3.5", &theme)
///     .placeholder("Enter first number")
///     .cursor(3)
///     .focused(true);
/// let cursor = field.cursor_position(area);
/// frame.render_widget(field, area);
/// ```
pub struct InputField<'a> {
    label: &'a str,
    text: &'a str,
    placeholder: &'a str,
    /// Cursor position in characters
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, text: &'a str, theme: &'a Theme) -> Self {
        InputField {
            label,
            text,
            placeholder: "",
            cursor: text.chars().count(),
            focused: false,
            theme,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets the cursor, clamped to the text length.
    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor.min(self.text.chars().count());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'a> {
        let border_color = if self.focused {
            self.theme.colors.focus
        } else {
            self.theme.colors.muted
        };
        let mut block = Block::new()
            .title(Line::from(self.label).style(Style::default().fg(self.theme.colors.accent)))
            .border_style(Style::default().fg(border_color));
        if let Some(border_type) = self.theme.borders.border_type() {
            block = block.borders(Borders::ALL).border_type(border_type);
        }
        block
    }

    /// Screen position of the cursor when drawn into `area`.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let offset = scroll_offset(self.cursor, inner.width as usize);
        let column = (self.cursor - offset) as u16;
        Some(Position::new(inner.x + column, inner.y))
    }
}

/// First visible character so that `cursor` stays inside a window of `width`.
///
/// One column is reserved for the cursor sitting after the last character.
pub fn scroll_offset(cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    cursor.saturating_sub(width - 1)
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = if self.text.is_empty() {
            Line::from(self.placeholder).style(
                Style::default()
                    .fg(self.theme.colors.muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let offset = scroll_offset(self.cursor, inner.width as usize);
            let visible: String = self
                .text
                .chars()
                .skip(offset)
                .take(inner.width as usize)
                .collect();
            Line::from(visible).style(Style::default().fg(self.theme.colors.foreground))
        };

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        InputField::new("Number 1:", "", &theme)
            .placeholder("Enter first number")
            .render(area, &mut buf);

        assert!(row(&buf, 0).contains("Number 1:"));
        assert!(row(&buf, 1).contains("Enter first number"));
        assert_eq!(buf[(1, 1)].fg, theme.colors.muted);
    }

    #[test]
    fn test_text_replaces_placeholder() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        InputField::new("Number 2:", "42", &theme)
            .placeholder("Enter second number")
            .render(area, &mut buf);

        let text = row(&buf, 1);
        assert!(text.contains("42"));
        assert!(!text.contains("Enter"));
    }

    #[test]
    fn test_focus_changes_border_color() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 3);

        let mut plain = Buffer::empty(area);
        InputField::new("A", "", &theme).render(area, &mut plain);
        let mut focused = Buffer::empty(area);
        InputField::new("A", "", &theme)
            .focused(true)
            .render(area, &mut focused);

        assert_eq!(plain[(0, 2)].fg, theme.colors.muted);
        assert_eq!(focused[(0, 2)].fg, theme.colors.focus);
    }

    #[test]
    fn test_long_text_follows_cursor() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        InputField::new("A", "123456789", &theme).render(area, &mut buf);

        // 5 inner columns, one reserved for the trailing cursor
        assert_eq!(row(&buf, 1), "│6789 │");
    }

    #[test]
    fn test_cursor_position() {
        let theme = Theme::dark();
        let area = Rect::new(4, 2, 20, 3);

        let end = InputField::new("A", "abc", &theme);
        assert_eq!(end.cursor_position(area), Some(Position::new(8, 3)));

        let start = InputField::new("A", "abc", &theme).cursor(0);
        assert_eq!(start.cursor_position(area), Some(Position::new(5, 3)));

        let clamped = InputField::new("A", "abc", &theme).cursor(99);
        assert_eq!(clamped.cursor_position(area), Some(Position::new(8, 3)));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(9, 5), 5);
        assert_eq!(scroll_offset(3, 0), 3);
    }

    #[test]
    fn test_borderless_theme_keeps_label() {
        let mut theme = Theme::dark();
        theme.borders = sumcalc_core::BorderStyle::None;
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        InputField::new("Number 1:", "7", &theme).render(area, &mut buf);

        assert!(row(&buf, 0).contains("Number 1:"));
        assert!(row(&buf, 1).starts_with('7'));
    }

    #[test]
    fn test_zero_area() {
        let theme = Theme::dark();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        InputField::new("A", "1", &theme).render(Rect::new(0, 0, 0, 0), &mut buf);
    }
}
