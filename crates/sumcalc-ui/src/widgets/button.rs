//! One-line push button drawn as `[ Label ]`

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use sumcalc_core::Theme;

/// Button emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Main action, drawn in the accent colour.
    Primary,
    /// Secondary action, drawn muted.
    Secondary,
}

pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: ButtonKind, theme: &'a Theme) -> Self {
        Button {
            label,
            kind,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Columns needed to draw the button.
    pub fn width(&self) -> u16 {
        (self.label.chars().count() + 4) as u16
    }

    fn style(&self) -> Style {
        let colors = &self.theme.colors;
        if self.focused {
            return Style::default()
                .fg(colors.background)
                .bg(colors.focus)
                .add_modifier(Modifier::BOLD);
        }
        match self.kind {
            ButtonKind::Primary => Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
            ButtonKind::Secondary => Style::default().fg(colors.muted).bg(colors.surface),
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = format!("[ {} ]", self.label);
        buf.set_stringn(area.x, area.y, &text, area.width as usize, self.style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(button: Button<'_>, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);
        buf
    }

    fn text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_label_and_width() {
        let theme = Theme::dark();
        let button = Button::new("Calculate Sum", ButtonKind::Primary, &theme);
        assert_eq!(button.width(), 17);
        assert_eq!(text(&rendered(button, 17)), "[ Calculate Sum ]");
    }

    #[test]
    fn test_primary_uses_accent() {
        let theme = Theme::dark();
        let buf = rendered(Button::new("Go", ButtonKind::Primary, &theme), 6);
        assert_eq!(buf[(2, 0)].fg, theme.colors.accent);
    }

    #[test]
    fn test_secondary_uses_surface() {
        let theme = Theme::dark();
        let buf = rendered(Button::new("Reset", ButtonKind::Secondary, &theme), 9);
        assert_eq!(buf[(2, 0)].fg, theme.colors.muted);
        assert_eq!(buf[(2, 0)].bg, theme.colors.surface);
    }

    #[test]
    fn test_focus_inverts() {
        let theme = Theme::nord();
        let buf = rendered(
            Button::new("Reset", ButtonKind::Secondary, &theme).focused(true),
            9,
        );
        assert_eq!(buf[(2, 0)].bg, theme.colors.focus);
        assert!(buf[(2, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_truncates_to_area() {
        let theme = Theme::dark();
        let buf = rendered(Button::new("Calculate Sum", ButtonKind::Primary, &theme), 5);
        assert_eq!(text(&buf), "[ Cal");
    }
}
