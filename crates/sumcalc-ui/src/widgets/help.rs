//! Key binding overlay toggled with F1

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use sumcalc_core::Theme;

use crate::renderer::centered;

/// Key and description pairs shown in the overlay.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Tab / Down", "Next field or button"),
    ("Shift+Tab / Up", "Previous field or button"),
    ("Enter", "Calculate (or press focused button)"),
    ("Space", "Press focused button"),
    ("Left / Right", "Move cursor or switch button"),
    ("Home / End", "Jump to start / end of field"),
    ("Backspace / Del", "Delete character"),
    ("Ctrl+U", "Clear focused field"),
    ("Ctrl+R", "Reset calculator"),
    ("Mouse click", "Focus field or press button"),
    ("F1 / Esc", "Close this help"),
    ("Ctrl+Q / Ctrl+C", "Quit"),
];

pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        HelpOverlay { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_width = KEY_BINDINGS
            .iter()
            .map(|(key, _)| key.chars().count())
            .max()
            .unwrap_or(0);
        let lines: Vec<Line> = KEY_BINDINGS
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{key:>key_width$}  "),
                        Style::default()
                            .fg(self.theme.colors.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*description, Style::default().fg(self.theme.colors.foreground)),
                ])
            })
            .collect();

        let popup = centered(area, 60, KEY_BINDINGS.len() as u16 + 2);
        if popup.width == 0 || popup.height == 0 {
            return;
        }

        let mut block = Block::new()
            .title(" Help ")
            .title_style(Style::default().fg(self.theme.colors.accent))
            .border_style(Style::default().fg(self.theme.colors.focus))
            .style(Style::default().bg(self.theme.colors.background));
        if let Some(border_type) = self.theme.borders.border_type() {
            block = block.borders(Borders::ALL).border_type(border_type);
        }

        Clear.render(popup, buf);
        Paragraph::new(lines).block(block).render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_binding() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme).render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        assert!(text.contains("Help"));
        for (key, description) in KEY_BINDINGS {
            assert!(text.contains(key), "missing {key}");
            assert!(text.contains(description), "missing {description}");
        }
    }

    #[test]
    fn test_tiny_area() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme).render(area, &mut buf);
    }
}
