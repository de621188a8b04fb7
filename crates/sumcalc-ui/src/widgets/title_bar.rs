//! Title bar across the top of the screen

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use sumcalc_core::Theme;

/// Application name on the left, theme name on the right.
pub struct TitleBar<'a> {
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(title: &'a str, theme: &'a Theme) -> Self {
        TitleBar { title, theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(self.theme.colors.background));

        let title = format!(" {} ", self.title);
        let style = Style::default()
            .fg(self.theme.colors.accent)
            .bg(self.theme.colors.background)
            .add_modifier(Modifier::BOLD);
        let (end_x, _) = buf.set_stringn(area.x, area.y, &title, area.width as usize, style);

        let theme_name = format!(" {} ", self.theme.name);
        let name_len = theme_name.chars().count() as u16;
        if end_x + name_len <= area.right() {
            buf.set_string(
                area.right() - name_len,
                area.y,
                &theme_name,
                Style::default()
                    .fg(self.theme.colors.muted)
                    .bg(self.theme.colors.background),
            );
        }
    }
}
