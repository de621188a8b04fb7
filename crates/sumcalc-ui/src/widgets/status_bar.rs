//! Status bar widget for displaying application state
//!
//! The [`StatusBar`] renders a three-section bar at the bottom of the
//! terminal: the calculator mode on the left, context in the centre and key
//! hints on the right.
//!
//! ```ignore
//! let status = StatusBar::new(&theme)
//!     .mode(Mode::Result)
//!     .center("Dark")
//!     .right("F1:help");
//! frame.render_widget(status, area);
//! ```

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use sumcalc_core::{Mode, Theme};

/// Status bar with left, center, and right sections
pub struct StatusBar<'a> {
    /// Left section text (the mode label)
    left: &'a str,
    /// Colour for the left section
    left_color: Color,
    center: &'a str,
    right: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar with empty sections
    pub fn new(theme: &'a Theme) -> Self {
        StatusBar {
            left: "",
            left_color: theme.colors.accent,
            center: "",
            right: "",
            theme,
        }
    }

    /// Shows a calculator mode on the left, bold and coloured by outcome.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.left = mode.label();
        self.left_color = match mode {
            Mode::Idle => self.theme.colors.accent,
            Mode::Error => self.theme.colors.error,
            Mode::Result => self.theme.colors.success,
        };
        self
    }

    /// Sets the centred context text.
    pub fn center(mut self, text: &'a str) -> Self {
        self.center = text;
        self
    }

    /// Sets the right-aligned hint text, drawn muted.
    pub fn right(mut self, text: &'a str) -> Self {
        self.right = text;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base = Style::default().bg(self.theme.colors.surface);
        buf.set_style(area, base);

        let width = area.width as usize;

        let mut left_end = 0;
        if !self.left.is_empty() {
            let text = format!(" {} ", self.left);
            let len = text.chars().count();
            if len <= width {
                let style = base.fg(self.left_color).add_modifier(Modifier::BOLD);
                buf.set_string(area.x, area.y, &text, style);
                left_end = len;
            }
        }

        let mut right_start = width;
        if !self.right.is_empty() {
            let text = format!(" {} ", self.right);
            let len = text.chars().count();
            if left_end + len <= width {
                right_start = width - len;
                let style = base.fg(self.theme.colors.muted);
                buf.set_string(area.x + right_start as u16, area.y, &text, style);
            }
        }

        // The centre only draws if it fits between the other two sections.
        if !self.center.is_empty() {
            let len = self.center.chars().count();
            let start = width.saturating_sub(len) / 2;
            if start >= left_end && start + len <= right_start {
                let style = base.fg(self.theme.colors.foreground);
                buf.set_string(area.x + start as u16, area.y, self.center, style);
            }
        }
    }
}
