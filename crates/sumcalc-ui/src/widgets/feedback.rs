//! Feedback region under the buttons
//!
//! Shows exactly one of: a flagged validation error, the computed result
//! with its restatement, or an idle hint.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use sumcalc_core::{Mode, Snapshot, Theme};

/// Marker drawn in front of validation errors.
pub const WARNING_MARKER: &str = "⚠";

/// Hint shown while there is nothing to report.
pub const IDLE_HINT: &str = "Press Enter or Calculate Sum to add the numbers";

pub struct Feedback<'a> {
    snapshot: &'a Snapshot,
    theme: &'a Theme,
}

impl<'a> Feedback<'a> {
    pub fn new(snapshot: &'a Snapshot, theme: &'a Theme) -> Self {
        Feedback { snapshot, theme }
    }

    fn framed(&self, color: Color) -> Block<'a> {
        let mut block = Block::new().border_style(Style::default().fg(color));
        if let Some(border_type) = self.theme.borders.border_type() {
            block = block.borders(Borders::ALL).border_type(border_type);
        }
        block
    }
}

impl Widget for Feedback<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let colors = &self.theme.colors;

        let (block, lines) = match self.snapshot.mode() {
            Mode::Error => {
                let message = self.snapshot.error_message().unwrap_or_default();
                let line = Line::from(vec![
                    Span::raw(format!("{WARNING_MARKER} ")),
                    Span::raw(message),
                ])
                .style(Style::default().fg(colors.error).add_modifier(Modifier::BOLD));
                (Some(self.framed(colors.error)), vec![line])
            }
            Mode::Result => {
                let value = self.snapshot.result_text().unwrap_or_default();
                let details = self.snapshot.summary().unwrap_or_default();
                let lines = vec![
                    Line::from("Result:").style(Style::default().fg(colors.muted)),
                    Line::from(value).style(
                        Style::default()
                            .fg(colors.success)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::from(details).style(Style::default().fg(colors.muted)),
                ];
                (Some(self.framed(colors.success)), lines)
            }
            Mode::Idle => {
                let line = Line::from(IDLE_HINT).style(
                    Style::default()
                        .fg(colors.muted)
                        .add_modifier(Modifier::ITALIC),
                );
                (None, vec![line])
            }
        };

        let mut paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        if let Some(block) = block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
