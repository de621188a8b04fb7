//! The calculator card
//!
//! [`CalculatorView`] owns a [`Calculator`] and keeps a receiver on its
//! snapshot channel. Input mutates the calculator; drawing only reads the
//! latest snapshot, so what is on screen is always the state after the most
//! recent transition.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use sumcalc_core::{Calculator, Component, Message, Mode, Operand, SnapshotReceiver, Theme};

use crate::renderer::CardLayout;
use crate::widgets::{Button, ButtonKind, Feedback, InputField};

/// Card title.
pub const TITLE: &str = "Sum Calculator";
/// Line under the card title.
pub const SUBTITLE: &str = "Enter two numbers to calculate their sum";

/// Focusable parts of the card, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FieldA,
    FieldB,
    Calculate,
    Reset,
}

impl Focus {
    const RING: [Focus; 4] = [Focus::FieldA, Focus::FieldB, Focus::Calculate, Focus::Reset];

    fn index(self) -> usize {
        match self {
            Focus::FieldA => 0,
            Focus::FieldB => 1,
            Focus::Calculate => 2,
            Focus::Reset => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.index() + Self::RING.len() - 1) % Self::RING.len()]
    }

    /// The operand edited while this part has focus.
    pub fn operand(self) -> Option<Operand> {
        match self {
            Focus::FieldA => Some(Operand::A),
            Focus::FieldB => Some(Operand::B),
            Focus::Calculate | Focus::Reset => None,
        }
    }
}

/// Interactive calculator card.
pub struct CalculatorView {
    calculator: Calculator,
    snapshot: SnapshotReceiver,
    focus: Focus,
    /// Cursor per operand, in characters
    cursors: [usize; 2],
    focused: bool,
    theme: Theme,
    /// Layout from the last draw, used for mouse hit testing
    last_layout: Cell<Option<CardLayout>>,
}

impl CalculatorView {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let calculator = Calculator::new();
        let snapshot = calculator.subscribe();
        CalculatorView {
            calculator,
            snapshot,
            focus: Focus::default(),
            cursors: [0; 2],
            focused: true,
            theme,
            last_layout: Cell::new(None),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn focus_target(&self) -> Focus {
        self.focus
    }

    /// Cursor of an operand field, in characters.
    pub fn cursor(&self, operand: Operand) -> usize {
        self.cursors[slot(operand)]
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus {
            tracing::trace!(from = ?self.focus, to = ?focus, "focus moved");
            self.focus = focus;
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => return Some(Message::FocusNext),
            KeyCode::BackTab | KeyCode::Up => return Some(Message::FocusPrev),
            _ => {}
        }

        match self.focus.operand() {
            Some(operand) => {
                self.edit_field(operand, key);
                None
            }
            None => self.press_button(key),
        }
    }

    fn press_button(&mut self, key: &KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.activate()),
            KeyCode::Left | KeyCode::Right => {
                let other = match self.focus {
                    Focus::Calculate => Focus::Reset,
                    _ => Focus::Calculate,
                };
                self.set_focus(other);
                None
            }
            _ => None,
        }
    }

    fn activate(&self) -> Message {
        match self.focus {
            Focus::Reset => Message::Reset,
            _ => Message::Compute,
        }
    }

    fn edit_field(&mut self, operand: Operand, key: &KeyEvent) {
        if self.calculator.trigger_on_enter(key) {
            return;
        }

        let text = self.calculator.operand(operand).to_string();
        let len = text.chars().count();
        let cursor = self.cursors[slot(operand)].min(len);

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        let (new_text, new_cursor) = match key.code {
            KeyCode::Char('u') if ctrl => (Some(String::new()), 0),
            KeyCode::Char(c) if !ctrl && !alt => {
                let mut edited = text;
                edited.insert(byte_offset(&edited, cursor), c);
                (Some(edited), cursor + 1)
            }
            KeyCode::Backspace if cursor > 0 => {
                let mut edited = text;
                edited.remove(byte_offset(&edited, cursor - 1));
                (Some(edited), cursor - 1)
            }
            KeyCode::Delete if cursor < len => {
                let mut edited = text;
                edited.remove(byte_offset(&edited, cursor));
                (Some(edited), cursor)
            }
            KeyCode::Left => (None, cursor.saturating_sub(1)),
            KeyCode::Right => (None, (cursor + 1).min(len)),
            KeyCode::Home => (None, 0),
            KeyCode::End => (None, len),
            _ => (None, cursor),
        };

        self.cursors[slot(operand)] = new_cursor;
        if let Some(edited) = new_text {
            self.calculator.edit(operand, edited);
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> Option<Message> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let layout = self.last_layout.get()?;
        let at = Position::new(mouse.column, mouse.row);

        let target = [
            (layout.field_a, Focus::FieldA),
            (layout.field_b, Focus::FieldB),
            (layout.calculate, Focus::Calculate),
            (layout.reset, Focus::Reset),
        ]
        .into_iter()
        .find(|(area, _)| area.contains(at))
        .map(|(_, focus)| focus)?;

        self.set_focus(target);
        match target {
            Focus::Calculate | Focus::Reset => Some(self.activate()),
            Focus::FieldA | Focus::FieldB => None,
        }
    }

    fn card_block(&self) -> Block<'static> {
        let colors = &self.theme.colors;
        let mut block = Block::new()
            .title(format!(" {TITLE} "))
            .title_style(
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(colors.accent))
            .style(Style::default().bg(colors.background).fg(colors.foreground));
        if let Some(border_type) = self.theme.borders.border_type() {
            block = block.borders(Borders::ALL).border_type(border_type);
        }
        block
    }
}

fn slot(operand: Operand) -> usize {
    match operand {
        Operand::A => 0,
        Operand::B => 1,
    }
}

/// Byte index of the `index`th character, or the end of `text`.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

impl Component for CalculatorView {
    fn title(&self) -> &str {
        TITLE
    }

    fn mode(&self) -> Mode {
        self.snapshot.borrow().mode()
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let layout = CardLayout::new(area);
        self.last_layout.set(Some(layout));

        let snapshot = self.snapshot.borrow().clone();
        let theme = &self.theme;

        frame.render_widget(self.card_block(), layout.card);
        frame.render_widget(
            Paragraph::new(SUBTITLE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.colors.muted)),
            layout.subtitle,
        );

        for (operand, area, text) in [
            (Operand::A, layout.field_a, snapshot.operand_a.as_str()),
            (Operand::B, layout.field_b, snapshot.operand_b.as_str()),
        ] {
            let has_focus = self.focused && self.focus.operand() == Some(operand);
            let field = InputField::new(operand.label(), text, theme)
                .placeholder(operand.placeholder())
                .cursor(self.cursors[slot(operand)])
                .focused(has_focus);
            if has_focus {
                if let Some(position) = field.cursor_position(area) {
                    frame.set_cursor_position(position);
                }
            }
            frame.render_widget(field, area);
        }

        frame.render_widget(
            Button::new("Calculate Sum", ButtonKind::Primary, theme)
                .focused(self.focused && self.focus == Focus::Calculate),
            layout.calculate,
        );
        frame.render_widget(
            Button::new("Reset", ButtonKind::Secondary, theme)
                .focused(self.focused && self.focus == Focus::Reset),
            layout.reset,
        );

        frame.render_widget(Feedback::new(&snapshot, theme), layout.feedback);
    }

    fn handle_message(&mut self, message: &Message) -> Option<Message> {
        match message {
            Message::Compute => {
                self.calculator.compute();
                None
            }
            Message::Reset => {
                self.calculator.reset();
                self.cursors = [0; 2];
                self.set_focus(Focus::FieldA);
                None
            }
            Message::Edit { operand, text } => {
                self.cursors[slot(*operand)] = text.chars().count();
                self.calculator.edit(*operand, text.clone());
                None
            }
            Message::FocusNext => {
                self.set_focus(self.focus.next());
                None
            }
            Message::FocusPrev => {
                self.set_focus(self.focus.prev());
                None
            }
            Message::Key(key) => self.handle_key(key),
            Message::Mouse(mouse) => self.handle_mouse(mouse),
            _ => None,
        }
    }

    fn set_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
    }
}
