//! Messages exchanged between the event loop, the shell and components

use crossterm::event::{KeyEvent, MouseEvent};

use crate::calculator::Operand;

/// Messages that can be sent through the UI
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Message {
    // === Global ===
    /// Quit the application
    Quit,
    /// Toggle the help overlay
    ToggleHelp,

    // === Calculator ===
    /// Validate the operands and show the sum or an error
    Compute,
    /// Clear both operands and any feedback
    Reset,
    /// Replace an operand's text
    Edit {
        /// Target operand
        operand: Operand,
        /// New raw text
        text: String,
    },
    /// Move focus to the next field or button
    FocusNext,
    /// Move focus to the previous field or button
    FocusPrev,

    // === Input ===
    /// Keyboard input event
    Key(KeyEvent),
    /// Mouse input event
    Mouse(MouseEvent),
    /// Terminal resize event
    Resize(u16, u16),

    // === Batch ===
    /// Multiple messages to process in sequence
    Batch(Vec<Message>),

    /// No operation (used for optional returns)
    #[default]
    None,
}

impl Message {
    /// Creates an edit message.
    ///
    /// ```
    /// use sumcalc_core::{Message, Operand};
    ///
    /// let msg = Message::edit(Operand::A, "3");
    /// assert_eq!(msg, Message::Edit { operand: Operand::A, text: "3".into() });
    /// ```
    pub fn edit(operand: Operand, text: impl Into<String>) -> Self {
        Message::Edit {
            operand,
            text: text.into(),
        }
    }

    /// Returns true if this is a no-op message
    pub fn is_none(&self) -> bool {
        matches!(self, Message::None)
    }

    /// Flattens nested batch messages into a single level
    ///
    /// Nested `Message::Batch` variants are expanded recursively and
    /// `Message::None` entries are dropped.
    ///
    /// ```
    /// use sumcalc_core::{Message, Operand};
    ///
    /// let nested = Message::Batch(vec![
    ///     Message::edit(Operand::A, "1"),
    ///     Message::Batch(vec![Message::edit(Operand::B, "2"), Message::Compute]),
    /// ]);
    /// assert_eq!(nested.flatten().len(), 3);
    /// ```
    pub fn flatten(self) -> Vec<Message> {
        match self {
            Message::Batch(msgs) => msgs.into_iter().flat_map(|m| m.flatten()).collect(),
            Message::None => vec![],
            other => vec![other],
        }
    }
}

/// Input events from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(key) => InputEvent::Key(key),
            crossterm::event::Event::Mouse(mouse) => InputEvent::Mouse(mouse),
            crossterm::event::Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Tick, // Focus and paste events are not used
        }
    }
}

impl From<InputEvent> for Message {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Key(key) => Message::Key(key),
            InputEvent::Mouse(mouse) => Message::Mouse(mouse),
            InputEvent::Resize(w, h) => Message::Resize(w, h),
            InputEvent::Tick => Message::None,
        }
    }
}
