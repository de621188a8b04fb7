//! Component trait for content hosted by the shell.
//!
//! The shell draws chrome (title bar, status bar, help overlay) and hands
//! the remaining area and all unhandled messages to a single root
//! [`Component`].

use crate::event::Message;
use crate::snapshot::Mode;
use crate::theme::Theme;
use ratatui::prelude::*;

/// Trait that the shell's root component must implement.
///
/// # Example
///
/// ```ignore
/// use sumcalc_core::{Component, Message};
/// use ratatui::prelude::*;
///
/// struct Hello;
///
/// impl Component for Hello {
///     fn title(&self) -> &str { "Hello" }
///     fn focus(&mut self) {}
///     fn blur(&mut self) {}
///     fn view(&self, frame: &mut Frame, area: Rect) {
///         frame.render_widget("hello", area);
///     }
/// }
/// ```
pub trait Component {
    /// Title shown in the title bar.
    fn title(&self) -> &str;

    /// Feedback mode shown on the left of the status bar.
    fn mode(&self) -> Mode {
        Mode::Idle
    }

    /// Called when the component receives focus.
    fn focus(&mut self);

    /// Called when the component loses focus, e.g. behind the help overlay.
    fn blur(&mut self);

    /// Renders the component into `area`.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Handles a message the shell did not consume.
    ///
    /// A returned message is dispatched by the shell in turn.
    fn handle_message(&mut self, _message: &Message) -> Option<Message> {
        None
    }

    /// Optional per-tick update.
    fn tick(&mut self) {}

    /// Called when the shell switches theme.
    fn set_theme(&mut self, _theme: &Theme) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        focused: bool,
        seen: usize,
    }

    impl Component for Counter {
        fn title(&self) -> &str {
            "Counter"
        }

        fn focus(&mut self) {
            self.focused = true;
        }

        fn blur(&mut self) {
            self.focused = false;
        }

        fn view(&self, _frame: &mut Frame, _area: Rect) {}

        fn handle_message(&mut self, message: &Message) -> Option<Message> {
            self.seen += 1;
            match message {
                Message::Compute => Some(Message::Reset),
                _ => None,
            }
        }
    }

    #[test]
    fn test_defaults() {
        let mut counter = Counter {
            focused: false,
            seen: 0,
        };
        assert_eq!(counter.mode(), Mode::Idle);
        counter.tick();
        counter.set_theme(&Theme::light());
        assert_eq!(counter.seen, 0);
    }

    #[test]
    fn test_focus_blur() {
        let mut counter = Counter {
            focused: false,
            seen: 0,
        };
        counter.focus();
        assert!(counter.focused);
        counter.blur();
        assert!(!counter.focused);
    }

    #[test]
    fn test_follow_up_message() {
        let mut counter = Counter {
            focused: true,
            seen: 0,
        };
        assert_eq!(counter.handle_message(&Message::Compute), Some(Message::Reset));
        assert_eq!(counter.handle_message(&Message::Reset), None);
        assert_eq!(counter.seen, 2);
    }

    #[test]
    fn test_object_safe() {
        fn accept(_component: &dyn Component) {}
        accept(&Counter {
            focused: false,
            seen: 0,
        });
    }
}
