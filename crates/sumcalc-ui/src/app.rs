//! Main application struct
//!
//! The [`App`] struct implements [`AppCoordinator`] and serves as the
//! shell around a single root [`Component`]: it draws the title bar, status
//! bar and help overlay, consumes global keys, and forwards everything else.
//!
//! # Example
//!
//! ```ignore
//! use sumcalc_ui::{App, CalculatorView};
//! use sumcalc_core::{AppCoordinator, Message, Theme};
//!
//! let mut app = App::new(Box::new(CalculatorView::new(Theme::dark())));
//!
//! loop {
//!     terminal.draw(|f| app.render(f))?;
//!
//!     if let Event::Key(key) = event::read()? {
//!         app.dispatch(Message::Key(key));
//!     }
//!
//!     if app.should_quit() {
//!         break;
//!     }
//! }
//! ```

use crate::renderer::AppLayout;
use crate::widgets::{HelpOverlay, StatusBar, TitleBar};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use sumcalc_core::{AppCoordinator, Component, Message, Theme};

/// Name shown in the title bar.
pub const APP_NAME: &str = "sumcalc";

const STATUS_HINTS: &str = "F1:help  Ctrl+R:reset  Ctrl+Q:quit";

/// Maps a key to a shell-level message, if it is a global binding.
///
/// Esc only means something while the help overlay is open.
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
/// use sumcalc_core::Message;
/// use sumcalc_ui::app::global_message;
///
/// let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
/// assert_eq!(global_message(&quit, false), Some(Message::Quit));
///
/// let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
/// assert_eq!(global_message(&plain, false), None);
/// ```
pub fn global_message(key: &KeyEvent, help_visible: bool) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'q') if ctrl => Some(Message::Quit),
        KeyCode::Char('r') if ctrl => Some(Message::Reset),
        KeyCode::F(1) => Some(Message::ToggleHelp),
        KeyCode::Esc if help_visible => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Main application state
///
/// # Thread Safety
///
/// App itself is not thread-safe. The root component owns its calculator
/// and is driven from the event loop thread only.
pub struct App {
    /// Content below the title bar
    root: Box<dyn Component>,
    /// Current theme for styling
    theme: Theme,
    /// Flag indicating the application should quit
    should_quit: bool,
    /// Whether the key binding overlay is drawn
    show_help: bool,
}

impl App {
    /// Creates a new app with the default dark theme
    #[must_use]
    pub fn new(root: Box<dyn Component>) -> Self {
        Self::with_theme(root, Theme::dark())
    }

    /// Creates a new app with a custom theme, passing it on to `root`.
    #[must_use]
    pub fn with_theme(mut root: Box<dyn Component>, theme: Theme) -> Self {
        root.set_theme(&theme);
        root.focus();
        App {
            root,
            theme,
            should_quit: false,
            show_help: false,
        }
    }

    /// Sets the theme for the shell and the root component.
    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(theme = %theme.name, "theme changed");
        self.root.set_theme(&theme);
        self.theme = theme;
    }

    /// Shows or hides the help overlay.
    ///
    /// The root component is blurred while the overlay is up.
    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
        if show {
            self.root.blur();
        } else {
            self.root.focus();
        }
    }

    /// Whether the help overlay is visible.
    #[must_use]
    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    /// The root component.
    #[must_use]
    pub fn root(&self) -> &dyn Component {
        self.root.as_ref()
    }

    /// Renders the entire application
    ///
    /// Draws the title bar, the root component, the status bar and, when
    /// toggled on, the help overlay on top.
    ///
    /// ```ignore
    /// terminal.draw(|f| app.render(f))?;
    /// ```
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::new().style(
                Style::default()
                    .bg(self.theme.colors.background)
                    .fg(self.theme.colors.foreground),
            ),
            area,
        );

        let layout = AppLayout::new(area);
        frame.render_widget(TitleBar::new(APP_NAME, &self.theme), layout.title_bar);

        self.root.view(frame, layout.content);

        let status = StatusBar::new(&self.theme)
            .mode(self.root.mode())
            .center(self.root.title())
            .right(STATUS_HINTS);
        frame.render_widget(status, layout.status_bar);

        if self.show_help {
            frame.render_widget(HelpOverlay::new(&self.theme), area);
        }
    }

    fn forward(&mut self, msg: Message) {
        if let Some(response) = self.root.handle_message(&msg) {
            self.dispatch(response);
        }
    }
}

impl AppCoordinator for App {
    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn dispatch(&mut self, msg: Message) {
        match msg {
            Message::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            Message::ToggleHelp => self.set_show_help(!self.show_help),
            Message::Batch(messages) => {
                for m in messages {
                    self.dispatch(m);
                }
            }
            Message::None => {}
            Message::Resize(width, height) => {
                tracing::trace!(width, height, "terminal resized");
            }
            Message::Key(key) => {
                if let Some(global) = global_message(&key, self.show_help) {
                    self.dispatch(global);
                } else if !self.show_help {
                    self.forward(Message::Key(key));
                }
            }
            Message::Mouse(_) if self.show_help => {}
            other => {
                tracing::trace!(message = ?other, "forwarding to root");
                self.forward(other);
            }
        }
    }

    fn tick(&mut self) {
        self.root.tick();
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator_view::CalculatorView;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::cell::RefCell;
    use std::rc::Rc;
    use sumcalc_core::{Mode, Operand};

    /// Records what the shell hands to the root component.
    struct MockComponent {
        seen: Rc<RefCell<Vec<Message>>>,
        focused: Rc<RefCell<bool>>,
    }

    impl Component for MockComponent {
        fn title(&self) -> &str {
            "Mock"
        }

        fn focus(&mut self) {
            *self.focused.borrow_mut() = true;
        }

        fn blur(&mut self) {
            *self.focused.borrow_mut() = false;
        }

        fn view(&self, _frame: &mut Frame, _area: Rect) {}

        fn handle_message(&mut self, message: &Message) -> Option<Message> {
            self.seen.borrow_mut().push(message.clone());
            None
        }
    }

    fn mock_app() -> (App, Rc<RefCell<Vec<Message>>>, Rc<RefCell<bool>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let focused = Rc::new(RefCell::new(false));
        let app = App::new(Box::new(MockComponent {
            seen: Rc::clone(&seen),
            focused: Rc::clone(&focused),
        }));
        (app, seen, focused)
    }

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Message {
        Message::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn calculator_app() -> App {
        App::new(Box::new(CalculatorView::new(Theme::dark())))
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        terminal.draw(|f| app.render(f)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_app_new() {
        let (app, _, focused) = mock_app();
        assert!(!app.should_quit());
        assert!(!app.help_visible());
        assert_eq!(app.theme().name, "Dark");
        assert!(*focused.borrow());
    }

    #[test]
    fn test_app_with_theme() {
        let app = App::with_theme(Box::new(CalculatorView::new(Theme::dark())), Theme::light());
        assert_eq!(app.theme().name, "Light");
    }

    #[test]
    fn test_app_set_theme() {
        let mut app = calculator_app();
        app.set_theme(Theme::nord());
        assert_eq!(app.theme().name, "Nord");
        assert!(screen(&app).contains("Nord"));
    }

    #[test]
    fn test_dispatch_quit() {
        let (mut app, seen, _) = mock_app();
        app.dispatch(Message::Quit);
        assert!(app.should_quit());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_global_keys() {
        let (mut app, seen, _) = mock_app();
        app.dispatch(ctrl('r'));
        assert_eq!(*seen.borrow(), vec![Message::Reset]);

        app.dispatch(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_toggle_and_swallow() {
        let (mut app, seen, focused) = mock_app();

        app.dispatch(key(KeyCode::F(1)));
        assert!(app.help_visible());
        assert!(!*focused.borrow());

        app.dispatch(key(KeyCode::Char('1')));
        assert!(seen.borrow().is_empty());

        app.dispatch(key(KeyCode::Esc));
        assert!(!app.help_visible());
        assert!(*focused.borrow());

        app.dispatch(key(KeyCode::Char('1')));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_esc_without_help_is_forwarded() {
        let (mut app, seen, _) = mock_app();
        app.dispatch(key(KeyCode::Esc));
        assert_eq!(*seen.borrow(), vec![key(KeyCode::Esc)]);
        assert!(!app.help_visible());
    }

    #[test]
    fn test_dispatch_none_and_batch() {
        let (mut app, seen, _) = mock_app();
        app.dispatch(Message::None);
        assert!(seen.borrow().is_empty());

        app.dispatch(Message::Batch(vec![
            Message::edit(Operand::A, "1"),
            Message::None,
            Message::Compute,
        ]));
        assert_eq!(
            *seen.borrow(),
            vec![Message::edit(Operand::A, "1"), Message::Compute]
        );
    }

    #[test]
    fn test_calculator_round_trip_through_keys() {
        let mut app = calculator_app();
        for message in [
            key(KeyCode::Char('3')),
            key(KeyCode::Tab),
            key(KeyCode::Char('4')),
            key(KeyCode::Enter),
        ] {
            app.dispatch(message);
        }

        assert_eq!(app.root().mode(), Mode::Result);
        let text = screen(&app);
        assert!(text.contains("3 + 4 = 7"));
        assert!(text.contains(" RESULT "));
        assert!(text.contains(APP_NAME));

        app.dispatch(ctrl('r'));
        assert_eq!(app.root().mode(), Mode::Idle);
        let text = screen(&app);
        assert!(!text.contains("3 + 4 = 7"));
        assert!(text.contains("Enter first number"));
    }

    #[test]
    fn test_button_follow_up_is_dispatched() {
        let mut app = calculator_app();
        app.dispatch(Message::edit(Operand::A, "x"));
        app.dispatch(Message::edit(Operand::B, "1"));
        app.dispatch(key(KeyCode::BackTab));
        app.dispatch(key(KeyCode::BackTab));
        app.dispatch(key(KeyCode::Enter));

        assert_eq!(app.root().mode(), Mode::Error);
        assert!(screen(&app).contains("Please enter valid numbers"));
    }

    #[test]
    fn test_help_overlay_rendered() {
        let mut app = calculator_app();
        app.set_show_help(true);
        let text = screen(&app);
        assert!(text.contains("Help"));
        assert!(text.contains("Reset calculator"));
    }

    #[test]
    fn test_tick() {
        let mut app = calculator_app();
        app.tick();
        app.dispatch(Message::Resize(100, 40));
        assert!(!app.should_quit());
    }
}
