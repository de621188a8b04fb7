//! # sumcalc-ui
//!
//! Terminal front end for the sumcalc calculator.
//!
//! This crate provides the user interface components built on top of
//! [`sumcalc_core`], including:
//!
//! - [`CalculatorView`] - The calculator card: two fields, two buttons, feedback
//! - [`App`] - Shell implementing [`sumcalc_core::AppCoordinator`]
//! - [`AppLayout`] / [`CardLayout`] - Layout calculation utilities
//! - [`widgets`] - Title bar, input field, button, feedback, status bar, help
//!
//! ## Example
//!
//! ```ignore
//! use sumcalc_ui::{App, CalculatorView};
//! use sumcalc_core::{AppCoordinator, Message, Theme};
//!
//! let theme = Theme::dark();
//! let mut app = App::with_theme(Box::new(CalculatorView::new(theme.clone())), theme);
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
//!
//! ## Layout Calculation
//!
//! ```
//! use sumcalc_ui::{AppLayout, CardLayout};
//! use ratatui::prelude::Rect;
//!
//! let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
//! assert_eq!(layout.content.height, 22);
//!
//! let card = CardLayout::new(layout.content);
//! assert_eq!(card.card.width, CardLayout::WIDTH);
//! ```

pub mod app;
pub mod calculator_view;
pub mod renderer;
pub mod widgets;

pub use app::App;
pub use calculator_view::{CalculatorView, Focus};
pub use renderer::{AppLayout, CardLayout};
pub use widgets::{Button, ButtonKind, Feedback, HelpOverlay, InputField, StatusBar, TitleBar};
