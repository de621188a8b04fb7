//! UI widgets for the sumcalc TUI
//!
//! ## Available Widgets
//!
//! - [`TitleBar`] - Application name and active theme
//! - [`InputField`] - Bordered single-line text input with placeholder
//! - [`Button`] - One-line `[ Label ]` push button
//! - [`Feedback`] - Error, result or idle hint under the buttons
//! - [`StatusBar`] - Three-section status bar for mode, context, and help hints
//! - [`HelpOverlay`] - Popup listing key bindings
//!
//! ## Example
//!
//! ```ignore
//! use sumcalc_ui::widgets::{InputField, StatusBar};
//! use sumcalc_core::{Mode, Theme};
//!
//! let theme = Theme::dark();
//!
//! let field = InputField::new("Number 1:", "3", &theme).focused(true);
//!
//! let status = StatusBar::new(&theme)
//!     .mode(Mode::Idle)
//!     .center("Dark")
//!     .right("F1:help");
//! ```

pub mod button;
pub mod feedback;
pub mod help;
pub mod input_field;
pub mod status_bar;
pub mod title_bar;

pub use button::{Button, ButtonKind};
pub use feedback::Feedback;
pub use help::HelpOverlay;
pub use input_field::InputField;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
