//! # sumcalc-core
//!
//! State, validation and shared types for the sumcalc terminal calculator.
//!
//! ## Core Abstractions
//!
//! - [`Calculator`] - Two operand texts, an optional sum, an optional error
//! - [`Snapshot`] - Immutable copy of calculator state published on every change
//! - [`evaluate`] - Pure validate-and-add step used by [`Calculator::compute`]
//! - [`parse::parse_prefix`] - Permissive numeric prefix parser
//! - [`Component`] / [`AppCoordinator`] - Seams between shell and content
//! - [`Message`] - Event/message types for UI communication
//! - [`Theme`] / [`Config`] - Appearance and user configuration
//! - [`ValidationError`] / [`CoreError`] - Error types
//!
//! ## Example
//!
//! ```
//! use sumcalc_core::{Calculator, Mode, Operand, ValidationError};
//!
//! let mut calc = Calculator::new();
//! let latest = calc.subscribe();
//!
//! calc.edit(Operand::A, "");
//! calc.edit(Operand::B, "5");
//! calc.compute();
//! assert_eq!(latest.borrow().error, Some(ValidationError::MissingInput));
//!
//! calc.edit(Operand::A, "2.5");
//! assert_eq!(latest.borrow().mode(), Mode::Idle);
//!
//! calc.compute();
//! assert_eq!(latest.borrow().summary().as_deref(), Some("2.5 + 5 = 7.5"));
//! ```

pub mod app;
pub mod calculator;
pub mod component;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod parse;
pub mod snapshot;
pub mod theme;

pub use app::AppCoordinator;
pub use calculator::{evaluate, Calculator, Operand};
pub use component::Component;
pub use config::{Config, LoggingConfig, UiConfig};
pub use error::{CoreError, CoreResult, ValidationError};
pub use event::{InputEvent, Message};
pub use snapshot::{Mode, Snapshot, SnapshotReceiver};
pub use theme::{BorderStyle, Theme, ThemeColors};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _ = Calculator::default();
        let _ = Snapshot::default();
        let _ = Mode::Idle;
        let _ = Operand::A;
        let _ = Message::Compute;
        let _ = InputEvent::Tick;
        let _ = Config::default();
        let _ = BorderStyle::Rounded;
        let _ = CoreError::UnknownTheme(String::new());
    }

    #[test]
    fn test_core_result_usage() {
        fn theme_for(name: &str) -> CoreResult<String> {
            Ok(Theme::by_name(name)?.name)
        }

        assert_eq!(theme_for("nord").ok().as_deref(), Some("Nord"));
        assert!(theme_for("plaid").is_err());
    }

    #[test]
    fn test_evaluate_matches_calculator() {
        for (a, b) in [("3", "4"), ("", "5"), ("abc", "2"), ("2.5", "-1.5")] {
            let mut calc = Calculator::new();
            calc.edit(Operand::A, a);
            calc.edit(Operand::B, b);
            calc.compute();
            assert_eq!(evaluate(a, b).ok(), calc.result());
            assert_eq!(evaluate(a, b).err(), calc.error());
        }
    }
}
