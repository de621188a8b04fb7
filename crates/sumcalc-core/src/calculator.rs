//! The two-operand sum calculator
//!
//! [`Calculator`] owns the four pieces of widget state (two operand texts,
//! an optional result and an optional validation error) and publishes a
//! [`Snapshot`] after every transition.
//!
//! # Example
//!
//! ```
//! use sumcalc_core::{Calculator, Operand};
//!
//! let mut calc = Calculator::new();
//! let view = calc.subscribe();
//!
//! calc.edit(Operand::A, "3");
//! calc.edit(Operand::B, "4");
//! calc.compute();
//!
//! assert_eq!(view.borrow().summary().as_deref(), Some("3 + 4 = 7"));
//! ```

use crossterm::event::{KeyCode, KeyEvent};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::ValidationError;
use crate::parse::{parse_prefix, trim};
use crate::snapshot::{Snapshot, SnapshotReceiver};

/// Which operand an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// First number.
    A,
    /// Second number.
    B,
}

impl Operand {
    /// Field label as shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Operand::A => "Number 1:",
            Operand::B => "Number 2:",
        }
    }

    /// Placeholder shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Operand::A => "Enter first number",
            Operand::B => "Enter second number",
        }
    }
}

/// Validates two operand texts and adds them.
///
/// Both texts are trimmed of [`is_space`](crate::parse::is_space) whitespace.
/// An empty operand is [`ValidationError::MissingInput`]; an operand without
/// a numeric prefix is [`ValidationError::InvalidNumber`].
/// The emptiness check runs for both operands before any parsing.
///
/// # Example
///
/// ```
/// use sumcalc_core::{evaluate, ValidationError};
///
/// assert_eq!(evaluate("3", "4"), Ok(7.0));
/// assert_eq!(evaluate("", "5"), Err(ValidationError::MissingInput));
/// assert_eq!(evaluate("abc", "2"), Err(ValidationError::InvalidNumber));
/// ```
pub fn evaluate(a: &str, b: &str) -> Result<f64, ValidationError> {
    let (a, b) = (trim(a), trim(b));
    if a.is_empty() || b.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    match (parse_prefix(a), parse_prefix(b)) {
        (Some(x), Some(y)) => Ok(x + y),
        _ => Err(ValidationError::InvalidNumber),
    }
}

/// Calculator widget state.
#[derive(Debug)]
pub struct Calculator {
    operand_a: String,
    operand_b: String,
    result: Option<f64>,
    error: Option<ValidationError>,
    publisher: watch::Sender<Snapshot>,
}

impl Calculator {
    /// Creates a calculator with empty operands and no feedback.
    #[must_use]
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(Snapshot::default());
        Calculator {
            operand_a: String::new(),
            operand_b: String::new(),
            result: None,
            error: None,
            publisher,
        }
    }

    /// Raw text of an operand.
    pub fn operand(&self, operand: Operand) -> &str {
        match operand {
            Operand::A => &self.operand_a,
            Operand::B => &self.operand_b,
        }
    }

    /// Sum from the last successful compute.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Failure from the last compute.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Replaces an operand's text verbatim and clears any feedback.
    pub fn edit(&mut self, operand: Operand, text: impl Into<String>) {
        let text = text.into();
        tracing::trace!(?operand, %text, "operand edited");
        match operand {
            Operand::A => self.operand_a = text,
            Operand::B => self.operand_b = text,
        }
        self.error = None;
        self.result = None;
        self.publish();
    }

    /// Validates the operands and stores either the sum or the error.
    pub fn compute(&mut self) {
        self.error = None;
        self.result = None;

        match evaluate(&self.operand_a, &self.operand_b) {
            Ok(sum) => {
                tracing::debug!(sum, "compute succeeded");
                self.result = Some(sum);
            }
            Err(error) => {
                tracing::debug!(%error, "compute rejected input");
                self.error = Some(error);
            }
        }
        self.publish();
    }

    /// Clears both operands and all feedback.
    pub fn reset(&mut self) {
        tracing::debug!("calculator reset");
        self.operand_a.clear();
        self.operand_b.clear();
        self.result = None;
        self.error = None;
        self.publish();
    }

    /// Runs [`compute`](Self::compute) if `key` is Enter.
    ///
    /// Returns whether a compute happened.
    pub fn trigger_on_enter(&mut self, key: &KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            self.compute();
            true
        } else {
            false
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            operand_a: self.operand_a.clone(),
            operand_b: self.operand_b.clone(),
            result: self.result,
            error: self.error,
        }
    }

    /// Receiver that always observes the latest published snapshot.
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.publisher.subscribe()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
