//! `--compute A B`: run one calculation without a terminal UI

use std::io::{self, Write};

use sumcalc_core::{Calculator, Operand};

/// Computes `a + b` and reports it.
///
/// Success prints `a + b = sum` to `out`; a validation failure prints the
/// message to `err`. With `json`, the snapshot goes to `out` either way.
/// Returns whether the operands were valid.
pub fn compute(
    a: &str,
    b: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut calculator = Calculator::new();
    calculator.edit(Operand::A, a);
    calculator.edit(Operand::B, b);
    calculator.compute();

    let snapshot = calculator.snapshot();
    tracing::debug!(mode = ?snapshot.mode(), "headless compute finished");

    if json {
        let rendered = serde_json::to_string_pretty(&snapshot).map_err(io::Error::other)?;
        writeln!(out, "{rendered}")?;
    } else if let Some(summary) = snapshot.summary() {
        writeln!(out, "{summary}")?;
    } else if let Some(message) = snapshot.error_message() {
        writeln!(err, "{message}")?;
    }

    Ok(snapshot.error.is_none())
}
