//! Display formatting for computed sums
//!
//! Sums are shown the way a browser prints a number: `7` rather than `7.0`,
//! shortest round-trip digits, `Infinity` for overflow, and exponent notation
//! with an explicit sign outside `[1e-6, 1e21)`.

/// Formats a sum for the feedback region.
///
/// # Example
///
/// ```
/// use sumcalc_core::format::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Negative zero prints as plain zero.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    value.to_string()
}
