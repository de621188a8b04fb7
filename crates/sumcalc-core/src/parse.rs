//! Permissive numeric parsing for operand text
//!
//! Operands are read the way a browser's `parseFloat` reads them: the longest
//! numeric prefix wins and whatever follows it is ignored, so `"12abc"` is 12.
//! Only text with no numeric prefix at all is rejected.

/// Whether `c` is whitespace for trimming operands.
///
/// This is the browser's set: Unicode `White_Space` without U+0085 (NEL),
/// plus U+FEFF (byte order mark).
///
/// ```
/// use sumcalc_core::parse::is_space;
///
/// assert!(is_space(' '));
/// assert!(is_space('\u{FEFF}'));
/// assert!(!is_space('\u{85}'));
/// ```
pub fn is_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// Strips leading and trailing [`is_space`] characters.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Parses the longest numeric prefix of `input`.
///
/// Leading [`is_space`] whitespace is skipped. Returns `None` when no numeric prefix
/// exists (the "not a number" case). An exponent marker without digits
/// (`"1e"`, `"1e+"`) is left unconsumed rather than failing the parse.
///
/// # Example
///
/// ```
/// use sumcalc_core::parse::parse_prefix;
///
/// assert_eq!(parse_prefix("12abc"), Some(12.0));
/// assert_eq!(parse_prefix(".5"), Some(0.5));
/// assert_eq!(parse_prefix("1e3x"), Some(1000.0));
/// assert_eq!(parse_prefix("abc"), None);
/// ```
pub fn parse_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_space);
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_end = scan_digits(bytes, pos);
    let int_digits = &s[pos..int_end];
    pos = int_end;

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_end = scan_digits(bytes, pos + 1);
        frac_digits = &s[pos + 1..frac_end];
        pos = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut digits_start = pos + 1;
        if matches!(bytes.get(digits_start), Some(b'+' | b'-')) {
            digits_start += 1;
        }
        let exp_end = scan_digits(bytes, digits_start);
        if exp_end > digits_start {
            exponent = &s[pos + 1..exp_end];
        }
    }

    // Rebuild a literal that f64::from_str always accepts.
    let mut literal = String::with_capacity(int_digits.len() + frac_digits.len() + 8);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        literal.push('.');
        literal.push_str(frac_digits);
    }
    if !exponent.is_empty() {
        literal.push('e');
        literal.push_str(exponent);
    }

    literal.parse::<f64>().ok()
}

fn scan_digits(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    end
}
