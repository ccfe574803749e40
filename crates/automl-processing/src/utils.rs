//! Shared value-classification helpers.
//!
//! The parser, the distribution builder and the summaries must agree on what
//! counts as a number, so they all go through these functions.

// =============================================================================
// String Parsing Utilities
// =============================================================================

/// Parse a trimmed value as a finite `f64`.
///
/// Empty strings, `inf`, `NaN` and anything `f64::from_str` rejects return
/// `None`.
///
/// # Example
///
/// ```rust
/// use automl_processing::parse_finite_number;
///
/// assert_eq!(parse_finite_number(" 42 "), Some(42.0));
/// assert_eq!(parse_finite_number("1e3"), Some(1000.0));
/// assert_eq!(parse_finite_number("inf"), None);
/// assert_eq!(parse_finite_number(""), None);
/// ```
pub fn parse_finite_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Check if a string can be parsed as a finite number.
pub fn is_numeric_string(s: &str) -> bool {
    parse_finite_number(s).is_some()
}

// =============================================================================
// Boolean Detection Utilities
// =============================================================================

/// Literals accepted as booleans, compared case-insensitively.
pub const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];

/// Check if a string is exactly `true` or `false`, ignoring case.
///
/// Unlike looser boolean detectors, `yes`/`no`/`0`/`1` are not booleans here.
pub fn is_boolean_literal(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    BOOLEAN_LITERALS.iter().any(|&v| v == lower)
}

// =============================================================================
// Tests
// =============================================================================
