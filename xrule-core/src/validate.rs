use crate::error::FieldError;
use crate::field::{Field, Fields};

/// Parsed form of a field's raw text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Nothing entered yet
    Empty,
    /// The `x` marker
    Unknown,
    Number(f64),
}

/// True when the raw text is the unknown marker (`x`/`X`, surrounding whitespace ignored).
pub fn is_unknown_marker(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("x")
}

/// Parse a decimal number accepting either `.` or `,` as the decimal separator.
///
/// Mixing both separators is rejected, as are non-finite values.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.contains('.') && trimmed.contains(',') {
        return None;
    }

    let number: f64 = trimmed.replace(',', ".").parse().ok()?;
    number.is_finite().then_some(number)
}

/// Validate one field's raw text.
///
/// Empty text and the unknown marker always pass; anything else must parse as a
/// number, and a divisor must not be zero.
pub fn validate(raw: &str, is_divisor: bool) -> Result<Value, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Empty);
    }
    if is_unknown_marker(trimmed) {
        return Ok(Value::Unknown);
    }

    let number = parse_number(trimmed).ok_or(FieldError::NotANumber)?;
    if is_divisor && number == 0.0 {
        return Err(FieldError::IsZero);
    }

    Ok(Value::Number(number))
}

/// Find the field holding the unknown marker.
///
/// Fields are scanned in A, B, C, D order and the first marked one wins.
pub fn resolve_unknown(raw: &Fields<String>) -> Option<Field> {
    raw.iter()
        .find(|(_, text)| is_unknown_marker(text))
        .map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(a: &str, b: &str, c: &str, d: &str) -> Fields<String> {
        Fields::new(a.into(), b.into(), c.into(), d.into())
    }

    #[test]
    fn parse_number_accepts_both_separators() {
        assert_eq!(parse_number("2.5"), Some(2.5));
        assert_eq!(parse_number("2,5"), Some(2.5));
        assert_eq!(parse_number("  -7 "), Some(-7.0));
        assert_eq!(parse_number(",5"), Some(0.5));
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1,234.5"), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn validate_empty_and_marker_always_pass() {
        assert_eq!(validate("", true), Ok(Value::Empty));
        assert_eq!(validate("   ", false), Ok(Value::Empty));
        assert_eq!(validate("x", true), Ok(Value::Unknown));
        assert_eq!(validate(" X ", false), Ok(Value::Unknown));
    }

    #[test]
    fn validate_rejects_zero_only_for_divisors() {
        assert_eq!(validate("0", true), Err(FieldError::IsZero));
        assert_eq!(validate("0,0", true), Err(FieldError::IsZero));
        assert_eq!(validate("-0", true), Err(FieldError::IsZero));
        assert_eq!(validate("0", false), Ok(Value::Number(0.0)));
    }

    #[test]
    fn validate_reports_not_a_number() {
        assert_eq!(validate("seven", false), Err(FieldError::NotANumber));
        assert_eq!(validate("seven", true), Err(FieldError::NotANumber));
    }

    #[test]
    fn resolve_unknown_scans_in_priority_order() {
        assert_eq!(resolve_unknown(&raw("1", "2", "3", "4")), None);
        assert_eq!(resolve_unknown(&raw("1", "x", "3", "4")), Some(Field::B));
        assert_eq!(resolve_unknown(&raw("1", "2", "3", " X")), Some(Field::D));
        // First marker wins even when a later field is also marked
        assert_eq!(resolve_unknown(&raw("1", "2", "x", "x")), Some(Field::C));
        // Non-numeric text before the marker does not matter
        assert_eq!(resolve_unknown(&raw("abc", "x", "", "")), Some(Field::B));
    }
}
