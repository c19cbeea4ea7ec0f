//! Display formatting for solved and renormalized values.
//!
//! Values are rounded to one fractional digit. A value that rounds to a whole
//! number is shown without a fractional part, so `3.96` renders as `4`.

use serde::{Deserialize, Serialize};

/// Decimal separator used when rendering a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    #[default]
    Dot,
    Comma,
}

impl Separator {
    /// Separator style of a field's raw text, or `fallback` when it has none.
    pub fn detect(raw: &str, fallback: Separator) -> Separator {
        if raw.contains(',') {
            Separator::Comma
        } else if raw.contains('.') {
            Separator::Dot
        } else {
            fallback
        }
    }

    fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Comma => ',',
        }
    }
}

/// How a tie at the second fractional digit is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// `4.25 -> 4.3`, `-4.25 -> -4.3`
    #[default]
    HalfAwayFromZero,
    /// `4.25 -> 4.2`, `4.35 -> 4.4`
    HalfEven,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    pub separator: Separator,
    pub rounding: Rounding,
}

impl FormatOptions {
    pub fn with_separator(self, separator: Separator) -> Self {
        Self { separator, ..self }
    }
}

/// Every `f64` at or above 2^52 in magnitude is already a whole number.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Render a number with at most one fractional digit.
///
/// Ties are decided on `number * 10.0`, so whether an input such as `1.15`
/// counts as a tie depends on the product, not on the decimal text.
pub fn format_number(number: f64, options: &FormatOptions) -> String {
    if !number.is_finite() {
        return number.to_string();
    }
    if number.abs() >= INTEGRAL_THRESHOLD {
        // Scaling by ten could overflow to infinity
        return format!("{:.0}", number);
    }

    let scaled = number * 10.0;
    let tenths = match options.rounding {
        Rounding::HalfAwayFromZero => scaled.round(),
        Rounding::HalfEven => scaled.round_ties_even(),
    };

    if tenths == 0.0 {
        // Avoid rendering "-0"
        return "0".to_string();
    }

    let text = if tenths % 10.0 == 0.0 {
        format!("{:.0}", tenths / 10.0)
    } else {
        format!("{:.1}", tenths / 10.0)
    };

    match options.separator {
        Separator::Dot => text,
        sep => text.replace('.', &sep.as_char().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(4.0, &dot()), "4");
        assert_eq!(format_number(-12.0, &dot()), "-12");
        assert_eq!(format_number(1_000_000.0, &dot()), "1000000");
    }

    #[test]
    fn non_integers_have_one_digit() {
        assert_eq!(format_number(2.5, &dot()), "2.5");
        assert_eq!(format_number(1.0 / 3.0, &dot()), "0.3");
        assert_eq!(format_number(-2.66, &dot()), "-2.7");
    }

    #[test]
    fn rounding_to_whole_number_drops_fraction() {
        assert_eq!(format_number(3.96, &dot()), "4");
        assert_eq!(format_number(7.04, &dot()), "7");
    }

    #[test]
    fn half_away_from_zero_is_default() {
        assert_eq!(format_number(4.25, &dot()), "4.3");
        assert_eq!(format_number(-4.25, &dot()), "-4.3");
        assert_eq!(format_number(0.05, &dot()), "0.1");
    }

    #[test]
    fn half_even_rounds_ties_to_even_tenth() {
        let options = FormatOptions {
            rounding: Rounding::HalfEven,
            ..Default::default()
        };
        assert_eq!(format_number(4.25, &options), "4.2");
        assert_eq!(format_number(4.75, &options), "4.8");
        assert_eq!(format_number(0.25, &options), "0.2");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_number(-0.0, &dot()), "0");
        assert_eq!(format_number(-0.04, &dot()), "0");
    }

    #[test]
    fn comma_separator() {
        let options = dot().with_separator(Separator::Comma);
        assert_eq!(format_number(4.25, &options), "4,3");
        assert_eq!(format_number(4.0, &options), "4");
    }

    #[test]
    fn huge_values_stay_finite() {
        assert_eq!(format_number(1e308, &dot()), format!("{:.0}", 1e308));
        assert_eq!(format_number(-f64::MAX, &dot()), format!("{:.0}", -f64::MAX));
        assert_eq!(format_number(1e20, &dot()), "100000000000000000000");
        assert_eq!(
            format_number(4_503_599_627_370_497.0, &dot()),
            "4503599627370497"
        );
    }

    #[test]
    fn detect_separator_from_raw_text() {
        assert_eq!(Separator::detect("2,5", Separator::Dot), Separator::Comma);
        assert_eq!(Separator::detect("2.5", Separator::Comma), Separator::Dot);
        assert_eq!(Separator::detect("25", Separator::Comma), Separator::Comma);
        assert_eq!(Separator::detect("25", Separator::Dot), Separator::Dot);
    }
}
