use tracing::{debug, info};

use crate::error::FieldError;
use crate::field::{Field, Fields};
use crate::format::{FormatOptions, Separator, format_number};
use crate::solver::{divisor_of, solve};
use crate::validate::{Value, is_unknown_marker, resolve_unknown, validate};

/// Read/write access to the four calculator fields and their presentation flags.
///
/// Implemented by whatever owns the fields (an in-memory [`Sheet`], a UI form).
pub trait FieldAccess {
    fn value(&self, field: Field) -> &str;
    fn set_value(&mut self, field: Field, value: String);
    fn set_error(&mut self, field: Field, error: Option<FieldError>);
    fn set_just_computed(&mut self, field: Field, just_computed: bool);
}

/// Result of one [`calculate`] pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `field` was the unknown and now holds the formatted `value`.
    Solved { field: Field, value: f64 },
    /// No unknown was marked and every field is a valid number (or empty).
    Validated,
    /// Nothing was written; each listed field carries its error.
    Rejected { errors: Vec<(Field, FieldError)> },
}

/// Run one calculation over `fields`.
///
/// Errors from a previous pass are cleared first. On rejection no field text or
/// just-computed flag is touched.
pub fn calculate<A>(fields: &mut A, options: &FormatOptions) -> Outcome
where
    A: FieldAccess + ?Sized,
{
    let raw = Fields::from_fn(|field| fields.value(field).to_string());

    for field in Field::ALL {
        fields.set_error(field, None);
    }

    let outcome = match resolve_unknown(&raw) {
        Some(unknown) => solve_for(fields, &raw, unknown, options),
        None => validate_all(&raw),
    };

    if let Outcome::Rejected { errors } = &outcome {
        for (field, error) in errors {
            fields.set_error(*field, Some(*error));
        }
    }

    outcome
}

/// Clear every field, error and just-computed flag.
pub fn reset<A>(fields: &mut A)
where
    A: FieldAccess + ?Sized,
{
    for field in Field::ALL {
        fields.set_value(field, String::new());
        fields.set_error(field, None);
        fields.set_just_computed(field, false);
    }
}

fn validate_all(raw: &Fields<String>) -> Outcome {
    // A is the divisor of the D formula, so it may not be zero here either
    let errors: Vec<_> = raw
        .iter()
        .filter_map(|(field, text)| {
            validate(text, field == Field::A)
                .err()
                .map(|error| (field, error))
        })
        .collect();

    if errors.is_empty() {
        debug!("No unknown marked, all fields valid");
        Outcome::Validated
    } else {
        debug!(?errors, "Validation-only pass rejected");
        Outcome::Rejected { errors }
    }
}

fn solve_for<A>(
    fields: &mut A,
    raw: &Fields<String>,
    unknown: Field,
    options: &FormatOptions,
) -> Outcome
where
    A: FieldAccess + ?Sized,
{
    let divisor = divisor_of(unknown);
    let mut known = Fields::from_fn(|_| 0.0);
    let mut errors = Vec::new();

    for (field, text) in raw.iter().filter(|(field, _)| *field != unknown) {
        if is_unknown_marker(text) {
            errors.push((field, FieldError::MultipleUnknowns));
            continue;
        }

        match validate(text, field == divisor) {
            Ok(Value::Number(number)) => known[field] = number,
            Ok(Value::Empty) => errors.push((field, FieldError::MissingValue)),
            Ok(Value::Unknown) => errors.push((field, FieldError::MultipleUnknowns)),
            Err(error) => errors.push((field, error)),
        }
    }

    if !errors.is_empty() {
        debug!(%unknown, ?errors, "Operands rejected, nothing written");
        return Outcome::Rejected { errors };
    }

    let value = solve(unknown, &known);
    if !value.is_finite() {
        debug!(%unknown, value, "Result overflowed, nothing written");
        return Outcome::Rejected {
            errors: vec![(unknown, FieldError::OutOfRange)],
        };
    }
    info!(%unknown, value, "Solved proportion");

    let any_comma = raw
        .iter()
        .any(|(field, text)| field != unknown && text.contains(','));
    let result_separator = if any_comma {
        Separator::Comma
    } else {
        options.separator
    };

    for field in Field::ALL {
        let text = if field == unknown {
            format_number(value, &options.with_separator(result_separator))
        } else {
            let separator = Separator::detect(&raw[field], options.separator);
            format_number(known[field], &options.with_separator(separator))
        };
        fields.set_value(field, text);
        fields.set_just_computed(field, false);
    }
    fields.set_just_computed(unknown, true);

    Outcome::Solved {
        field: unknown,
        value,
    }
}

/// Plain in-memory set of fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    values: Fields<String>,
    errors: Fields<Option<FieldError>>,
    just_computed: Fields<bool>,
}

impl Sheet {
    pub fn new(a: &str, b: &str, c: &str, d: &str) -> Self {
        Self {
            values: Fields::new(a.into(), b.into(), c.into(), d.into()),
            ..Default::default()
        }
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field]
    }

    pub fn is_just_computed(&self, field: Field) -> bool {
        self.just_computed[field]
    }

    /// The field flagged as just computed, if any
    pub fn just_computed(&self) -> Option<Field> {
        self.just_computed
            .iter()
            .find(|(_, flag)| **flag)
            .map(|(field, _)| field)
    }

    pub fn values(&self) -> &Fields<String> {
        &self.values
    }
}

impl FieldAccess for Sheet {
    fn value(&self, field: Field) -> &str {
        &self.values[field]
    }

    fn set_value(&mut self, field: Field, value: String) {
        self.values[field] = value;
    }

    fn set_error(&mut self, field: Field, error: Option<FieldError>) {
        self.errors[field] = error;
    }

    fn set_just_computed(&mut self, field: Field, just_computed: bool) {
        self.just_computed[field] = just_computed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::parse_number;

    fn run(sheet: &mut Sheet) -> Outcome {
        calculate(sheet, &FormatOptions::default())
    }

    #[test]
    fn solves_for_a() {
        let mut sheet = Sheet::new("x", "6", "2", "3");
        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Solved {
                field: Field::A,
                value: 4.0
            }
        );
        assert_eq!(sheet.value(Field::A), "4");
        assert_eq!(sheet.value(Field::B), "6");
        assert_eq!(sheet.value(Field::C), "2");
        assert_eq!(sheet.value(Field::D), "3");
        assert_eq!(sheet.just_computed(), Some(Field::A));
    }

    #[test]
    fn formula_divisor_zero_is_rejected() {
        let mut sheet = Sheet::new("0", "6", "2", "x");
        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Rejected {
                errors: vec![(Field::A, FieldError::IsZero)]
            }
        );
        assert_eq!(sheet.error(Field::A), Some(FieldError::IsZero));
        assert_eq!(sheet.value(Field::D), "x");
        assert_eq!(sheet.just_computed(), None);
    }

    #[test]
    fn zero_outside_divisor_slot_is_a_valid_operand() {
        // D = (B × C) / A, so B = 0 only makes the result zero
        let mut sheet = Sheet::new("6", "0", "2", "x");
        run(&mut sheet);

        assert_eq!(sheet.value(Field::D), "0");
        assert_eq!(sheet.error(Field::B), None);
    }

    #[test]
    fn b_is_divisor_when_solving_c() {
        let mut sheet = Sheet::new("6", "0", "x", "3");
        run(&mut sheet);

        assert_eq!(sheet.error(Field::B), Some(FieldError::IsZero));
        assert_eq!(sheet.value(Field::C), "x");
    }

    #[test]
    fn empty_operand_is_missing_value() {
        let mut sheet = Sheet::new("x", "6", "", "3");
        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Rejected {
                errors: vec![(Field::C, FieldError::MissingValue)]
            }
        );
        assert_eq!(sheet.value(Field::A), "x");
    }

    #[test]
    fn second_marker_is_rejected() {
        let mut sheet = Sheet::new("4", "x", "2", "X");
        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Rejected {
                errors: vec![(Field::D, FieldError::MultipleUnknowns)]
            }
        );
        assert_eq!(sheet.error(Field::B), None);
        assert_eq!(sheet.value(Field::B), "x");
    }

    #[test]
    fn reports_every_bad_operand() {
        let mut sheet = Sheet::new("x", "abc", "", "0");
        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Rejected {
                errors: vec![
                    (Field::B, FieldError::NotANumber),
                    (Field::C, FieldError::MissingValue),
                    (Field::D, FieldError::IsZero),
                ]
            }
        );
    }

    #[test]
    fn validation_only_pass_never_writes() {
        let mut sheet = Sheet::new("1", "2.55", "3", "4");
        sheet.set_just_computed(Field::C, true);
        let before = sheet.values().clone();

        assert_eq!(run(&mut sheet), Outcome::Validated);
        assert_eq!(sheet.values(), &before);
        assert_eq!(sheet.just_computed(), Some(Field::C));
    }

    #[test]
    fn validation_only_pass_treats_a_as_divisor() {
        let mut sheet = Sheet::new("0", "0", "abc", "");
        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Rejected {
                errors: vec![
                    (Field::A, FieldError::IsZero),
                    (Field::C, FieldError::NotANumber),
                ]
            }
        );
    }

    #[test]
    fn rejection_keeps_previous_just_computed_flag() {
        let mut sheet = Sheet::new("x", "6", "2", "3");
        run(&mut sheet);

        // Solving B divides by C
        sheet.set_value(Field::B, "x".into());
        sheet.set_value(Field::C, "0".into());
        let outcome = run(&mut sheet);

        assert!(matches!(outcome, Outcome::Rejected { .. }));
        assert_eq!(sheet.just_computed(), Some(Field::A));
    }

    #[test]
    fn errors_from_previous_pass_are_cleared() {
        let mut sheet = Sheet::new("x", "6", "2", "0");
        run(&mut sheet);
        assert_eq!(sheet.error(Field::D), Some(FieldError::IsZero));

        sheet.set_value(Field::D, "3".into());
        run(&mut sheet);
        assert_eq!(sheet.error(Field::D), None);
        assert_eq!(sheet.value(Field::A), "4");
    }

    #[test]
    fn known_fields_are_renormalized() {
        let mut sheet = Sheet::new("2.56", "x", "4.0", "8");
        run(&mut sheet);

        assert_eq!(sheet.value(Field::A), "2.6");
        assert_eq!(sheet.value(Field::C), "4");
        assert_eq!(sheet.value(Field::D), "8");
        // B = (2.56 × 8) / 4 = 5.12
        assert_eq!(sheet.value(Field::B), "5.1");
    }

    #[test]
    fn comma_style_is_kept_per_field() {
        let mut sheet = Sheet::new("x", "2,5", "3", "2");
        run(&mut sheet);

        assert_eq!(sheet.value(Field::B), "2,5");
        // (2.5 × 3) / 2 = 3.75
        assert_eq!(sheet.value(Field::A), "3,8");
    }

    #[test]
    fn configured_separator_applies_to_result() {
        let mut sheet = Sheet::new("x", "5", "3", "2");
        let options = FormatOptions::default().with_separator(Separator::Comma);
        calculate(&mut sheet, &options);

        assert_eq!(sheet.value(Field::A), "7,5");
    }

    #[test]
    fn only_one_field_flagged_after_consecutive_solves() {
        let mut sheet = Sheet::new("x", "6", "2", "3");
        run(&mut sheet);
        sheet.set_value(Field::C, "x".into());
        run(&mut sheet);

        assert_eq!(sheet.just_computed(), Some(Field::C));
        assert!(!sheet.is_just_computed(Field::A));
    }

    #[test]
    fn huge_operands_keep_numeric_text() {
        let mut sheet = Sheet::new("x", "1e308", "1", "1e308");
        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Solved {
                field: Field::A,
                value: 1.0
            }
        );
        assert_eq!(sheet.value(Field::A), "1");
        assert_eq!(parse_number(sheet.value(Field::B)), Some(1e308));
        assert_eq!(parse_number(sheet.value(Field::D)), Some(1e308));

        // The renormalized text is still accepted on the next pass
        assert_eq!(run(&mut sheet), Outcome::Validated);
    }

    #[test]
    fn overflowing_result_is_rejected_without_write() {
        let mut sheet = Sheet::new("x", "1e200", "1e200", "1");
        let before = sheet.values().clone();

        let outcome = run(&mut sheet);

        assert_eq!(
            outcome,
            Outcome::Rejected {
                errors: vec![(Field::A, FieldError::OutOfRange)]
            }
        );
        assert_eq!(sheet.values(), &before);
        assert_eq!(sheet.error(Field::A), Some(FieldError::OutOfRange));
        assert_eq!(sheet.just_computed(), None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut sheet = Sheet::new("x", "6", "abc", "3");
        run(&mut sheet);
        sheet.set_just_computed(Field::B, true);

        reset(&mut sheet);

        assert_eq!(sheet, Sheet::default());
    }
}
