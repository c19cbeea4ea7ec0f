use crate::field::{Field, Fields};

/// The two fields multiplied together and the divisor for a given unknown.
///
/// | Unknown | Formula     |
/// |---------|-------------|
/// | A       | (B × C) / D |
/// | B       | (A × D) / C |
/// | C       | (A × D) / B |
/// | D       | (B × C) / A |
pub fn formula(unknown: Field) -> (Field, Field, Field) {
    match unknown {
        Field::A => (Field::B, Field::C, Field::D),
        Field::B => (Field::A, Field::D, Field::C),
        Field::C => (Field::A, Field::D, Field::B),
        Field::D => (Field::B, Field::C, Field::A),
    }
}

/// The field that ends up in the denominator when solving for `unknown`.
pub fn divisor_of(unknown: Field) -> Field {
    formula(unknown).2
}

/// Cross-multiply the known values to obtain the unknown.
///
/// The slot for `unknown` in `known` is ignored. The divisor must already be
/// validated as non-zero.
pub fn solve(unknown: Field, known: &Fields<f64>) -> f64 {
    let (left, right, divisor) = formula(unknown);
    (known[left] * known[right]) / known[divisor]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_table() {
        assert_eq!(divisor_of(Field::A), Field::D);
        assert_eq!(divisor_of(Field::B), Field::C);
        assert_eq!(divisor_of(Field::C), Field::B);
        assert_eq!(divisor_of(Field::D), Field::A);
    }

    #[test]
    fn solves_each_position() {
        // 2 / 4 = 3 / 6
        let known = Fields::new(2.0, 4.0, 3.0, 6.0);
        assert_eq!(solve(Field::A, &known), 2.0);
        assert_eq!(solve(Field::B, &known), 4.0);
        assert_eq!(solve(Field::C, &known), 3.0);
        assert_eq!(solve(Field::D, &known), 6.0);
    }

    #[test]
    fn unknown_slot_is_ignored() {
        let known = Fields::new(f64::NAN, 6.0, 2.0, 3.0);
        assert_eq!(solve(Field::A, &known), 4.0);
    }
}
