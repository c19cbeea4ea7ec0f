use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a field was rejected during a calculation.
///
/// The `Display` text is the message shown next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Please enter a number")]
    NotANumber,

    #[error("Cannot be zero")]
    IsZero,

    /// A required operand was left empty.
    #[error("Please enter a value")]
    MissingValue,

    /// Another field already holds the unknown marker.
    #[error("Only one field can be x")]
    MultipleUnknowns,

    /// The solved value does not fit in an `f64`. Reported on the unknown field.
    #[error("Result is too large")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_ui_copy() {
        assert_eq!(FieldError::NotANumber.to_string(), "Please enter a number");
        assert_eq!(FieldError::IsZero.to_string(), "Cannot be zero");
        assert_eq!(FieldError::MissingValue.to_string(), "Please enter a value");
        assert_eq!(
            FieldError::MultipleUnknowns.to_string(),
            "Only one field can be x"
        );
        assert_eq!(FieldError::OutOfRange.to_string(), "Result is too large");
    }
}
