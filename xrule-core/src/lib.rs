//! Rule-of-three solver: resolve the unknown field, validate the operands,
//! cross-multiply and format the result for display.

mod error;
pub mod field;
pub mod format;
pub mod sheet;
pub mod solver;
pub mod validate;

pub use crate::error::FieldError;
pub use field::{Field, Fields};
pub use format::{FormatOptions, Rounding, Separator, format_number};
pub use sheet::{FieldAccess, Outcome, Sheet, calculate, reset};
pub use solver::{divisor_of, solve};
pub use validate::{Value, resolve_unknown, validate};
