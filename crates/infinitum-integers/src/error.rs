//! The closed error taxonomy shared by every engine operation.

use thiserror::Error;

/// Failure kinds an engine operation can report instead of a value.
///
/// The set is closed: no operation produces any other kind, every
/// fallible operation returns exactly one of these, and every kind is a
/// deterministic function of the inputs. Front-ends map values through
/// [`NumError::code`] for stable wire reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum NumError {
    /// Zero divisor in integer division, zero denominator in a rational,
    /// or a non-positive modulus in modular exponentiation.
    #[error("division by zero")]
    DivisionByZero,

    /// Malformed textual input: a digit out of range for the radix, an
    /// empty digit run, or a malformed separator.
    #[error("malformed numeric literal")]
    Parse,

    /// The exact value does not fit the fixed-width conversion target.
    #[error("value out of range for fixed-width conversion")]
    Range,

    /// An integer-only operation received a non-integral operand, or a
    /// negative exponent where only non-negative is defined.
    #[error("type mismatch: operation requires an integer operand")]
    TypeMismatch,
}

impl NumError {
    /// Stable numeric code for front-ends printing `ERR:<code>`.
    ///
    /// `0` means success and is never carried by an error value.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            NumError::DivisionByZero => 3,
            NumError::Parse => 4,
            NumError::Range => 5,
            NumError::TypeMismatch => 6,
        }
    }
}
