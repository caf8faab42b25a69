//! Error types.

use core::fmt;

/// Errors produced by fixed-capacity integer arithmetic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The exact result does not fit in 264 bits.
    ArithmeticOverflow,

    /// Subtraction would produce a negative value.
    Underflow,

    /// Division or reduction by zero.
    DivisionByZero,

    /// Value has no inverse modulo the given modulus.
    NotInvertible,

    /// Text or byte input is not a valid encoding of an integer.
    InvalidEncoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ArithmeticOverflow => "arithmetic overflow",
            Error::Underflow => "arithmetic underflow",
            Error::DivisionByZero => "division by zero",
            Error::NotInvertible => "value is not invertible",
            Error::InvalidEncoding => "invalid integer encoding",
        })
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
