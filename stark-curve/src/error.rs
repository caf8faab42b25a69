//! Error types.

use core::fmt;

/// Errors produced by the Stark curve stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The exact result does not fit in 264 bits.
    ArithmeticOverflow,

    /// Subtraction would produce a negative value.
    Underflow,

    /// Integer division by zero, or inversion of the zero field element.
    DivisionByZero,

    /// Value has no inverse modulo the given modulus.
    NotInvertible,

    /// Malformed hex, byte or point input.
    InvalidEncoding,

    /// Private key is not in `(0, N)`.
    KeyOutOfRange,

    /// The deterministic nonce search exhausted its iteration budget.
    SigningFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ArithmeticOverflow => "arithmetic overflow",
            Error::Underflow => "arithmetic underflow",
            Error::DivisionByZero => "division by zero",
            Error::NotInvertible => "value is not invertible",
            Error::InvalidEncoding => "invalid encoding",
            Error::KeyOutOfRange => "private key out of range",
            Error::SigningFailed => "signing failed",
        })
    }
}

impl core::error::Error for Error {}

impl From<fixint::Error> for Error {
    fn from(err: fixint::Error) -> Error {
        match err {
            fixint::Error::ArithmeticOverflow => Error::ArithmeticOverflow,
            fixint::Error::Underflow => Error::Underflow,
            fixint::Error::DivisionByZero => Error::DivisionByZero,
            fixint::Error::NotInvertible => Error::NotInvertible,
            fixint::Error::InvalidEncoding => Error::InvalidEncoding,
        }
    }
}

#[cfg(feature = "ecdsa")]
impl From<Error> for signature::Error {
    fn from(err: Error) -> signature::Error {
        #[cfg(feature = "std")]
        {
            signature::Error::from_source(err)
        }
        #[cfg(not(feature = "std"))]
        {
            let _ = err;
            signature::Error::new()
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
