//! Error types.

use core::fmt;

/// Result type with the `tzhash` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by decoding and inversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Malformed byte input.
    InvalidInput(InvalidInput),

    /// Inverse of the zero field element, or of a matrix whose determinant is zero.
    DivisionByZero,
}

/// What exactly was wrong with the input bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum InvalidInput {
    /// A field element encoding was not 16 bytes long.
    FieldElementLength {
        /// Length of the rejected buffer.
        actual: usize,
    },

    /// A field element encoding had bit 127 set.
    FieldElementOverflow,

    /// A matrix encoding was not 64 bytes long.
    MatrixLength {
        /// Length of the rejected buffer.
        actual: usize,
    },

    /// A hash was not 64 bytes long.
    HashLength {
        /// Position of the rejected hash in a hash list, if it came from one.
        index: Option<usize>,

        /// Length of the rejected buffer.
        actual: usize,
    },

    /// No hashes were given to combine.
    EmptyHashList,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Error::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::FieldElementLength { actual } => {
                write!(f, "field element must be 16 bytes, got {actual}")
            }
            InvalidInput::FieldElementOverflow => {
                f.write_str("field element has its most significant bit set")
            }
            InvalidInput::MatrixLength { actual } => {
                write!(f, "matrix must be 64 bytes, got {actual}")
            }
            InvalidInput::HashLength {
                index: Some(index),
                actual,
            } => write!(f, "hash #{index} must be 64 bytes, got {actual}"),
            InvalidInput::HashLength {
                index: None,
                actual,
            } => write!(f, "hash must be 64 bytes, got {actual}"),
            InvalidInput::EmptyHashList => f.write_str("empty hash list"),
        }
    }
}

impl core::error::Error for Error {}

impl core::error::Error for InvalidInput {}

impl From<InvalidInput> for Error {
    #[inline]
    fn from(err: InvalidInput) -> Self {
        Error::InvalidInput(err)
    }
}
