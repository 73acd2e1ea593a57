use std::fmt;

use crate::{ENCODED_LEN, SIZE};

/// Error converting a string or byte slice into an identifier.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The string is not a valid (possibly shortened) encoding.
    InvalidEncoding(EncodingError),

    /// The byte slice is not exactly [`SIZE`] bytes long.
    InvalidLength {
        /// Length of the rejected slice.
        len: usize,
    },
}

/// Reason a string was rejected by the decoder.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum EncodingError {
    /// The string has more than [`ENCODED_LEN`] bytes.
    TooLong {
        /// Length of the rejected string in bytes.
        len: usize,
    },

    /// The string contains a byte outside the variant's alphabet.
    InvalidSymbol {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte within the input.
        offset: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding(reason) => write!(f, "invalid encoding: {}", reason),
            Self::InvalidLength { len } => {
                write!(f, "invalid length: expected {} bytes, got {}", SIZE, len)
            }
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { len } => {
                write!(f, "{} bytes exceed {} symbols", len, ENCODED_LEN)
            }
            Self::InvalidSymbol { byte, offset } => {
                write!(f, "illegal symbol {:#04x} at offset {}", byte, offset)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<EncodingError> for Error {
    fn from(src: EncodingError) -> Self {
        Self::InvalidEncoding(src)
    }
}
