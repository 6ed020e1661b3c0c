//! Error types.
use core::fmt;
#[cfg(feature = "std")]
use std::error;

/// Size-validation error returned when a cipher is constructed from a key
/// or IV the algorithm does not permit.
///
/// The key must be 8–32 bytes and a multiple of 4; the IV must be a multiple
/// of 4; together they must not exceed 48 bytes. Checks run in that order and
/// the first violated constraint is reported.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeySizeError {
    /// Key length is not a multiple of 4 bytes.
    KeyAlignment,
    /// IV length is not a multiple of 4 bytes.
    IvAlignment,
    /// Key is shorter than 8 bytes.
    KeyTooShort,
    /// Key is longer than 32 bytes.
    KeyTooLong,
    /// Key and IV total more than 48 bytes.
    CombinedTooLong,
}

impl fmt::Display for KeySizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeySizeError::KeyAlignment => "key size must be a multiple of 4",
            KeySizeError::IvAlignment => "iv size must be a multiple of 4",
            KeySizeError::KeyTooShort => "key size must be >= 8",
            KeySizeError::KeyTooLong => "key size must be <= 32",
            KeySizeError::CombinedTooLong => "combined key and iv sizes must be <= 48",
        })
    }
}

#[cfg(feature = "std")]
impl error::Error for KeySizeError {}
