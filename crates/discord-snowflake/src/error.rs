/// A result type whose error defaults to [`FormatError`].
///
/// Only string-based construction is fallible. Every accessor and the
/// integer constructor are total.
pub type Result<T, E = FormatError> = core::result::Result<T, E>;

/// Errors produced while parsing the decimal wire form of a [`Snowflake`].
///
/// [`Snowflake`]: crate::Snowflake
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The input was the empty string.
    #[error("snowflake string is empty")]
    Empty,

    /// The input contained a byte outside `b'0'..=b'9'`.
    ///
    /// Signs and surrounding whitespace are rejected too.
    #[error("invalid byte {byte:#04x} at index {index} in snowflake string")]
    InvalidDigit {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte.
        index: usize,
    },

    /// The decimal value does not fit in 64 unsigned bits.
    #[error("snowflake string exceeds the 64-bit unsigned range")]
    Overflow,
}
