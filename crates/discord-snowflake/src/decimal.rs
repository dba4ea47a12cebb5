use crate::{FormatError, Result};

/// Parses a string of ASCII decimal digits into a `u64`.
///
/// Unlike [`u64::from_str`](core::str::FromStr), this rejects a leading `+`,
/// so the accepted language is exactly `[0-9]+` within the `u64` range.
/// Leading zeros are accepted.
///
/// # Errors
///
/// - [`FormatError::Empty`] if `text` is empty
/// - [`FormatError::InvalidDigit`] for the first byte outside `0-9`
/// - [`FormatError::Overflow`] if the value exceeds [`u64::MAX`]
///
/// # Example
///
/// ```
/// use discord_snowflake::{FormatError, parse_decimal};
///
/// assert_eq!(parse_decimal("0042"), Ok(42));
/// assert_eq!(
///     parse_decimal("+1"),
///     Err(FormatError::InvalidDigit { byte: b'+', index: 0 })
/// );
/// ```
pub fn parse_decimal(text: &str) -> Result<u64> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(FormatError::Empty);
    }

    let mut value: u64 = 0;
    let mut overflowed = false;
    for (index, &byte) in bytes.iter().enumerate() {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as u64,
            _ => return Err(FormatError::InvalidDigit { byte, index }),
        };
        // Keep scanning after an overflow so a bad byte later on still wins.
        if !overflowed {
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => value = v,
                None => overflowed = true,
            }
        }
    }

    if overflowed {
        return Err(FormatError::Overflow);
    }
    Ok(value)
}
