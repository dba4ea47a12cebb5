use super::layout::{FieldLayout, write_bit_layout_debug};
use crate::{DISCORD_EPOCH_MS, FormatError, Result, parse_decimal};
use alloc::{format, string::String, vec, vec::Vec};
use core::{cmp::Ordering, fmt, str::FromStr};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 64-bit Discord Snowflake ID.
///
/// - 42 bits timestamp (ms since [`DISCORD_EPOCH`])
/// - 5 bits worker ID
/// - 5 bits process ID
/// - 12 bits increment
///
/// ```text
///  Bit Index:  63             22 21            17 16             12 11             0
///              +----------------+----------------+-----------------+----------------+
///  Field:      | timestamp (42) | worker ID (5)  | process ID (5)  | increment (12) |
///              +----------------+----------------+-----------------+----------------+
///              |<----- MSB ------------------ 64 bits ------------------ LSB ------>|
/// ```
///
/// Every `u64` is a valid Snowflake. Equality, ordering and hashing are those
/// of the raw integer, and since the timestamp occupies the high bits,
/// ordering by value is ordering by creation time.
///
/// [`DISCORD_EPOCH`]: crate::DISCORD_EPOCH
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Snowflake {
    id: u64,
}

impl Snowflake {
    /// The zero ID. Every field is zero.
    pub const MIN: Self = Self::from_raw(0);

    /// The largest representable ID. Every field is at its maximum.
    pub const MAX: Self = Self::from_raw(u64::MAX);

    /// Bitmask for extracting the 42-bit timestamp field. Occupies bits 22
    /// through 63.
    pub const TIMESTAMP_MASK: u64 = (1 << 42) - 1;

    /// Bitmask for extracting the 5-bit worker ID field. Occupies bits 17
    /// through 21.
    pub const WORKER_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for extracting the 5-bit process ID field. Occupies bits 12
    /// through 16.
    pub const PROCESS_ID_MASK: u64 = (1 << 5) - 1;

    /// Bitmask for extracting the 12-bit increment field. Occupies bits 0
    /// through 11.
    pub const INCREMENT_MASK: u64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: u64 = 22;

    /// Number of bits to shift the worker ID to its correct position (bit 17).
    pub const WORKER_ID_SHIFT: u64 = 17;

    /// Number of bits to shift the process ID to its correct position (bit 12).
    pub const PROCESS_ID_SHIFT: u64 = 12;

    /// Number of bits to shift the increment field (bit 0).
    pub const INCREMENT_SHIFT: u64 = 0;

    /// Wraps a raw 64-bit value verbatim.
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Wraps a raw 64-bit value verbatim. Alias of [`Snowflake::from_raw`].
    pub const fn from_integer(value: u64) -> Self {
        Self::from_raw(value)
    }

    /// Returns the raw 64-bit value.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Parses the decimal wire form of an ID.
    ///
    /// Any 64-bit pattern is accepted. Leading zeros are allowed, signs and
    /// whitespace are not.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if `text` is empty, contains a byte other
    /// than an ASCII digit, or exceeds [`u64::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use discord_snowflake::{FormatError, Snowflake};
    ///
    /// let id = Snowflake::from_string("175928847299117063").unwrap();
    /// assert_eq!(id, 175928847299117063);
    /// assert_eq!(Snowflake::from_string(""), Err(FormatError::Empty));
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", err(level = "debug")))]
    pub fn from_string(text: &str) -> Result<Self> {
        parse_decimal(text).map(Self::from_raw)
    }

    /// Packs the four fields into an ID.
    ///
    /// Each field is masked to its width. In debug builds an out-of-range
    /// field panics instead.
    ///
    /// # Example
    ///
    /// ```
    /// use discord_snowflake::Snowflake;
    ///
    /// let id = Snowflake::from_components(41_944_705_796, 1, 0, 7);
    /// assert_eq!(id.to_raw(), 175928847299117063);
    /// ```
    pub const fn from_components(
        timestamp: u64,
        worker_id: u8,
        process_id: u8,
        increment: u16,
    ) -> Self {
        debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
        debug_assert!(
            (worker_id as u64) <= Self::WORKER_ID_MASK,
            "worker_id overflow"
        );
        debug_assert!(
            (process_id as u64) <= Self::PROCESS_ID_MASK,
            "process_id overflow"
        );
        debug_assert!(
            (increment as u64) <= Self::INCREMENT_MASK,
            "increment overflow"
        );
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let worker_id = (worker_id as u64 & Self::WORKER_ID_MASK) << Self::WORKER_ID_SHIFT;
        let process_id = (process_id as u64 & Self::PROCESS_ID_MASK) << Self::PROCESS_ID_SHIFT;
        let increment = (increment as u64 & Self::INCREMENT_MASK) << Self::INCREMENT_SHIFT;
        Self::from_raw(timestamp | worker_id | process_id | increment)
    }

    /// Returns the smallest ID minted at the given Unix millisecond.
    ///
    /// Useful as a `before`/`after` bound when paginating by time. Instants
    /// before the Discord epoch clamp to [`Snowflake::MIN`] and instants past
    /// the 42-bit timestamp range clamp to the last representable
    /// millisecond.
    pub const fn from_unix_millis(millis: u64) -> Self {
        let since_epoch = millis.saturating_sub(DISCORD_EPOCH_MS);
        let timestamp = if since_epoch > Self::TIMESTAMP_MASK {
            Self::TIMESTAMP_MASK
        } else {
            since_epoch
        };
        Self::from_components(timestamp, 0, 0, 0)
    }

    /// Extracts the timestamp from the packed ID, in milliseconds since the
    /// Discord epoch. See [`Snowflake::unix`] for Unix time.
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Returns the creation time in Unix milliseconds.
    pub const fn unix(&self) -> u64 {
        self.timestamp() + DISCORD_EPOCH_MS
    }

    /// Extracts the worker ID from the packed ID.
    pub const fn worker_id(&self) -> u8 {
        ((self.id >> Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK) as u8
    }

    /// Extracts the process ID from the packed ID.
    pub const fn process_id(&self) -> u8 {
        ((self.id >> Self::PROCESS_ID_SHIFT) & Self::PROCESS_ID_MASK) as u8
    }

    /// Extracts the increment from the packed ID.
    pub const fn increment(&self) -> u16 {
        ((self.id >> Self::INCREMENT_SHIFT) & Self::INCREMENT_MASK) as u16
    }

    /// Returns the maximum possible value for the timestamp field.
    pub const fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK
    }

    /// Returns the maximum possible value for the worker_id field.
    pub const fn max_worker_id() -> u8 {
        Self::WORKER_ID_MASK as u8
    }

    /// Returns the maximum possible value for the process_id field.
    pub const fn max_process_id() -> u8 {
        Self::PROCESS_ID_MASK as u8
    }

    /// Returns the maximum possible value for the increment field.
    pub const fn max_increment() -> u16 {
        Self::INCREMENT_MASK as u16
    }

    /// Returns the ID as a zero-padded 20-digit string.
    ///
    /// Padded strings sort lexicographically in the same order as the IDs.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.id)
    }

    pub(super) fn fields(&self) -> Vec<FieldLayout> {
        vec![
            FieldLayout {
                name: "timestamp",
                bits: 42,
                value: self.timestamp(),
            },
            FieldLayout {
                name: "worker_id",
                bits: 5,
                value: self.worker_id() as u64,
            },
            FieldLayout {
                name: "process_id",
                bits: 5,
                value: self.process_id() as u64,
            },
            FieldLayout {
                name: "increment",
                bits: 12,
                value: self.increment() as u64,
            },
        ]
    }
}

#[cfg(feature = "std")]
impl Snowflake {
    /// Returns the creation time as a [`SystemTime`](std::time::SystemTime).
    pub fn created_at(&self) -> std::time::SystemTime {
        // unix() < 2^43 ms, within range of every platform's SystemTime
        std::time::UNIX_EPOCH + core::time::Duration::from_millis(self.unix())
    }

    /// Returns the smallest ID minted at `time`, clamped like
    /// [`Snowflake::from_unix_millis`].
    pub fn from_system_time(time: std::time::SystemTime) -> Self {
        Self::from_unix_millis(crate::unix_millis_from_system_time(time))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bit_layout_debug(f, self)
    }
}

impl FromStr for Snowflake {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Snowflake {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.id
    }
}

impl PartialEq<u64> for Snowflake {
    fn eq(&self, other: &u64) -> bool {
        self.id == *other
    }
}

impl PartialEq<Snowflake> for u64 {
    fn eq(&self, other: &Snowflake) -> bool {
        *self == other.id
    }
}

impl PartialOrd<u64> for Snowflake {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.id.partial_cmp(other)
    }
}

impl PartialOrd<Snowflake> for u64 {
    fn partial_cmp(&self, other: &Snowflake) -> Option<Ordering> {
        self.partial_cmp(&other.id)
    }
}
