use core::time::Duration;
#[cfg(feature = "std")]
use std::time::{SystemTime, UNIX_EPOCH};

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: Duration = Duration::from_millis(DISCORD_EPOCH_MS);

/// [`DISCORD_EPOCH`] in milliseconds since the Unix epoch.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Converts Unix milliseconds into a [`SystemTime`].
///
/// Returns `None` if the instant is past what the platform's `SystemTime`
/// can represent.
#[cfg(feature = "std")]
pub fn system_time_from_unix_millis(millis: u64) -> Option<SystemTime> {
    UNIX_EPOCH.checked_add(Duration::from_millis(millis))
}

/// Converts a [`SystemTime`] into Unix milliseconds.
///
/// Instants before 1970 saturate to `0`, and instants past `u64::MAX`
/// milliseconds saturate to `u64::MAX`.
#[cfg(feature = "std")]
pub fn unix_millis_from_system_time(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
