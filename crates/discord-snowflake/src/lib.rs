//! # discord-snowflake
//!
//! Codec for the 64-bit Snowflake identifiers the Discord API uses to name
//! every resource: messages, users, channels, guilds.
//!
//! ```text
//!  Bit Index:  63             22 21            17 16             12 11             0
//!              +----------------+----------------+-----------------+----------------+
//!  Field:      | timestamp (42) | worker ID (5)  | process ID (5)  | increment (12) |
//!              +----------------+----------------+-----------------+----------------+
//!              |<----- MSB ------------------ 64 bits ------------------ LSB ------>|
//! ```
//!
//! The API transmits IDs as JSON strings of decimal digits, since a full
//! 64-bit range does not survive a round trip through an IEEE-754 double.
//! [`Snowflake`] is the single point of translation between that wire form and
//! the integer used for comparison, sorting and epoch math.
//!
//! ```
//! use discord_snowflake::{DISCORD_EPOCH_MS, Snowflake};
//!
//! let id: Snowflake = "175928847299117063".parse().unwrap();
//! assert_eq!(id.timestamp(), 41_944_705_796);
//! assert_eq!(id.unix(), 41_944_705_796 + DISCORD_EPOCH_MS);
//! assert_eq!(id.worker_id(), 1);
//! assert_eq!(id.process_id(), 0);
//! assert_eq!(id.increment(), 7);
//! assert_eq!(id.to_string(), "175928847299117063");
//! ```
//!
//! ## Features
//!
//! - `std` (default): `SystemTime` conversions and `std::error::Error`.
//! - `serde`: string-encoded `Serialize`/`Deserialize`, plus the
//!   [`as_native`] adapter for integer columns.
//! - `tracing`: trace-level spans around string parsing.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod decimal;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::decimal::*;
pub use crate::error::*;
pub use crate::id::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
