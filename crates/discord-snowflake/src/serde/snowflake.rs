use crate::Snowflake;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use core::fmt;

/// Serializes as the decimal string the Discord API puts on the wire.
impl Serialize for Snowflake {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

/// Deserializes from a decimal string, or leniently from a non-negative
/// integer.
///
/// The input must be self-describing, since either shape is accepted.
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(SnowflakeVisitor)
    }
}

struct SnowflakeVisitor;

impl de::Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a snowflake as a decimal string or unsigned integer")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Snowflake::from_string(v).map_err(E::custom)
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Snowflake::from_raw(v))
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v)
            .map(Snowflake::from_raw)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

/// `#[serde(with = "as_native")]` adapter storing a snowflake as its native
/// `u64`, for backends with an unsigned integer column.
pub mod as_native {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::Snowflake;

    /// Serialize a snowflake as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Snowflake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails.
    pub fn deserialize<'de, D>(d: D) -> Result<Snowflake, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Snowflake::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatError;
    use alloc::{string::ToString, vec, vec::Vec};
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Message {
        id: Snowflake,
        channel_id: Snowflake,
        #[serde(default)]
        guild_id: Option<Snowflake>,
        #[serde(default)]
        mentions: Vec<Snowflake>,
    }

    #[test]
    fn serializes_as_decimal_string() {
        let msg = Message {
            id: Snowflake::from_raw(175928847299117063),
            channel_id: Snowflake::from_raw(u64::MAX),
            guild_id: None,
            mentions: vec![Snowflake::from_raw(0)],
        };
        let value = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "175928847299117063",
                "channel_id": "18446744073709551615",
                "guild_id": null,
                "mentions": ["0"],
            })
        );
    }

    #[test]
    fn deserializes_wire_payload() {
        let msg: Message = serde_json::from_str(
            r#"{"id":"175928847299117063","channel_id":"41771983423143937","guild_id":"41771983423143937"}"#,
        )
        .expect("deserialize");
        assert_eq!(msg.id, 175928847299117063);
        assert_eq!(msg.channel_id, 41771983423143937);
        assert_eq!(msg.guild_id, Some(Snowflake::from_raw(41771983423143937)));
        assert!(msg.mentions.is_empty());
    }

    #[test]
    fn accepts_native_integers() {
        let id: Snowflake = serde_json::from_value(json!(42)).expect("deserialize");
        assert_eq!(id, 42);
        let id: Snowflake = serde_json::from_value(json!(u64::MAX)).expect("deserialize");
        assert_eq!(id, Snowflake::MAX);
    }

    #[test]
    fn rejects_negative_integers() {
        let err = serde_json::from_value::<Snowflake>(json!(-1)).expect_err("should fail");
        assert!(err.to_string().contains("integer `-1`"), "{err}");
    }

    #[test]
    fn rejects_malformed_strings() {
        for (input, expected) in [
            ("", FormatError::Empty),
            (
                "12a3",
                FormatError::InvalidDigit {
                    byte: b'a',
                    index: 2,
                },
            ),
            ("99999999999999999999999999", FormatError::Overflow),
        ] {
            let err = serde_json::from_value::<Snowflake>(json!(input)).expect_err("should fail");
            assert_eq!(err.to_string(), expected.to_string());
        }
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_value::<Snowflake>(json!(1.5)).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!(true)).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!(null)).is_err());
    }

    #[test]
    fn string_roundtrip() {
        let id = Snowflake::from_raw(175928847299117063);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""175928847299117063""#);
        let back: Snowflake = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn native_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_native")]
            message_id: Snowflake,
        }
        let row = Row {
            message_id: Snowflake::from_raw(42),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"message_id":42}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn native_rejects_strings() {
        #[derive(Debug, Deserialize)]
        struct Row {
            #[serde(with = "as_native")]
            #[allow(dead_code)]
            message_id: Snowflake,
        }
        assert!(serde_json::from_value::<Row>(json!({"message_id": "42"})).is_err());
    }
}
