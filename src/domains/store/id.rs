//! Opaque record identifiers.

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a document.
///
/// Backed by a 12-byte ObjectId and rendered as 24 lowercase hex characters
/// in text and JSON. Callers may only compare, print and parse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(ObjectId);

/// Error returned when text is not a valid [`RecordId`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid record id '{input}': expected 24 hexadecimal characters")]
pub struct InvalidRecordId {
    input: String,
}

impl RecordId {
    /// Generate a fresh, unique identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// The underlying ObjectId, for backends that store it natively.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for RecordId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self).map_err(|_| InvalidRecordId {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_24_hex_chars() {
        let id = RecordId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 24);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(text.parse::<RecordId>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-an-id".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
        assert!("64b7f0c2a1b2c3d4e5f6a7b".parse::<RecordId>().is_err());

        let err = "zzzzzzzzzzzzzzzzzzzzzzzz".parse::<RecordId>().unwrap_err();
        assert!(err.to_string().contains("zzzzzzzzzzzzzzzzzzzzzzzz"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id: RecordId = "64b7f0c2a1b2c3d4e5f6a7b8".parse().unwrap();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("64b7f0c2a1b2c3d4e5f6a7b8"));

        let back: RecordId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
