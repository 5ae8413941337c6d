use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current server time. Timestamps are never taken from clients.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

/// Client-facing identity of a stored record.
///
/// A random (v4) UUID rendered in the canonical 36-character hyphenated
/// form. Only `folio-db` ever sees the storage engine's native key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

/// Returned when a string is not a canonical record id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid record id: {0}")]
pub struct InvalidRecordId(pub String);

impl RecordId {
    /// Length of the canonical hyphenated rendering.
    pub const TEXT_LEN: usize = 36;

    /// Generate a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    /// Accepts only the hyphenated form; braced, URN and simple forms that
    /// `uuid` would otherwise parse are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::TEXT_LEN {
            return Err(InvalidRecordId(s.to_string()));
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidRecordId(s.to_string()))
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<RecordId> for Uuid {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_canonical() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), RecordId::TEXT_LEN);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let id = RecordId::new();
        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_storage_style_and_garbage_ids() {
        assert!("64b7f0c2e4b0a1a2b3c4d5e6".parse::<RecordId>().is_err());
        assert!("not-an-id".parse::<RecordId>().is_err());
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn rejects_non_hyphenated_uuid_forms() {
        let id = RecordId::new();
        let simple = id.as_uuid().simple().to_string();
        let braced = format!("{{{id}}}");
        assert!(simple.parse::<RecordId>().is_err());
        assert!(braced.parse::<RecordId>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = RecordId::new();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
    }
}
