//! ObjectId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for document ids.
///
/// The document store assigns every record a 24-hex-character identifier.
/// Parsing validates the shape up front so that malformed route parameters
/// are rejected before any store round-trip.
///
/// # Example
///
/// ```
/// use contacts_api::domain::ObjectId;
///
/// let id = ObjectId::parse("64a1f0c2b5e9d83a4c7e2f10").unwrap();
/// assert_eq!(id.as_str(), "64a1f0c2b5e9d83a4c7e2f10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

/// Length of a document id in hex characters.
const OBJECT_ID_LEN: usize = 24;

impl ObjectId {
    /// Parse an ObjectId, validating that it is exactly 24 hex characters.
    ///
    /// Both lowercase and uppercase hex digits are accepted, matching the
    /// store's tolerant parsing.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the value is malformed.
    pub fn parse(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if !Self::is_valid(&id) {
            return Err(ValidationError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Validate the 24-hex-character shape.
    fn is_valid(id: &str) -> bool {
        id.len() == OBJECT_ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ObjectId::parse(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_valid() {
        let id = ObjectId::parse("64a1f0c2b5e9d83a4c7e2f10").unwrap();
        assert_eq!(id.as_str(), "64a1f0c2b5e9d83a4c7e2f10");
    }

    #[test]
    fn test_object_id_accepts_uppercase_hex() {
        assert!(ObjectId::parse("64A1F0C2B5E9D83A4C7E2F10").is_ok());
    }

    #[test]
    fn test_object_id_rejects_malformed() {
        assert!(ObjectId::parse("").is_err());
        assert!(ObjectId::parse("abc").is_err());
        assert!(ObjectId::parse("64a1f0c2b5e9d83a4c7e2f1").is_err()); // 23 chars
        assert!(ObjectId::parse("64a1f0c2b5e9d83a4c7e2f100").is_err()); // 25 chars
        assert!(ObjectId::parse("64a1f0c2b5e9d83a4c7e2g10").is_err()); // 'g'
        assert!(ObjectId::parse("64a1f0c2-5e9d83a4c7e2f10").is_err()); // '-'
    }

    #[test]
    fn test_object_id_display() {
        let id = ObjectId::parse("64a1f0c2b5e9d83a4c7e2f10").unwrap();
        assert_eq!(format!("{}", id), "64a1f0c2b5e9d83a4c7e2f10");
    }

    #[test]
    fn test_object_id_serialization() {
        let id = ObjectId::parse("64a1f0c2b5e9d83a4c7e2f10").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"64a1f0c2b5e9d83a4c7e2f10\"");
    }

    #[test]
    fn test_object_id_deserialization() {
        let id: ObjectId = serde_json::from_str("\"64a1f0c2b5e9d83a4c7e2f10\"").unwrap();
        assert_eq!(id.as_str(), "64a1f0c2b5e9d83a4c7e2f10");
    }

    #[test]
    fn test_object_id_deserialization_malformed_fails() {
        let result: Result<ObjectId, _> = serde_json::from_str("\"not-an-id\"");
        assert!(result.is_err());
    }
}
