//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepts the empty string or exactly ten decimal digits.
static VALID_PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^$|^\d{10}$").expect("Failed to compile phone number regex"));

/// A type-safe wrapper for contact phone numbers.
///
/// The accepted shapes are the empty string ("no phone on file") and a bare
/// ten-digit string with no symbols or separators, mirroring the persisted
/// model invariant: *if non-empty, exactly ten decimal digits*.
///
/// # Example
///
/// ```
/// use contacts_api::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// assert!(PhoneNumber::new("555-123-4567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is empty or
    /// exactly ten digit characters.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !VALID_PHONE_NUMBER.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Whether this is the empty placeholder rather than a number.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_accepts_empty() {
        let phone = PhoneNumber::new("").unwrap();
        assert!(phone.is_empty());
    }

    #[test]
    fn test_phone_requires_exactly_ten_digits() {
        assert!(PhoneNumber::new("0000000000").is_ok());
        assert!(PhoneNumber::new("123456789").is_err()); // 9 digits
        assert!(PhoneNumber::new("12345678901").is_err()); // 11 digits
        assert!(PhoneNumber::new("555-123-4567").is_err());
        assert!(PhoneNumber::new("+5551234567").is_err());
        assert!(PhoneNumber::new("555 123 456").is_err());
        assert!(PhoneNumber::new("55512345ab").is_err());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        assert_eq!(format!("{}", phone), "5551234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("5551234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5551234567\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: PhoneNumber = serde_json::from_str("\"5551234567\"").unwrap();
        assert_eq!(phone.as_str(), "5551234567");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
