//! Ruc value object.

use super::errors::InvalidReason;
use crate::validation::validate_ruc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The two RUC layouts issued by SUNAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RucFormat {
    /// Older 8-digit layout.
    EightDigit,
    /// Current 11-digit layout.
    ElevenDigit,
}

/// A RUC whose length and check digit have been verified.
///
/// # Example
///
/// ```
/// use pe_id_validator::domain::{Ruc, RucFormat};
///
/// let ruc = Ruc::new("20131312955").unwrap();
/// assert_eq!(ruc.format(), RucFormat::ElevenDigit);
/// assert_eq!(ruc.check_digit(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ruc(String);

impl Ruc {
    /// Create a new Ruc, validating length and checksum.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReason::WrongLength` for blank input and otherwise the
    /// reason reported by [`validate_ruc`].
    pub fn new(ruc: impl Into<String>) -> Result<Self, InvalidReason> {
        let ruc = ruc.into();
        if ruc.trim().is_empty() {
            return Err(InvalidReason::WrongLength);
        }

        let value = validate_ruc(&ruc).into_result()?;
        Ok(Self(value))
    }

    /// Get the RUC as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Which layout this RUC uses.
    pub fn format(&self) -> RucFormat {
        if self.0.len() == 11 {
            RucFormat::ElevenDigit
        } else {
            RucFormat::EightDigit
        }
    }

    /// The trailing check digit.
    pub fn check_digit(&self) -> u32 {
        // Constructor guarantees a non-empty run of ASCII digits
        self.0
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .unwrap_or_default()
    }
}

impl FromStr for Ruc {
    type Err = InvalidReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for Ruc {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Ruc {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ruc::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Ruc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruc_eleven_digit() {
        let ruc = Ruc::new("20100070970").unwrap();
        assert_eq!(ruc.format(), RucFormat::ElevenDigit);
        assert_eq!(ruc.check_digit(), 0);
    }

    #[test]
    fn test_ruc_eight_digit() {
        let ruc = Ruc::new("10023459").unwrap();
        assert_eq!(ruc.format(), RucFormat::EightDigit);
        assert_eq!(ruc.check_digit(), 9);
    }

    #[test]
    fn test_ruc_rejects_invalid() {
        assert_eq!(Ruc::new(""), Err(InvalidReason::WrongLength));
        assert_eq!(Ruc::new("2010007097A"), Err(InvalidReason::NotNumeric));
        assert_eq!(Ruc::new("201000709"), Err(InvalidReason::WrongLength));
        assert_eq!(Ruc::new("20100070971"), Err(InvalidReason::BadChecksum));
    }

    #[test]
    fn test_ruc_serialization() {
        let ruc = Ruc::new("20131312955").unwrap();
        assert_eq!(serde_json::to_string(&ruc).unwrap(), "\"20131312955\"");
    }

    #[test]
    fn test_ruc_deserialization() {
        let ruc: Ruc = serde_json::from_str("\"20131312955\"").unwrap();
        assert_eq!(ruc.as_str(), "20131312955");

        let result: Result<Ruc, _> = serde_json::from_str("\"20131312954\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_ruc_format_serialization() {
        let json = serde_json::to_string(&RucFormat::ElevenDigit).unwrap();
        assert_eq!(json, "\"eleven_digit\"");
    }
}
