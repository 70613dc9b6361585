//! Dni value object.

use super::errors::InvalidReason;
use crate::validation::validate_dni;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A DNI that is known to be exactly 8 ASCII digits.
///
/// Unlike [`validate_dni`], the constructor does not accept blank input: a
/// `Dni` always holds a value.
///
/// # Example
///
/// ```
/// use pe_id_validator::domain::Dni;
///
/// let dni = Dni::new("45678912").unwrap();
/// assert_eq!(dni.as_str(), "45678912");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dni(String);

impl Dni {
    /// Create a new Dni, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReason::WrongLength` for blank input and otherwise the
    /// reason reported by [`validate_dni`].
    pub fn new(dni: impl Into<String>) -> Result<Self, InvalidReason> {
        let dni = dni.into();
        if dni.trim().is_empty() {
            return Err(InvalidReason::WrongLength);
        }

        let value = validate_dni(&dni).into_result()?;
        Ok(Self(value))
    }

    /// Get the DNI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Dni {
    type Err = InvalidReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for Dni {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Dni {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Dni::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
