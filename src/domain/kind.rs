//! Identifier kinds understood by the validators.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two identifier families issued in Peru.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Documento Nacional de Identidad, 8 digits.
    Dni,

    /// Registro Único de Contribuyentes, 8 or 11 digits with a check digit.
    Ruc,
}

impl IdentifierKind {
    /// Lengths accepted for this kind.
    pub fn allowed_lengths(&self) -> &'static [usize] {
        match self {
            Self::Dni => &[8],
            Self::Ruc => &[8, 11],
        }
    }

    /// Lowercase name used in logs and tool replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dni => "dni",
            Self::Ruc => "ruc",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dni" => Ok(Self::Dni),
            "ruc" => Ok(Self::Ruc),
            other => Err(format!("unknown identifier kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("dni".parse::<IdentifierKind>(), Ok(IdentifierKind::Dni));
        assert_eq!(" RUC ".parse::<IdentifierKind>(), Ok(IdentifierKind::Ruc));
        assert!("passport".parse::<IdentifierKind>().is_err());
    }

    #[test]
    fn test_allowed_lengths() {
        assert_eq!(IdentifierKind::Dni.allowed_lengths(), &[8]);
        assert_eq!(IdentifierKind::Ruc.allowed_lengths(), &[8, 11]);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&IdentifierKind::Ruc).unwrap();
        assert_eq!(json, "\"ruc\"");
        let kind: IdentifierKind = serde_json::from_str("\"dni\"").unwrap();
        assert_eq!(kind, IdentifierKind::Dni);
    }
}
