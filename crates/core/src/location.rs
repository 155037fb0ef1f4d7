//! Strongly-typed location identity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Name of an inventory location (warehouse, store, depot).
///
/// The name is the location's identity within a batch and is never empty.
/// Surrounding whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationName(String);

impl LocationName {
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("location name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LocationName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LocationName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LocationName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationName> for String {
    fn from(value: LocationName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = LocationName::new("  Osaka DC ").unwrap();
        assert_eq!(name.as_str(), "Osaka DC");
    }

    #[test]
    fn rejects_blank_names() {
        assert!(LocationName::new("").is_err());
        assert!("   ".parse::<LocationName>().is_err());
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let ok: LocationName = serde_json::from_str("\"Kobe\"").unwrap();
        assert_eq!(ok.to_string(), "Kobe");

        let err = serde_json::from_str::<LocationName>("\" \"");
        assert!(err.is_err());
    }
}
