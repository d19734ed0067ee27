//! Gender labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender label attached to lexicon entries and tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    /// Masculine (`m`)
    #[serde(rename = "m")]
    Masculine,
    /// Feminine (`f`)
    #[serde(rename = "f")]
    Feminine,
    /// Neuter or unmarked (`n`)
    #[serde(rename = "n")]
    Neuter,
}

impl Gender {
    /// All labels in declaration order
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    /// Single letter label used in lexicon files
    pub fn label(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Neuter => "n",
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
        }
    }

    /// Masculine or feminine
    pub fn is_gendered(self) -> bool {
        matches!(self, Gender::Masculine | Gender::Feminine)
    }

    /// Parse a lexicon label, returning `None` for anything but `m`, `f`, `n`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "m" => Some(Gender::Masculine),
            "f" => Some(Gender::Feminine),
            "n" => Some(Gender::Neuter),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown gender label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError(pub String);

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender label '{}', expected m, f or n", self.0)
    }
}

impl std::error::Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::from_label(s).ok_or_else(|| ParseGenderError(s.to_string()))
    }
}

/// Render an optional annotation the way unset genders are reported: `""`
pub fn label_of(gender: Option<Gender>) -> &'static str {
    gender.map(Gender::label).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(Gender::from_label(gender.label()), Some(gender));
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(Gender::from_label("x"), None);
        assert_eq!(Gender::from_label("M"), None);
        assert_eq!(Gender::from_label(""), None);
        assert!("male".parse::<Gender>().is_err());
    }

    #[test]
    fn test_is_gendered() {
        assert!(Gender::Masculine.is_gendered());
        assert!(Gender::Feminine.is_gendered());
        assert!(!Gender::Neuter.is_gendered());
    }

    #[test]
    fn test_unset_label_is_empty() {
        assert_eq!(label_of(None), "");
        assert_eq!(label_of(Some(Gender::Feminine)), "f");
    }

    #[test]
    fn test_serde_uses_short_labels() {
        let json = serde_json::to_string(&Gender::Masculine).unwrap();
        assert_eq!(json, "\"m\"");
        let parsed: Gender = serde_json::from_str("\"n\"").unwrap();
        assert_eq!(parsed, Gender::Neuter);
    }
}
