//! Gender lexicon: lowercase word or phrase to gender label
//!
//! A lexicon is loaded once, validated up front and then shared read-only
//! (usually behind an `Arc`) by every request.

use crate::error::{CoreError, Result};
use crate::gender::Gender;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Bundled lexicon
static EMBEDDED: OnceLock<Arc<Lexicon>> = OnceLock::new();

/// Source text of the bundled lexicon
pub const EMBEDDED_JSON: &str = include_str!("../data/words.json");

/// Immutable phrase to gender mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: BTreeMap<String, Gender>,
}

/// Number of entries per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    /// Entries labelled `m`
    pub masculine: usize,
    /// Entries labelled `f`
    pub feminine: usize,
    /// Entries labelled `n`
    pub neuter: usize,
}

impl LabelCounts {
    /// Total number of entries
    pub fn total(&self) -> usize {
        self.masculine + self.feminine + self.neuter
    }
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled lexicon, parsed once per process
    pub fn embedded() -> Arc<Lexicon> {
        EMBEDDED
            .get_or_init(|| match Lexicon::from_json_str(EMBEDDED_JSON) {
                Ok(lexicon) => {
                    log::debug!("loaded embedded lexicon with {} entries", lexicon.len());
                    Arc::new(lexicon)
                }
                // `test_embedded_json_is_valid` guards the bundled file;
                // an empty lexicon matches nothing
                Err(e) => {
                    log::error!("failed to load embedded lexicon: {e}");
                    Arc::new(Lexicon::new())
                }
            })
            .clone()
    }

    /// Parse a flat JSON object of `phrase: label` pairs
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Parse a lexicon from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
        Self::from_entries(raw)
    }

    /// Load a lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let lexicon = Self::from_json_str(&content)?;
        log::debug!(
            "loaded lexicon '{}' with {} entries",
            path.display(),
            lexicon.len()
        );
        Ok(lexicon)
    }

    /// Build from `(phrase, label)` pairs, validating every label
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for (phrase, label) in entries {
            let (phrase, label) = (phrase.as_ref(), label.as_ref());
            let gender = Gender::from_label(label).ok_or_else(|| CoreError::InvalidLabel {
                phrase: phrase.to_string(),
                label: label.to_string(),
            })?;
            lexicon.insert(phrase, gender)?;
        }
        Ok(lexicon)
    }

    fn insert(&mut self, phrase: &str, gender: Gender) -> Result<()> {
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return Err(CoreError::EmptyPhrase);
        }
        if normalized != phrase {
            log::debug!("normalized lexicon phrase '{phrase}' to '{normalized}'");
        }

        match self.entries.get(&normalized) {
            Some(&existing) if existing != gender => Err(CoreError::ConflictingEntry {
                phrase: normalized,
                first: existing.label().to_string(),
                second: gender.label().to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(normalized, gender);
                Ok(())
            }
        }
    }

    /// Label for a phrase, looked up case-insensitively
    pub fn get(&self, phrase: &str) -> Option<Gender> {
        self.entries.get(&normalize(phrase)).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in phrase order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Gender)> {
        self.entries.iter().map(|(phrase, &gender)| (phrase.as_str(), gender))
    }

    /// Count entries per label
    pub fn counts(&self) -> LabelCounts {
        self.entries
            .values()
            .fold(LabelCounts::default(), |mut counts, gender| {
                match gender {
                    Gender::Masculine => counts.masculine += 1,
                    Gender::Feminine => counts.feminine += 1,
                    Gender::Neuter => counts.neuter += 1,
                }
                counts
            })
    }

    /// Serialize back to the flat JSON format
    pub fn to_json_pretty(&self) -> Result<String> {
        let map: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(phrase, gender)| (phrase.as_str(), gender.label()))
            .collect();
        Ok(serde_json::to_string_pretty(&map)?)
    }
}

/// Lowercase, trim and collapse inner whitespace
fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_json_str() {
        let lexicon =
            Lexicon::from_json_str(r#"{"he": "m", "she": "f", "they": "n", "actress": "f"}"#)
                .unwrap();
        assert_eq!(lexicon.len(), 4);
        assert_eq!(lexicon.get("he"), Some(Gender::Masculine));
        assert_eq!(lexicon.get("SHE"), Some(Gender::Feminine));
        assert_eq!(lexicon.get("they"), Some(Gender::Neuter));
        assert_eq!(lexicon.get("astronaut"), None);
    }

    #[test]
    fn test_invalid_label_fails_fast() {
        let result = Lexicon::from_json_str(r#"{"he": "m", "ze": "x"}"#);
        match result {
            Err(CoreError::InvalidLabel { phrase, label }) => {
                assert_eq!(phrase, "ze");
                assert_eq!(label, "x");
            }
            other => panic!("expected InvalidLabel, got {other:?}"),
        }
    }

    #[test]
    fn test_non_string_label_is_parse_error() {
        let result = Lexicon::from_json_str(r#"{"he": 1}"#);
        assert!(matches!(result, Err(CoreError::LexiconParse(_))));
    }

    #[test]
    fn test_empty_phrase_rejected() {
        let result = Lexicon::from_entries([("  ", "m")]);
        assert!(matches!(result, Err(CoreError::EmptyPhrase)));
    }

    #[test]
    fn test_keys_are_normalized() {
        let lexicon = Lexicon::from_entries([("Great  Aunt", "f")]).unwrap();
        assert_eq!(lexicon.iter().next(), Some(("great aunt", Gender::Feminine)));
        assert_eq!(lexicon.get("great aunt"), Some(Gender::Feminine));
    }

    #[test]
    fn test_conflicting_normalized_keys() {
        let result = Lexicon::from_entries([("Nurse", "f"), ("nurse", "n")]);
        assert!(matches!(result, Err(CoreError::ConflictingEntry { .. })));

        let agreeing = Lexicon::from_entries([("Nurse", "n"), ("nurse", "n")]).unwrap();
        assert_eq!(agreeing.len(), 1);
    }

    #[test]
    fn test_counts() {
        let lexicon =
            Lexicon::from_entries([("he", "m"), ("him", "m"), ("she", "f"), ("it", "n")]).unwrap();
        let counts = lexicon.counts();
        assert_eq!(counts.masculine, 2);
        assert_eq!(counts.feminine, 1);
        assert_eq!(counts.neuter, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"uncle": "m", "aunt": "f"}}"#).unwrap();

        let lexicon = Lexicon::from_file(file.path()).unwrap();
        assert_eq!(lexicon.get("uncle"), Some(Gender::Masculine));
    }

    #[test]
    fn test_from_missing_file() {
        let result = Lexicon::from_file("/nonexistent/words.json");
        match result {
            Err(CoreError::Io { path, .. }) => assert!(path.contains("words.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_reader() {
        let data = br#"{"fireman": "m"}"#;
        let lexicon = Lexicon::from_reader(&data[..]).unwrap();
        assert_eq!(lexicon.get("fireman"), Some(Gender::Masculine));
    }

    #[test]
    fn test_json_round_trip() {
        let lexicon = Lexicon::from_entries([("he", "m"), ("she", "f")]).unwrap();
        let json = lexicon.to_json_pretty().unwrap();
        assert_eq!(Lexicon::from_json_str(&json).unwrap(), lexicon);
    }

    #[test]
    fn test_embedded_json_is_valid() {
        let lexicon = Lexicon::from_json_str(EMBEDDED_JSON).unwrap();
        assert_eq!(lexicon.len(), Lexicon::embedded().len());
    }

    #[test]
    fn test_embedded_lexicon_loads() {
        let lexicon = Lexicon::embedded();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.get("he"), Some(Gender::Masculine));
        assert_eq!(lexicon.get("herself"), Some(Gender::Feminine));
        assert_eq!(lexicon.get("actor"), Some(Gender::Neuter));
        assert_eq!(lexicon.get("great aunt"), Some(Gender::Feminine));
        // Shared, not reparsed
        assert!(Arc::ptr_eq(&lexicon, &Lexicon::embedded()));
    }
}
