//! Core error types

use thiserror::Error;

/// Errors raised while loading a lexicon or rewriting a sentence
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lexicon entry carries a label outside `m`, `f` and `n`
    #[error("invalid gender label '{label}' for phrase '{phrase}'")]
    InvalidLabel {
        /// The phrase the label was attached to
        phrase: String,
        /// The offending label
        label: String,
    },

    /// A lexicon key is empty or whitespace only
    #[error("lexicon contains an empty phrase")]
    EmptyPhrase,

    /// Two keys normalize to the same phrase but disagree on the label
    #[error("phrase '{phrase}' is listed as both '{first}' and '{second}'")]
    ConflictingEntry {
        /// Normalized phrase
        phrase: String,
        /// Label seen first
        first: String,
        /// Label seen later
        second: String,
    },

    /// The lexicon document is not a flat JSON object of strings
    #[error("failed to parse lexicon: {0}")]
    LexiconParse(#[from] serde_json::Error),

    /// The lexicon file could not be read
    #[error("failed to read lexicon '{path}': {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Pronouns can only be rewritten towards `m` or `f`
    #[error("target gender must be 'm' or 'f', got '{0}'")]
    InvalidTargetGender(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_label_display() {
        let error = CoreError::InvalidLabel {
            phrase: "aunt".to_string(),
            label: "x".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid gender label 'x' for phrase 'aunt'"
        );
    }

    #[test]
    fn test_conflicting_entry_display() {
        let error = CoreError::ConflictingEntry {
            phrase: "nurse".to_string(),
            first: "f".to_string(),
            second: "n".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "phrase 'nurse' is listed as both 'f' and 'n'"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: CoreError = json_error.into();
        assert!(matches!(error, CoreError::LexiconParse(_)));
        assert!(error.to_string().starts_with("failed to parse lexicon"));
    }

    #[test]
    fn test_invalid_target_display() {
        let error = CoreError::InvalidTargetGender("n".to_string());
        assert_eq!(error.to_string(), "target gender must be 'm' or 'f', got 'n'");
    }
}
