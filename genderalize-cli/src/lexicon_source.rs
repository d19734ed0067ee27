//! Lexicon source management for CLI

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use genderalize_core::Lexicon;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of the gender lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// The lexicon bundled with the binary
    Embedded,
    /// A JSON lexicon file
    External(PathBuf),
}

impl LexiconSource {
    /// Pick the source: command-line flag, then config file, then embedded
    pub fn resolve(flag: Option<&Path>, config: &CliConfig) -> CliResult<Self> {
        match flag.or(config.lexicon.path.as_deref()) {
            Some(path) if !path.is_file() => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Some(path) => Ok(LexiconSource::External(path.to_path_buf())),
            None => Ok(LexiconSource::Embedded),
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::Embedded => "Built-in lexicon".to_string(),
            LexiconSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the lexicon
    pub fn load(&self) -> CliResult<Arc<Lexicon>> {
        match self {
            LexiconSource::Embedded => Ok(Lexicon::embedded()),
            LexiconSource::External(path) => Ok(Arc::new(Lexicon::from_file(path)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_by_default() {
        let source = LexiconSource::resolve(None, &CliConfig::default()).unwrap();
        assert_eq!(source, LexiconSource::Embedded);
        assert_eq!(source.display_name(), "Built-in lexicon");
        assert!(!source.load().unwrap().is_empty());
    }

    #[test]
    fn test_flag_overrides_config() {
        let flag_file = NamedTempFile::new().unwrap();
        let config_file = NamedTempFile::new().unwrap();
        let mut config = CliConfig::default();
        config.lexicon.path = Some(config_file.path().to_path_buf());

        let source = LexiconSource::resolve(Some(flag_file.path()), &config).unwrap();
        assert_eq!(source, LexiconSource::External(flag_file.path().to_path_buf()));

        let source = LexiconSource::resolve(None, &config).unwrap();
        assert_eq!(source, LexiconSource::External(config_file.path().to_path_buf()));
    }

    #[test]
    fn test_missing_file() {
        let err = LexiconSource::resolve(Some(Path::new("/nonexistent.json")), &CliConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }
}
