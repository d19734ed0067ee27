//! Rule-based pipeline configuration

use crate::error::{NlpError, Result};
use crate::ner::parse_names;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for [`crate::RuleBasedPipeline`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// First names recognized in addition to the bundled list
    pub extra_names: Vec<String>,
    /// Load the bundled first-name list
    pub bundled_names: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extra_names: Vec::new(),
            bundled_names: true,
        }
    }
}

impl PipelineConfig {
    /// Add first names
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add the names listed in a file, one per line
    pub fn with_names_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let list = std::fs::read_to_string(path).map_err(|source| NlpError::NamesFile {
            path: path.display().to_string(),
            source,
        })?;
        let names: Vec<String> = parse_names(&list).map(str::to_string).collect();
        log::debug!("read {} names from {}", names.len(), path.display());
        Ok(self.with_names(names))
    }

    /// Disable the bundled first-name list
    pub fn without_bundled_names(mut self) -> Self {
        self.bundled_names = false;
        self
    }
}
