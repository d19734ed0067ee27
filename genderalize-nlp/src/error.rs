//! Pipeline configuration errors

use thiserror::Error;

/// Errors raised while configuring the rule-based pipeline
#[derive(Error, Debug)]
pub enum NlpError {
    /// A names file could not be read
    #[error("failed to read names file '{path}': {source}")]
    NamesFile {
        /// Path of the file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline configuration
pub type Result<T> = std::result::Result<T, NlpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_file_message() {
        let err = NlpError::NamesFile {
            path: "names.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read names file 'names.txt': missing"
        );
    }
}
