//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// One line-document of an input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// `path:line`, 1-based line number
    pub source: String,
    /// The line text without its line terminator
    pub text: String,
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Every non-blank line of a file as a document
    pub fn read_documents(path: &Path) -> Result<Vec<Document>> {
        let content = Self::read_text(path)?;
        let documents = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| Document {
                source: format!("{}:{}", path.display(), i + 1),
                text: line.to_string(),
            })
            .collect();

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "He is strong.\nShe is an astronaut.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_documents_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("docs.txt");
        fs::write(&file_path, "He is strong.\n\n   \r\nHer.\r\n").unwrap();

        let documents = FileReader::read_documents(&file_path).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].text, "He is strong.");
        assert!(documents[0].source.ends_with("docs.txt:1"));
        assert_eq!(documents[1].text, "Her.");
        assert!(documents[1].source.ends_with("docs.txt:4"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
        assert!(FileReader::read_documents(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.txt");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(FileReader::read_documents(&file_path).is_err());
    }
}
