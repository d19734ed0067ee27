//! Output formatting module

use anyhow::Result;
use genderalize_api::Analysis;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one block of facts per document
    Text,
    /// JSON array of documents
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Name as accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text with the four facts per document",
            OutputFormat::Json => "JSON array of documents with facts and annotations",
            OutputFormat::Markdown => "Markdown table of facts",
        }
    }

    /// All formats
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];
}

/// One analyzed document ready for output
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Where the document came from, e.g. `file.txt:3`
    pub source: Option<String>,
    /// Facts and annotations
    pub analysis: Analysis,
    /// Rewritten text, when a rewrite was requested
    pub rewritten: Option<String>,
}

/// Formatter settings shared by all formats
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Include per-token annotations
    pub tokens: bool,
    /// Pretty print JSON
    pub pretty: bool,
    /// Documents carry a rewritten text
    pub rewrites: bool,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document
    fn format_document(&mut self, record: &DocumentRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
    }
}

/// `True`/`False`, as printed by the `detect` command
pub fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
