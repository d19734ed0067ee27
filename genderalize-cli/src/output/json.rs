//! JSON output formatter

use super::{DocumentRecord, FormatOptions, OutputFormatter};
use anyhow::Result;
use genderalize_api::{EntityDTO, TokenDTO};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    documents: Vec<serde_json::Value>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData<'a> {
    /// Where the document came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    /// The document text
    pub text: &'a str,
    /// A person is named
    pub has_person: bool,
    /// Gendered pronouns are present
    pub has_gendered_pronouns: bool,
    /// Gendered nouns are present
    pub has_gendered_nouns: bool,
    /// The document is a gender generalization
    pub is_gender_generalization: bool,
    /// Rewritten text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten: Option<&'a str>,
    /// Recognized entities
    pub entities: &'a [EntityDTO],
    /// Annotated tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<&'a [TokenDTO]>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, record: &DocumentRecord) -> Result<()> {
        let analysis = &record.analysis;
        let data = DocumentData {
            source: record.source.as_deref(),
            text: &analysis.text,
            has_person: analysis.has_person,
            has_gendered_pronouns: analysis.has_gendered_pronouns,
            has_gendered_nouns: analysis.has_gendered_nouns,
            is_gender_generalization: analysis.is_gender_generalization,
            rewritten: record.rewritten.as_deref(),
            entities: &analysis.entities,
            tokens: self.options.tokens.then_some(analysis.tokens.as_slice()),
        };
        self.documents.push(serde_json::to_value(data)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
