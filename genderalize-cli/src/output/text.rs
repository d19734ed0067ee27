//! Plain text output formatter

use super::{flag, DocumentRecord, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - the text followed by its facts
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, record: &DocumentRecord) -> Result<()> {
        let analysis = &record.analysis;
        if let Some(source) = &record.source {
            writeln!(self.writer, "# {source}")?;
        }
        writeln!(self.writer, "{}", analysis.text)?;
        writeln!(self.writer, "has_person: {}", flag(analysis.has_person))?;
        writeln!(
            self.writer,
            "has_gendered_pronouns: {}",
            flag(analysis.has_gendered_pronouns)
        )?;
        writeln!(
            self.writer,
            "has_gendered_nouns: {}",
            flag(analysis.has_gendered_nouns)
        )?;
        writeln!(
            self.writer,
            "is_gender_generalization: {}",
            flag(analysis.is_gender_generalization)
        )?;
        if let Some(rewritten) = &record.rewritten {
            writeln!(self.writer, "rewritten: {rewritten}")?;
        }
        if self.options.tokens {
            for token in &analysis.tokens {
                let gender = if token.gender.is_empty() {
                    "-"
                } else {
                    token.gender.as_str()
                };
                writeln!(
                    self.writer,
                    "  {:<16} {:<6} {:<5} {}",
                    token.text.trim(),
                    token.pos,
                    token.tag,
                    gender
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
