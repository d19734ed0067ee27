//! Markdown output formatter

use super::{DocumentRecord, FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs documents as a table of facts
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    document_count: usize,
    generalization_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            document_count: 0,
            generalization_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        write!(
            self.writer,
            "| # | Text | Person | Gendered pronouns | Gendered nouns | Generalization |"
        )?;
        if self.options.rewrites {
            write!(self.writer, " Rewritten |")?;
        }
        writeln!(self.writer)?;
        write!(self.writer, "|---|---|---|---|---|---|")?;
        if self.options.rewrites {
            write!(self.writer, "---|")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, record: &DocumentRecord) -> Result<()> {
        if self.document_count == 0 {
            self.write_header()?;
        }
        self.document_count += 1;

        let analysis = &record.analysis;
        if analysis.is_gender_generalization {
            self.generalization_count += 1;
        }

        let generalization = if analysis.is_gender_generalization {
            "**yes**"
        } else {
            "no"
        };
        write!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} |",
            self.document_count,
            escape(&analysis.text),
            yes_no(analysis.has_person),
            yes_no(analysis.has_gendered_pronouns),
            yes_no(analysis.has_gendered_nouns),
            generalization
        )?;
        if self.options.rewrites {
            write!(
                self.writer,
                " {} |",
                escape(record.rewritten.as_deref().unwrap_or_default())
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total documents: {}, generalizations: {}*",
            self.document_count, self.generalization_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
