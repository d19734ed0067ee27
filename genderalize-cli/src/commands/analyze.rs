//! Analyze command implementation

use super::{build_record, GenderArg};
use crate::cli::GlobalArgs;
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use anyhow::Result;
use clap::Args;
use genderalize_api::Genderalizer;
use std::io::{self, Write};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Texts to analyze, each one a document
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include per-token annotations
    #[arg(short, long)]
    pub tokens: bool,

    /// Also rewrite each text towards this gender
    #[arg(short, long, value_enum, value_name = "GENDER")]
    pub change: Option<GenderArg>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let genderalizer = global.genderalizer(&config, false)?;
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        self.run(&genderalizer, format, config.output.pretty_json, io::stdout())
    }

    /// Analyze every text and write the results to `writer`
    pub fn run<W>(
        &self,
        genderalizer: &Genderalizer,
        format: OutputFormat,
        pretty: bool,
        writer: W,
    ) -> Result<()>
    where
        W: Write + Send + Sync + 'static,
    {
        let options = FormatOptions {
            tokens: self.tokens,
            pretty,
            rewrites: self.change.is_some(),
        };
        let mut formatter = create_formatter(format, writer, options);
        let target = self.change.map(Into::into);

        for text in &self.texts {
            let record = build_record(genderalizer, None, text, target)?;
            formatter.format_document(&record)?;
        }

        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;

    fn analyze(texts: &[&str], format: OutputFormat, change: Option<GenderArg>) -> String {
        let args = AnalyzeArgs {
            texts: texts.iter().map(|t| t.to_string()).collect(),
            format: Some(format),
            tokens: false,
            change,
        };
        let buffer = SharedBuffer::default();
        args.run(&Genderalizer::default(), format, false, buffer.clone())
            .unwrap();
        buffer.contents()
    }

    #[test]
    fn test_analyze_text_facts() {
        let output = analyze(&["Jason put down his coffee."], OutputFormat::Text, None);
        assert!(output.starts_with("Jason put down his coffee.\n"));
        assert!(output.contains("has_person: True"));
        assert!(output.contains("has_gendered_pronouns: True"));
        assert!(output.contains("has_gendered_nouns: False"));
        assert!(output.contains("is_gender_generalization: False"));
    }

    #[test]
    fn test_analyze_json_with_change() {
        let output = analyze(
            &["He is strong.", "Jason put down his coffee."],
            OutputFormat::Json,
            Some(GenderArg::Feminine),
        );
        let documents: serde_json::Value = serde_json::from_str(&output).unwrap();
        let documents = documents.as_array().unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0]["rewritten"], "She is strong.");
        assert_eq!(documents[0]["is_gender_generalization"], true);
        assert_eq!(documents[1]["rewritten"], "Jason put down his coffee.");
    }

    #[test]
    fn test_analyze_markdown() {
        let output = analyze(&["He is strong."], OutputFormat::Markdown, None);
        assert!(output.contains("| He is strong. |"));
        assert!(output.contains("*Total documents: 1, generalizations: 1*"));
    }
}
