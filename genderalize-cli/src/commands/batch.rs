//! Batch command implementation

use super::{build_record, GenderArg};
use crate::cli::GlobalArgs;
use crate::input::{resolve_patterns, Document, FileReader};
use crate::output::{create_formatter, DocumentRecord, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use genderalize_api::{Gender, Genderalizer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the batch command
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input files or patterns (supports glob), one document per line
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also rewrite each document towards this gender
    #[arg(short, long, value_enum, value_name = "GENDER")]
    pub change: Option<GenderArg>,

    /// Rewrite documents that are not gender generalizations too
    #[arg(short, long, requires = "change")]
    pub all: bool,

    /// Analyze the documents of each file in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Include per-token annotations
    #[arg(short, long)]
    pub tokens: bool,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config()?;
        let genderalizer = global.genderalizer(&config, self.all)?;
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        let parallel = self.parallel || config.processing.parallel;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut progress = ProgressReporter::new(global.quiet);
        self.run(
            &genderalizer,
            format,
            config.output.pretty_json,
            parallel,
            &mut progress,
            writer,
        )?;

        if let Some(path) = &self.output {
            log::info!("Results written to {}", path.display());
        }
        Ok(())
    }

    /// Analyze every line of every matched file and write the results
    pub fn run<W>(
        &self,
        genderalizer: &Genderalizer,
        format: OutputFormat,
        pretty: bool,
        parallel: bool,
        progress: &mut ProgressReporter,
        writer: W,
    ) -> Result<()>
    where
        W: Write + Send + Sync + 'static,
    {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let options = FormatOptions {
            tokens: self.tokens,
            pretty,
            rewrites: self.change.is_some(),
        };
        let mut formatter = create_formatter(format, writer, options);
        let target: Option<Gender> = self.change.map(Into::into);

        progress.init_files(files.len() as u64);
        let mut total = 0;
        for file in &files {
            let documents = FileReader::read_documents(file)?;
            log::debug!("{}: {} document(s)", file.display(), documents.len());

            let records = analyze_documents(genderalizer, &documents, target, parallel)
                .with_context(|| format!("Failed to analyze {}", file.display()))?;
            for record in &records {
                formatter.format_document(record)?;
            }

            total += records.len();
            progress.file_completed(&file.display().to_string(), records.len());
        }
        progress.finish();

        formatter.finish()?;
        log::info!("Analyzed {total} document(s)");
        Ok(())
    }
}

/// Records in document order, computed on the rayon pool when `parallel`
fn analyze_documents(
    genderalizer: &Genderalizer,
    documents: &[Document],
    target: Option<Gender>,
    parallel: bool,
) -> Result<Vec<DocumentRecord>> {
    let analyze = |document: &Document| {
        build_record(
            genderalizer,
            Some(document.source.clone()),
            &document.text,
            target,
        )
    };

    if parallel {
        documents.par_iter().map(analyze).collect()
    } else {
        documents.iter().map(analyze).collect()
    }
}
