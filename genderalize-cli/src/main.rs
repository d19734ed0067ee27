//! genderalize - detect and rewrite gender generalizations
//!
//! ```bash
//! genderalize detect "The programmer put down his laptop."
//! genderalize change f "Is he an astronaut?"
//! genderalize batch -i "corpus/*.txt" -f json -o results.json
//! ```

use clap::Parser;
use genderalize_cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.global.init_logging();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
