//! topsis - Rank a CSV or Excel dataset from the command line.
//!
//! ```text
//! topsis data.csv "1,1,1,2" "+,+,-,+" result.csv
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use topsis_ranker::adapters::dataset::{CsvResultWriter, DatasetError, DatasetReader};
use topsis_ranker::config::AppConfig;
use topsis_ranker::domain::analysis::{TopsisAnalyzer, TopsisError, ValidationOptions};

/// Rank alternatives with TOPSIS
#[derive(Parser, Debug)]
#[command(name = "topsis")]
#[command(version)]
#[command(about = "Rank the rows of a CSV or Excel decision matrix with TOPSIS")]
struct Cli {
    /// Input CSV or Excel file; first column identifies each alternative
    input_file: PathBuf,

    /// Comma-separated positive weights, one per criterion
    weights: String,

    /// Comma-separated impacts ('+' benefit, '-' cost), one per criterion
    impacts: String,

    /// Where to write the augmented CSV
    output_file: PathBuf,

    /// Strip whitespace around weight and impact tokens
    #[arg(long)]
    trim: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Dataset(#[from] DatasetError),

    #[error("{0}")]
    Analysis(#[from] TopsisError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = ValidationOptions {
        trim_tokens: cli.trim || configured_trimming(),
    };

    match run(&cli.input_file, &cli.weights, &cli.impacts, &cli.output_file, options) {
        Ok(()) => {
            info!(output = %cli.output_file.display(), "Result written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Reads `analysis.trim_tokens` from the environment, if set.
fn configured_trimming() -> bool {
    match AppConfig::load() {
        Ok(config) => config.analysis.trim_tokens,
        Err(e) => {
            debug!(error = %e, "Ignoring unreadable configuration");
            false
        }
    }
}

fn run(
    input: &Path,
    weights: &str,
    impacts: &str,
    output: &Path,
    options: ValidationOptions,
) -> Result<(), CliError> {
    let table = DatasetReader::read_path(input)?;
    let result = TopsisAnalyzer::evaluate(&table, weights, impacts, options)?;
    CsvResultWriter::write_path(&result, output)?;

    debug!(leaders = ?result.leaders(), "Ranking complete");
    Ok(())
}
