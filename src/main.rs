//! marketprep - CSV Market-Listing Cleaner
//!
//! Merges raw market-listing CSV exports and normalizes names, opening
//! hours, closed-day lists and coordinates into one cleaned dataset.

mod clean;
mod data;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use data::{DataLoader, DataProcessor, DataWriter};

#[derive(Debug, Parser)]
#[command(name = "marketprep")]
#[command(about = "Merge and normalize market-listing CSV exports")]
struct Cli {
    /// Directory containing the raw CSV exports
    #[arg(long, default_value = "dataset")]
    input_dir: PathBuf,

    /// Only files whose name starts with this prefix are loaded
    #[arg(long, default_value = "pasar-malam-in-")]
    prefix: String,

    /// Path of the cleaned output CSV
    #[arg(long, default_value = "dataset/processed-markets.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut loader = DataLoader::new();
    loader
        .load_dir(&cli.input_dir, &cli.prefix)
        .context("loading input CSVs")?;
    info!(
        files = loader.file_count(),
        rows = loader.row_count(),
        "merged raw exports"
    );
    let df = loader.get_dataframe().context("no data loaded")?;

    let mut cleaned = DataProcessor::clean(df).context("cleaning dataset")?;
    info!(
        rows = cleaned.height(),
        columns = cleaned.width(),
        "cleaned dataset"
    );

    DataWriter::write_csv(&mut cleaned, &cli.output).context("writing output CSV")?;
    info!(output = %cli.output.display(), "done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_point_at_the_dataset_dir() {
        let cli = Cli::try_parse_from(["marketprep"]).expect("expected valid cli args");
        assert_eq!(cli.input_dir, PathBuf::from("dataset"));
        assert_eq!(cli.prefix, "pasar-malam-in-");
        assert_eq!(cli.output, PathBuf::from("dataset/processed-markets.csv"));
    }

    #[test]
    fn cli_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "marketprep",
            "--input-dir",
            "/tmp/raw",
            "--prefix",
            "markets-",
            "--output",
            "/tmp/out.csv",
        ])
        .expect("expected valid cli args");
        assert_eq!(cli.input_dir, PathBuf::from("/tmp/raw"));
        assert_eq!(cli.prefix, "markets-");
        assert_eq!(cli.output, PathBuf::from("/tmp/out.csv"));
    }
}
