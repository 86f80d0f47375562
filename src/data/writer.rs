//! CSV Data Writer Module
//! Writes the cleaned frame to a single output CSV.

use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to create {0}: {1}")]
    Create(PathBuf, std::io::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Handles output of the cleaned dataset.
pub struct DataWriter;

impl DataWriter {
    pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), WriterError> {
        let mut file =
            File::create(path).map_err(|e| WriterError::Create(path.to_path_buf(), e))?;
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
        Ok(())
    }
}
