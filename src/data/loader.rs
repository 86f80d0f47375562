//! CSV Data Loader Module
//! Discovers the raw listing exports and merges them into a single frame
//! using Polars.

use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read input directory {0}: {1}")]
    ReadDir(PathBuf, std::io::Error),
    #[error("No CSV files matching '{0}*.csv' found")]
    NoInputFiles(String),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Handles discovery and loading of the raw CSV exports.
pub struct DataLoader {
    df: Option<DataFrame>,
    files: Vec<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            files: Vec::new(),
        }
    }

    /// Load every `<prefix>*.csv` under `dir` and concat them vertically.
    ///
    /// Every column is read as text; the exports disagree on types between
    /// files and the cleaning stage works on strings anyway. Files are
    /// combined diagonally so an export with extra columns still merges.
    pub fn load_dir(&mut self, dir: &Path, prefix: &str) -> Result<&DataFrame, LoaderError> {
        self.files = Self::discover(dir, prefix)?;
        if self.files.is_empty() {
            return Err(LoaderError::NoInputFiles(prefix.to_string()));
        }

        let mut frames = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let df = LazyCsvReader::new(file)
                .with_infer_schema_length(Some(0))
                .with_ignore_errors(true)
                .finish()?
                .collect()?;
            debug!(file = %file.display(), rows = df.height(), "loaded csv");
            frames.push(df.lazy());
        }

        let df = concat_lf_diagonal(&frames, UnionArgs::default())?.collect()?;
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    fn discover(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, LoaderError> {
        let entries = fs::read_dir(dir).map_err(|e| LoaderError::ReadDir(dir.to_path_buf(), e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| LoaderError::ReadDir(dir.to_path_buf(), e))?;
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with(prefix) && name.ends_with(".csv") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Get a reference to the merged DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Number of rows in the merged DataFrame.
    pub fn row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Number of files merged by the last load.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
