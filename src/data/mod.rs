//! Reference data sources
//!
//! Loads the food registry, nutrient amounts and portion records once per run and
//! indexes them by food id.

pub mod catalog;
pub mod nutrients;
pub mod portions;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::StringRecord;
use thiserror::Error;

pub use catalog::{FoodCatalog, FoodRecord};
pub use nutrients::NutrientProfileStore;
pub use portions::{PortionRecord, PortionTable};

/// Data loading error types
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed record in {file} at line {line}: {reason}")]
    MalformedRecord {
        file: String,
        line: u64,
        reason: String,
    },
}

/// Result type for data loading
pub type DataResult<T> = Result<T, DataError>;

/// Open a data file, keeping the path in the error
pub(crate) fn open(path: &Path) -> DataResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// CSV reader for the headered data files; trailing columns are ignored
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

/// Parse one positional column of a CSV record
pub(crate) fn parse_column<T: FromStr>(
    record: &StringRecord,
    index: usize,
    column: &str,
    file: &str,
) -> DataResult<T> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let raw = record.get(index).ok_or_else(|| DataError::MalformedRecord {
        file: file.to_string(),
        line,
        reason: format!("missing column {} ({})", index + 1, column),
    })?;

    raw.trim().parse().map_err(|_| DataError::MalformedRecord {
        file: file.to_string(),
        line,
        reason: format!("invalid {}: {:?}", column, raw),
    })
}

/// The three read-only collaborators of a run
#[derive(Debug, Clone)]
pub struct DataSources {
    pub catalog: FoodCatalog,
    pub nutrients: NutrientProfileStore,
    pub portions: PortionTable,
}

impl DataSources {
    /// Load and index every source from disk
    pub fn load(registry: &Path, nutrients: &Path, portions: &Path) -> DataResult<Self> {
        let catalog = FoodCatalog::from_path(registry)?;
        let nutrients = NutrientProfileStore::from_path(nutrients)?;
        let portions = PortionTable::from_path(portions)?;

        tracing::info!(
            foods = catalog.len(),
            profiles = nutrients.len(),
            portion_foods = portions.len(),
            "Loaded reference data"
        );

        Ok(Self {
            catalog,
            nutrients,
            portions,
        })
    }
}
