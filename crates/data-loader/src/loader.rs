//! Dataset loading from the movie CSV.
//!
//! Loading happens once, before the service starts answering requests:
//! 1. Check the source exists (a missing file is the one fatal error)
//! 2. Read the header and locate the known columns
//! 3. Read every raw row
//! 4. Coerce rows into `MovieRecord`s in parallel, keeping source order

use crate::error::{DataLoadError, Result};
use crate::parser::ColumnMap;
use crate::types::{Dataset, MovieRecord};
use csv::{ByteRecord, ReaderBuilder};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

impl Dataset {
    /// Load the catalog from a CSV file on disk.
    ///
    /// Fails only when the file is missing or cannot be read as CSV at all.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        info!("Loading movie dataset from {}", path.display());
        let file = File::open(path)?;
        Self::load_from_reader(file, &path.display().to_string())
    }

    /// Load the catalog from any CSV byte stream.
    ///
    /// `source_name` is only used for log lines and error messages.
    pub fn load_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let start = Instant::now();
        let csv_error = |e: csv::Error| DataLoadError::CsvError {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.byte_headers().map_err(csv_error)?);
        let missing = columns.missing_columns();
        if !missing.is_empty() {
            warn!(
                "{} is missing columns {:?}; those fields will be empty",
                source_name, missing
            );
        }

        let rows: Vec<ByteRecord> = reader
            .byte_records()
            .collect::<std::result::Result<_, _>>()
            .map_err(csv_error)?;

        // par_iter + collect keeps the input order
        let records: Vec<MovieRecord> = rows.par_iter().map(|row| columns.decode(row)).collect();

        info!(
            "Loaded {} movies from {} in {:?}",
            records.len(),
            source_name,
            start.elapsed()
        );
        Ok(Dataset::new(records))
    }
}
