//! Training table loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

pub use self::error::DataUnavailable;
pub use self::record::{Features, TrainingRecord};
use self::record::{RawRecord, REQUIRED_COLUMNS};
use crate::prelude::*;

pub mod error;
pub mod record;

pub struct Dataset {
    pub records: Vec<TrainingRecord>,

    /// Number of rows excluded because of missing or non-numeric values.
    pub n_skipped: usize,
}

impl Dataset {
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> StdResult<Self, DataUnavailable> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataUnavailable::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let start_instant = Instant::now();
        let dataset = Self::from_reader(file)?;
        info!(
            n_records = dataset.records.len(),
            n_skipped = dataset.n_skipped,
            elapsed = ?start_instant.elapsed(),
            "loaded",
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> StdResult<Self, DataUnavailable> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = reader.headers()?;
        let missing_columns: Vec<&'static str> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| !headers.iter().any(|header| header == *column))
            .collect();
        if !missing_columns.is_empty() {
            return Err(DataUnavailable::MissingColumns(missing_columns));
        }

        let mut records = Vec::new();
        let mut n_skipped = 0;
        for raw_record in reader.deserialize::<RawRecord>() {
            match raw_record?.complete() {
                Some(record) => records.push(record),
                None => n_skipped += 1,
            }
        }
        if n_skipped != 0 {
            debug!(n_skipped, "incomplete rows are excluded");
        }
        if records.is_empty() {
            return Err(DataUnavailable::Empty);
        }

        Ok(Self { records, n_skipped })
    }
}
