use std::path::PathBuf;

use itertools::Itertools;
use thiserror::Error;

/// The training table cannot be produced, the model cannot be trained.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("failed to open the dataset `{}`", .path.display())]
    Open {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("the dataset lacks the required columns: {}", quote_columns(.0))]
    MissingColumns(Vec<&'static str>),

    #[error("the dataset is not a valid CSV")]
    Malformed(#[from] csv::Error),

    /// Not a single complete row is left.
    #[error("the dataset contains no complete rows")]
    Empty,
}

fn quote_columns(columns: &[&str]) -> String {
    columns.iter().map(|column| format!("`{}`", column)).join(", ")
}
