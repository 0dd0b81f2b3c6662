//----------------------------------------
// storage errors
//----------------------------------------
use std::path::PathBuf;

use crate::error::CohortErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageErr {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} is empty; expected a header row", .0.display())]
    EmptyFile(PathBuf),
    #[error("{} has a header but no observations", .0.display())]
    NoObservations(PathBuf),
    #[error("unexpected header in {}: expected \"{expected}\", got \"{found}\"", .path.display())]
    HeaderMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("line {line}: expected {expected} fields, got {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: value \"{value}\" in column {column} is not a finite number")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl From<StorageErr> for CohortErr {
    fn from(err: StorageErr) -> Self {
        CohortErr::Storage(err)
    }
}
