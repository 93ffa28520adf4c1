//! Error types for tokensortlib

use std::path::PathBuf;
use thiserror::Error;

use crate::engine::RunState;

/// Errors that abort a sorting run.
///
/// Skipped integer tokens are not errors; they are reported through
/// [`ParseOutcome::skipped`](crate::data::ParseOutcome::skipped).
#[derive(Error, Debug)]
pub enum SortError {
    /// A recognized flag was given without a value
    #[error("{message}")]
    MissingValue {
        flag: &'static str,
        message: &'static str,
    },

    /// `-dataType` value is not one of `long`, `word`, `line`.
    ///
    /// The message is shared with [`SortError::UnknownSortingType`].
    #[error("No sorting type defined!")]
    UnknownDataType(String),

    /// `-sortingType` value is not one of `natural`, `byCount`
    #[error("No sorting type defined!")]
    UnknownSortingType(String),

    /// A token matched the integer pattern but does not fit in an `i64`
    #[error("For input string: \"{0}\"")]
    NumberOutOfRange(String),

    /// Failed to read the input file
    #[error("{path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("{path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The engine was asked to run again after leaving `Init`
    #[error("sorting run already started (state {0:?})")]
    AlreadyRun(RunState),

    /// IO error on standard input or output
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
