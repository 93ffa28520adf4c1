//! Input options for a sorting run.
//!
//! This module contains the configuration types that select how input is
//! tokenized, which report is produced, and where data is read from and
//! written to.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::SortError;

/// The kind of token a run operates on.
///
/// Selected once per run; determines tokenizing, ordering and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataKind {
    /// Whitespace-separated signed 64-bit integers
    Integer,
    /// Whitespace-separated words
    #[default]
    Word,
    /// Whole lines
    Line,
}

impl DataKind {
    /// Singular name used in the report header ("Total numbers: ...").
    pub fn name(&self) -> &'static str {
        match self {
            DataKind::Integer => "number",
            DataKind::Word => "word",
            DataKind::Line => "line",
        }
    }

    /// Value accepted on the command line.
    pub fn as_flag_value(&self) -> &'static str {
        match self {
            DataKind::Integer => "long",
            DataKind::Word => "word",
            DataKind::Line => "line",
        }
    }
}

impl FromStr for DataKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(DataKind::Integer),
            "word" => Ok(DataKind::Word),
            "line" => Ok(DataKind::Line),
            _ => Err(SortError::UnknownDataType(s.to_string())),
        }
    }
}

/// Which report a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Every value in ascending order, duplicates kept
    #[default]
    Natural,
    /// Distinct values with counts, ordered by count then value
    ByCount,
}

impl FromStr for SortMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(SortMode::Natural),
            "byCount" => Ok(SortMode::ByCount),
            _ => Err(SortError::UnknownSortingType(s.to_string())),
        }
    }
}

/// Where input text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Read all of standard input
    #[default]
    Stdin,
    /// Read the whole file at this path
    File(PathBuf),
}

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Print to standard output
    #[default]
    Stdout,
    /// Replace the content of this file
    File(PathBuf),
}

/// Options for a sorting run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Token kind (defaults to words)
    pub data_kind: DataKind,
    /// Report mode (defaults to natural)
    pub sort_mode: SortMode,
    /// Input source (defaults to stdin)
    pub input: InputSource,
    /// Output target (defaults to stdout)
    pub output: OutputTarget,
}

impl SortOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token kind.
    pub fn data_kind(mut self, kind: DataKind) -> Self {
        self.data_kind = kind;
        self
    }

    /// Set the report mode.
    pub fn sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    /// Set the input source.
    pub fn input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    /// Set the output target.
    pub fn output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }
}
