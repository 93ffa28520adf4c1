//! # tokensortlib
//!
//! A small sorting and tallying library for integers, words, and lines.
//!
//! ## Overview
//!
//! A run reads a batch of text, splits it into tokens of one [`DataKind`],
//! and produces one of two reports:
//!
//! - **Natural**: every value in ascending order, duplicates kept
//! - **ByCount**: distinct values with occurrence counts and truncated
//!   percentages, ordered by count and then by value
//!
//! Integers compare numerically; words and lines compare by their bytes,
//! without locale collation.
//!
//! ## Pipeline
//!
//! 1. [`data::parse_tokens`] turns text into a [`Dataset`]
//! 2. [`Report::natural`] sorts it, or [`Report::by_count`] tallies it
//! 3. [`io::write_report`] sends the text to stdout or replaces a file
//!
//! [`SortEngine`] drives all three steps for a [`SortOptions`].
//!
//! ## Example
//!
//! ```rust
//! use tokensortlib::{DataKind, SortEngine, SortMode, SortOptions};
//!
//! let options = SortOptions::new()
//!     .data_kind(DataKind::Word)
//!     .sort_mode(SortMode::ByCount);
//!
//! let mut diagnostics = Vec::new();
//! let report = SortEngine::new(options)
//!     .run_on_text("a b a c b a", &mut diagnostics)
//!     .unwrap();
//!
//! assert_eq!(
//!     report.text(),
//!     "Total words: 6\nc: 1 time(s), 16%\nb: 2 time(s), 33%\na: 3 time(s), 50%\n"
//! );
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod io;
pub mod options;
pub mod output;

pub use data::{Dataset, FrequencyEntry, ParseOutcome};
pub use engine::{RunState, SortEngine};
pub use error::SortError;
pub use options::{DataKind, InputSource, OutputTarget, SortMode, SortOptions};
pub use output::Report;

/// Result type for tokensortlib operations
pub type Result<T> = std::result::Result<T, SortError>;
