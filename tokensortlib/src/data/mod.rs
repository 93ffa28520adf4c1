//! Data collection: tokenize input and tally values.
//!
//! This module handles the first two stages of a run:
//!
//! - **Parsing**: split raw text into typed values for one [`DataKind`](crate::DataKind)
//! - **Dataset**: the typed values of a run, with the per-kind ordering
//! - **Aggregation**: distinct values paired with their occurrence counts
//!
//! ## Example
//!
//! ```rust
//! use tokensortlib::data::{aggregate, parse_tokens, Dataset};
//! use tokensortlib::DataKind;
//!
//! let outcome = parse_tokens(DataKind::Integer, "3 x 1 3").unwrap();
//! assert_eq!(outcome.skipped, vec!["x".to_string()]);
//!
//! let Dataset::Integers(values) = outcome.dataset else { unreachable!() };
//! let entries = aggregate(&values);
//! assert_eq!(entries.len(), 2);
//! ```

pub mod aggregate;
pub mod dataset;
pub mod parser;

pub use aggregate::{aggregate, sort_by_count, FrequencyEntry};
pub use dataset::{Dataset, Token};
pub use parser::{is_integer_token, parse_tokens, parse_tokens_with, skip_message, ParseOutcome};
