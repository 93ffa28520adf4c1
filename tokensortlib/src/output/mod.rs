//! Output formatting: render sorted data and frequency tables.
//!
//! This module handles the final stage of a run - turning a [`Dataset`]
//! into report text. It provides:
//!
//! - **Report**: header plus body, ready to be printed or written
//!
//! Report is a pure presentation layer. The natural report sorts the
//! dataset it is given; the count report aggregates and orders entries
//! before formatting them.
//!
//! ## Example
//!
//! ```rust
//! use tokensortlib::data::Dataset;
//! use tokensortlib::output::Report;
//!
//! let mut data = Dataset::Integers(vec![4, 1, 3, 1]);
//! let report = Report::natural(&mut data);
//! assert_eq!(report.text(), "Total numbers: 4\nSorted data: 1 1 3 4 \n");
//! ```
//!
//! [`Dataset`]: crate::data::Dataset

pub mod report;

pub use report::Report;
