//! Scanning of the `-flag value` argument list.
//!
//! Flags start with a single dash and match case-insensitively:
//! `-dataType`, `-sortingType`, `-inputFile`, `-outputFile`. Each takes the
//! following token as its value. Unknown flags are reported and skipped.

use std::io::Write;
use std::path::PathBuf;

use tokensortlib::{
    DataKind, InputSource, OutputTarget, Result, SortError, SortMode, SortOptions,
};
use tracing::debug;

/// A flag this tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    DataType,
    SortingType,
    InputFile,
    OutputFile,
}

impl Flag {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "datatype" => Some(Flag::DataType),
            "sortingtype" => Some(Flag::SortingType),
            "inputfile" => Some(Flag::InputFile),
            "outputfile" => Some(Flag::OutputFile),
            _ => None,
        }
    }

    fn missing_value(self) -> SortError {
        let (flag, message) = match self {
            Flag::DataType => ("-dataType", "No data type defined!"),
            Flag::SortingType => ("-sortingType", "No sorting type defined!"),
            Flag::InputFile => ("-inputFile", "No file name defined!"),
            Flag::OutputFile => ("-outputFile", "No file name defined!"),
        };
        SortError::MissingValue { flag, message }
    }
}

/// Flag name of `token`, if it looks like `-name`.
fn flag_name(token: &str) -> Option<&str> {
    let name = token.strip_prefix('-')?;
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        .then_some(name)
}

/// Build [`SortOptions`] from raw arguments.
///
/// Warnings for unknown flags are written to `warnings` as they are found.
/// Data and sorting types are validated once every argument has been
/// scanned, before any input is read.
pub fn scan_args<W: Write>(args: &[String], warnings: &mut W) -> Result<SortOptions> {
    let mut options = SortOptions::new();
    let mut data_type: Option<&str> = None;
    let mut sorting_type: Option<&str> = None;
    let mut tokens = args.iter().peekable();

    while let Some(token) = tokens.next() {
        let Some(name) = flag_name(token) else {
            debug!(token = token.as_str(), "ignoring stray argument");
            continue;
        };

        let value = tokens.next_if(|next| flag_name(next).is_none());

        let Some(flag) = Flag::from_name(name) else {
            writeln!(
                warnings,
                "\"{}\" is not a valid parameter. It will be skipped.",
                name
            )?;
            continue;
        };

        let value = value.ok_or_else(|| flag.missing_value())?;
        match flag {
            Flag::DataType => data_type = Some(value.as_str()),
            Flag::SortingType => sorting_type = Some(value.as_str()),
            Flag::InputFile => options = options.input(InputSource::File(PathBuf::from(value))),
            Flag::OutputFile => {
                options = options.output(OutputTarget::File(PathBuf::from(value)))
            }
        }
    }

    if let Some(value) = data_type {
        options = options.data_kind(value.parse::<DataKind>()?);
    }
    if let Some(value) = sorting_type {
        options = options.sort_mode(value.parse::<SortMode>()?);
    }

    debug!(?options, "scanned arguments");
    Ok(options)
}
