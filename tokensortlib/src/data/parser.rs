//! Tokenizing raw input text into a [`Dataset`].
//!
//! Words and integers are separated by whitespace; lines by line
//! terminators. The whole input is expected to be in memory already.

use tracing::debug;

use crate::data::dataset::Dataset;
use crate::error::SortError;
use crate::options::DataKind;
use crate::Result;

/// Result of tokenizing input for one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Values in input order
    pub dataset: Dataset,
    /// Tokens rejected in integer mode, in input order
    pub skipped: Vec<String>,
}

/// Tokenize `text` according to `kind`.
///
/// In integer mode, tokens that do not look like a signed integer are
/// skipped and collected in [`ParseOutcome::skipped`]. A token that looks
/// like an integer but does not fit in an `i64` aborts with
/// [`SortError::NumberOutOfRange`].
///
/// # Example
///
/// ```rust
/// use tokensortlib::data::{parse_tokens, Dataset};
/// use tokensortlib::DataKind;
///
/// let outcome = parse_tokens(DataKind::Line, "b\n\na\n").unwrap();
/// assert_eq!(
///     outcome.dataset,
///     Dataset::Lines(vec!["b".into(), "".into(), "a".into()])
/// );
/// ```
pub fn parse_tokens(kind: DataKind, text: &str) -> Result<ParseOutcome> {
    let mut skipped = Vec::new();
    let dataset = parse_tokens_with(kind, text, |token| {
        skipped.push(token.to_string());
        Ok(())
    })?;

    Ok(ParseOutcome { dataset, skipped })
}

/// Tokenize `text`, calling `on_skip` for each rejected integer token as it
/// is met.
///
/// Tokens skipped before an out-of-range integer have already been passed
/// to `on_skip` when the error is returned. An error from `on_skip` stops
/// parsing.
pub fn parse_tokens_with<F>(kind: DataKind, text: &str, on_skip: F) -> Result<Dataset>
where
    F: FnMut(&str) -> Result<()>,
{
    let dataset = match kind {
        DataKind::Integer => Dataset::Integers(parse_integers(text, on_skip)?),
        DataKind::Word => Dataset::Words(text.split_whitespace().map(str::to_string).collect()),
        DataKind::Line => Dataset::Lines(text.lines().map(str::to_string).collect()),
    };
    Ok(dataset)
}

fn parse_integers<F>(text: &str, mut on_skip: F) -> Result<Vec<i64>>
where
    F: FnMut(&str) -> Result<()>,
{
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        if !is_integer_token(token) {
            debug!(token, "skipping non-integer token");
            on_skip(token)?;
            continue;
        }
        let value = token
            .parse::<i64>()
            .map_err(|_| SortError::NumberOutOfRange(token.to_string()))?;
        values.push(value);
    }
    Ok(values)
}

/// Whether `token` matches `[-+]?[0-9]+` in full.
pub fn is_integer_token(token: &str) -> bool {
    let digits = token
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Diagnostic printed for a token skipped in integer mode.
pub fn skip_message(token: &str) -> String {
    format!("\"{}\" is not a long. It will be skipped.", token)
}
