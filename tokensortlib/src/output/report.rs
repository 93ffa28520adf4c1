//! Report text for the natural and count modes.
//!
//! Each data kind has two layouts: how a single item is written in the
//! natural report, and how a row is written in the count report.

use std::fmt::Write as _;

use tracing::debug;

use crate::data::aggregate::{aggregate, sort_by_count};
use crate::data::dataset::{Dataset, Token};
use crate::options::{DataKind, SortMode};

/// How items are laid out after "Sorted data: ".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemLayout {
    /// `"{item} "` for integers and words
    SpaceAfter,
    /// `"\n{item}"` for lines, one per output line
    LineBefore,
}

impl ItemLayout {
    fn for_kind(kind: DataKind) -> Self {
        match kind {
            DataKind::Integer | DataKind::Word => ItemLayout::SpaceAfter,
            DataKind::Line => ItemLayout::LineBefore,
        }
    }
}

/// A formatted report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Mode that produced the report
    pub mode: SortMode,
    /// Number of values in the dataset
    pub total: usize,
    /// "Total {kind}s: {N}" line, terminated
    pub header: String,
    /// Everything after the header
    pub body: String,
}

impl Report {
    /// Sort the dataset in place and list every value.
    pub fn natural(dataset: &mut Dataset) -> Self {
        dataset.sort();
        let layout = ItemLayout::for_kind(dataset.kind());

        let mut body = String::from("Sorted data: ");
        match dataset {
            Dataset::Integers(values) => push_items(&mut body, values, layout),
            Dataset::Words(values) | Dataset::Lines(values) => {
                push_items(&mut body, values, layout)
            }
        }
        body.push('\n');

        Report {
            mode: SortMode::Natural,
            total: dataset.len(),
            header: header(dataset),
            body,
        }
    }

    /// Tally distinct values and list them by ascending count.
    ///
    /// An empty dataset yields only the header.
    pub fn by_count(dataset: &Dataset) -> Self {
        let total = dataset.len();
        let body = match dataset {
            Dataset::Integers(values) => count_rows(values),
            Dataset::Words(values) | Dataset::Lines(values) => count_rows(values),
        };

        Report {
            mode: SortMode::ByCount,
            total,
            header: header(dataset),
            body,
        }
    }

    /// Full report text.
    pub fn text(&self) -> String {
        format!("{}{}", self.header, self.body)
    }
}

fn header(dataset: &Dataset) -> String {
    format!("Total {}s: {}\n", dataset.kind().name(), dataset.len())
}

fn push_items<T: Token>(out: &mut String, values: &[T], layout: ItemLayout) {
    for value in values {
        // Writing into a String cannot fail.
        let _ = match layout {
            ItemLayout::SpaceAfter => write!(out, "{} ", value),
            ItemLayout::LineBefore => write!(out, "\n{}", value),
        };
    }
}

fn count_rows<T: Token>(values: &[T]) -> String {
    let mut out = String::new();
    if values.is_empty() {
        return out;
    }

    let mut entries = aggregate(values);
    sort_by_count(&mut entries);
    debug!(total = values.len(), distinct = entries.len(), "aggregated values");

    for entry in &entries {
        let _ = writeln!(
            out,
            "{}: {} time(s), {}%",
            entry.value,
            entry.count,
            entry.percentage(values.len())
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_natural_integers() {
        let mut data = Dataset::Integers(vec![4, 1, 3, 1]);
        let report = Report::natural(&mut data);
        assert_eq!(report.header, "Total numbers: 4\n");
        assert_eq!(report.body, "Sorted data: 1 1 3 4 \n");
        assert_eq!(report.total, 4);
        assert_eq!(report.mode, SortMode::Natural);
    }

    #[test]
    fn test_natural_words() {
        let mut data = Dataset::Words(strings(&["b", "a", "c", "a"]));
        let report = Report::natural(&mut data);
        assert_eq!(report.text(), "Total words: 4\nSorted data: a a b c \n");
    }

    #[test]
    fn test_natural_lines() {
        let mut data = Dataset::Lines(strings(&["banana", "apple", "cherry"]));
        let report = Report::natural(&mut data);
        assert_eq!(
            report.text(),
            "Total lines: 3\nSorted data: \napple\nbanana\ncherry\n"
        );
    }

    #[test]
    fn test_natural_sorts_dataset_in_place() {
        let mut data = Dataset::Integers(vec![3, 2, 1]);
        Report::natural(&mut data);
        assert_eq!(data, Dataset::Integers(vec![1, 2, 3]));
    }

    #[test]
    fn test_natural_is_idempotent() {
        let mut data = Dataset::Words(strings(&["delta", "alpha", "charlie", "bravo"]));
        let first = Report::natural(&mut data).text();
        let second = Report::natural(&mut data).text();
        assert_eq!(first, second);
    }

    #[test]
    fn test_natural_empty() {
        let mut data = Dataset::Words(Vec::new());
        assert_eq!(Report::natural(&mut data).text(), "Total words: 0\nSorted data: \n");

        let mut data = Dataset::Lines(Vec::new());
        assert_eq!(Report::natural(&mut data).text(), "Total lines: 0\nSorted data: \n");
    }

    #[test]
    fn test_by_count_words() {
        let data = Dataset::Words(strings(&["a", "b", "a", "c", "b", "a"]));
        let report = Report::by_count(&data);
        assert_eq!(report.header, "Total words: 6\n");
        assert_eq!(
            report.body,
            "c: 1 time(s), 16%\nb: 2 time(s), 33%\na: 3 time(s), 50%\n"
        );
        assert_eq!(report.mode, SortMode::ByCount);
    }

    #[test]
    fn test_by_count_integers_tie_break_numeric() {
        let data = Dataset::Integers(vec![10, 9, -1]);
        let report = Report::by_count(&data);
        assert_eq!(
            report.text(),
            "Total numbers: 3\n-1: 1 time(s), 33%\n9: 1 time(s), 33%\n10: 1 time(s), 33%\n"
        );
    }

    #[test]
    fn test_by_count_lines_include_empty_line() {
        let data = Dataset::Lines(strings(&["x", "", "x"]));
        let report = Report::by_count(&data);
        assert_eq!(
            report.text(),
            "Total lines: 3\n: 1 time(s), 33%\nx: 2 time(s), 66%\n"
        );
    }

    #[test]
    fn test_by_count_header_uses_total_not_distinct() {
        let data = Dataset::Words(strings(&["same", "same", "same"]));
        let report = Report::by_count(&data);
        assert_eq!(report.total, 3);
        assert_eq!(report.text(), "Total words: 3\nsame: 3 time(s), 100%\n");
    }

    #[test]
    fn test_by_count_empty_is_header_only() {
        let data = Dataset::Integers(Vec::new());
        let report = Report::by_count(&data);
        assert_eq!(report.text(), "Total numbers: 0\n");
        assert!(report.body.is_empty());
    }

    #[test]
    fn test_by_count_percentages_sum_rows() {
        let data = Dataset::Words(strings(&["p", "q", "q", "r", "r", "r", "s"]));
        let report = Report::by_count(&data);
        let rows: Vec<&str> = report.body.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "p: 1 time(s), 14%");
        assert_eq!(rows[1], "s: 1 time(s), 14%");
        assert_eq!(rows[2], "q: 2 time(s), 28%");
        assert_eq!(rows[3], "r: 3 time(s), 42%");
    }
}
