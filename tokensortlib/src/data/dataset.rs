//! The typed values of a single run and their ordering.

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

use crate::options::DataKind;

/// A value that can be sorted, tallied and printed.
///
/// Implemented for `i64` (integers) and `String` (words and lines).
pub trait Token: Eq + Hash + Clone + Display {
    /// Total order used for natural sorting and count tie-breaks.
    fn compare(&self, other: &Self) -> Ordering;
}

impl Token for i64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Token for String {
    /// Ordinal comparison of the UTF-8 bytes, not locale collation.
    fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

/// Ordered values of exactly one kind.
///
/// Built by the parser in input order, then sorted in place for natural
/// reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Integers(Vec<i64>),
    Words(Vec<String>),
    Lines(Vec<String>),
}

impl Dataset {
    /// The kind of values held.
    pub fn kind(&self) -> DataKind {
        match self {
            Dataset::Integers(_) => DataKind::Integer,
            Dataset::Words(_) => DataKind::Word,
            Dataset::Lines(_) => DataKind::Line,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Integers(v) => v.len(),
            Dataset::Words(v) | Dataset::Lines(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sort in ascending order using the kind's comparator.
    pub fn sort(&mut self) {
        match self {
            Dataset::Integers(v) => sort_values(v),
            Dataset::Words(v) | Dataset::Lines(v) => sort_values(v),
        }
    }
}

fn sort_values<T: Token>(values: &mut [T]) {
    values.sort_unstable_by(T::compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_integer_order_is_numeric() {
        let mut data = Dataset::Integers(vec![10, -3, 2, 100, 2]);
        data.sort();
        assert_eq!(data, Dataset::Integers(vec![-3, 2, 2, 10, 100]));
    }

    #[test]
    fn test_text_order_is_ordinal() {
        // Uppercase sorts before lowercase; no locale folding.
        let mut data = Dataset::Words(words(&["b", "B", "a", "A", "ä"]));
        data.sort();
        assert_eq!(data, Dataset::Words(words(&["A", "B", "a", "b", "ä"])));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut data = Dataset::Lines(words(&["pear", "", "apple", "pear"]));
        data.sort();
        let once = data.clone();
        data.sort();
        assert_eq!(data, once);
    }

    #[test]
    fn test_len_and_kind() {
        let data = Dataset::Integers(Vec::new());
        assert!(data.is_empty());
        assert_eq!(data.kind(), DataKind::Integer);

        let data = Dataset::Words(words(&["a", "b"]));
        assert_eq!(data.len(), 2);
        assert!(!data.is_empty());
        assert_eq!(data.kind(), DataKind::Word);

        assert_eq!(Dataset::Lines(Vec::new()).kind(), DataKind::Line);
    }

    #[test]
    fn test_compare() {
        assert_eq!(5i64.compare(&-5), Ordering::Greater);
        assert_eq!("abc".to_string().compare(&"abd".to_string()), Ordering::Less);
        assert_eq!("ab".to_string().compare(&"ab".to_string()), Ordering::Equal);
    }
}
