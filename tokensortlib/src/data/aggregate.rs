//! Tallying distinct values.

use std::collections::HashMap;

use crate::data::dataset::Token;

/// A distinct value and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry<T> {
    pub value: T,
    pub count: usize,
}

impl<T> FrequencyEntry<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }

    /// Share of `total` as a truncated integer percentage.
    ///
    /// `total` must be non-zero.
    pub fn percentage(&self, total: usize) -> usize {
        self.count * 100 / total
    }
}

/// Count occurrences of each distinct value in one pass.
///
/// Entries come back in no particular order; use [`sort_by_count`] for the
/// report order.
pub fn aggregate<T: Token>(values: &[T]) -> Vec<FrequencyEntry<T>> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(value, count)| FrequencyEntry::new(value.clone(), count))
        .collect()
}

/// Order entries by ascending count, then ascending value.
pub fn sort_by_count<T: Token>(entries: &mut [FrequencyEntry<T>]) {
    entries.sort_unstable_by(|a, b| {
        a.count
            .cmp(&b.count)
            .then_with(|| a.value.compare(&b.value))
    });
}
