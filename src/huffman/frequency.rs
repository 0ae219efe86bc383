// src/huffman/frequency.rs

//! Symbol frequency analysis.
//!
//! Counts how often each `char` occurs in a text and computes the Shannon
//! entropy of the resulting distribution.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;

use crate::utils::error::Result;

/// A table mapping each symbol to its occurrence count.
///
/// Iteration is in ascending symbol order, which is also the order in which
/// the tree builder creates leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `symbol`, inserting it with a count of 1 if absent.
    pub fn increment(&mut self, symbol: char) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Set the count of `symbol` explicitly, replacing any previous count.
    pub fn insert(&mut self, symbol: char, count: u64) {
        self.counts.insert(symbol, count);
    }

    /// Count every symbol yielded by `symbols`, in order.
    pub fn count_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut table = Self::new();
        for symbol in symbols {
            table.increment(symbol);
        }
        table
    }

    /// Read a UTF-8 text corpus from `path` and count its symbols.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let table = count(&text);
        debug!(
            "counted {} symbols ({} distinct) from {}",
            table.total(),
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Get the count for `symbol`; absent symbols have a count of 0.
    pub fn get(&self, symbol: char) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Iterate over `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Compute the Shannon entropy of the distribution (in bits per symbol).
    ///
    /// Returns 0.0 if the table is empty or every count is zero.
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        self.counts
            .values()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let prob = c as f64 / total;
                -prob * prob.log2()
            })
            .sum()
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Convenience function: count the symbols of `text`.
pub fn count(text: &str) -> FrequencyTable {
    FrequencyTable::count_symbols(text.chars())
}
