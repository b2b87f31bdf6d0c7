// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Symbol frequency counting.

use super::error::{HuffmanError, Result};

/// Occurrence counts for each of the 256 byte symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every byte of `data`.
    ///
    /// # Errors
    /// [`HuffmanError::EmptyInput`] if `data` is empty.
    pub fn tally(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        let mut table = Self::new();
        for &symbol in data {
            table.record(symbol);
        }
        Ok(table)
    }

    /// Add one occurrence of `symbol`.
    pub fn record(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// `(symbol, count)` pairs with non-zero count, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
