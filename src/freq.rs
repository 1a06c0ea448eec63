//! Symbol frequency analysis.
//!
//! Scans an input over the fixed 128-symbol alphabet and produces the
//! sorted probability distribution that tree construction consumes.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Number of distinct symbols in the supported alphabet.
pub const ALPHABET_SIZE: usize = 128;

/// A symbol paired with its probability of occurrence.
///
/// Entries produced by frequency analysis always carry a real symbol.
/// Aggregate entries arising during tree construction carry `None` and
/// the summed probability of their descendants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolFreq {
    /// The symbol, or `None` for an internal aggregate.
    pub symbol: Option<u8>,
    /// Probability of occurrence, in `[0, 1]`.
    pub prob: f64,
}

impl Eq for SymbolFreq {}

impl Ord for SymbolFreq {
    fn cmp(&self, other: &Self) -> Ordering {
        // Probability first; on ties, aggregates sort after real symbols
        // and real symbols order by value. Probabilities are finite, so
        // total_cmp agrees with the arithmetic order.
        self.prob
            .total_cmp(&other.prob)
            .then_with(|| match (self.symbol, other.symbol) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

impl PartialOrd for SymbolFreq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the sorted frequency list for `data`.
///
/// Counts occurrences of each alphabet symbol and converts counts to
/// probabilities. An input with exactly one distinct symbol receives a
/// synthetic zero-probability partner (the next symbol value, wrapping
/// to 0 past the end of the alphabet) so that tree construction always
/// sees at least two entries and every code has length >= 1.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `data` holds no symbols, and
/// [`Error::InvalidCode`] if it holds a byte outside the alphabet.
pub fn build_frequencies(data: &[u8]) -> Result<Vec<SymbolFreq>> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut counts = [0u64; ALPHABET_SIZE];
    for &byte in data {
        if byte as usize >= ALPHABET_SIZE {
            return Err(Error::InvalidCode { symbol: byte });
        }
        counts[byte as usize] += 1;
    }

    let total = data.len() as f64;
    let mut entries: Vec<SymbolFreq> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(symbol, &count)| SymbolFreq {
            symbol: Some(symbol as u8),
            prob: count as f64 / total,
        })
        .collect();

    if entries.len() == 1 {
        if let Some(observed) = entries[0].symbol {
            let partner = (observed as usize + 1) % ALPHABET_SIZE;
            entries.push(SymbolFreq {
                symbol: Some(partner as u8),
                prob: 0.0,
            });
        }
    }

    entries.sort();
    Ok(entries)
}
