use std::collections::HashMap;
use std::hash::Hash;

use freq_logging::{freq_debug, freq_trace, freq_warn};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::FrequencyError;
use crate::options::CountOptions;
use crate::token::{CharTokenizer, Tokenizer, WordTokenizer};

/// Mapping from symbol to occurrence count.
///
/// Entries are kept in first-encountered order, which is what breaks ties in
/// [`top_k`](Self::top_k) and [`by_frequency`](Self::by_frequency) and what
/// makes [`first_unique`](Self::first_unique) a single scan. Equality ignores
/// that order: two tables are equal when they hold the same counts.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S = char> {
    order: Vec<S>,
    counts: HashMap<S, usize>,
}

impl<S> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            counts: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts symbols exactly as given, with no normalization.
    pub fn from_symbols(symbols: impl IntoIterator<Item = S>) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.record(symbol, 1);
        }
        table
    }

    pub fn tokenize<T>(tokenizer: &T, text: &str, options: &CountOptions) -> Self
    where
        T: Tokenizer<Symbol = S>,
    {
        let table = Self::from_symbols(tokenizer.tokens(text, options));
        freq_trace!(
            "built frequency table: {} distinct, {} total",
            table.len(),
            table.total()
        );
        table
    }

    fn record(&mut self, symbol: S, n: usize) {
        match self.counts.get_mut(&symbol) {
            Some(count) => *count += n,
            None => {
                self.order.push(symbol.clone());
                self.counts.insert(symbol, n);
            }
        }
    }

    fn remove(&mut self, symbol: &S) -> Option<usize> {
        let count = self.counts.remove(symbol)?;
        self.order.retain(|s| s != symbol);
        Some(count)
    }

    /// Occurrences of `symbol`; zero when it never appeared.
    pub fn count(&self, symbol: &S) -> usize {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.counts.contains_key(symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of symbols consumed, i.e. the sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.order.iter().map(move |s| (s, self.counts[s]))
    }

    /// Distinct symbols in first-encountered order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> + '_ {
        self.order.iter()
    }

    /// Entries by descending count, ties in first-encountered order.
    pub fn by_frequency(&self) -> Vec<(S, usize)> {
        let mut entries: Vec<(S, usize)> = self.iter().map(|(s, n)| (s.clone(), n)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    fn max_symbol(&self) -> Option<S> {
        let mut best: Option<(&S, usize)> = None;
        for (symbol, count) in self.iter() {
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((symbol, count));
            }
        }
        best.map(|(symbol, _)| symbol.clone())
    }

    /// The `k` most frequent symbols, highest count first.
    ///
    /// Maxima are extracted from a scratch copy one at a time; among equal
    /// counts the earliest symbol wins. Asking for more symbols than the table
    /// holds returns all of them.
    pub fn top_k(&self, k: usize) -> Result<Vec<S>, FrequencyError> {
        if k == 0 {
            freq_warn!("top_k rejected k = 0 on a table of {} symbols", self.len());
            return Err(FrequencyError::invalid_input("k must be at least 1"));
        }
        let mut scratch = self.clone();
        let mut picked = Vec::with_capacity(k.min(self.len()));
        while picked.len() < k {
            let Some(symbol) = scratch.max_symbol() else {
                break;
            };
            scratch.remove(&symbol);
            picked.push(symbol);
        }
        freq_debug!("top_k({k}) picked {} of {} symbols", picked.len(), self.len());
        Ok(picked)
    }

    pub fn most_frequent(&self) -> Option<S> {
        self.max_symbol()
    }

    /// First symbol, in sequence order, that occurs exactly once.
    pub fn first_unique(&self) -> Option<S> {
        self.iter()
            .find(|(_, count)| *count == 1)
            .map(|(symbol, _)| symbol.clone())
    }

    /// Sub-table of the symbols occurring more than once.
    pub fn duplicates(&self) -> Self {
        let mut repeated = Self::new();
        for (symbol, count) in self.iter().filter(|(_, count)| *count > 1) {
            repeated.record(symbol.clone(), count);
        }
        repeated
    }
}

impl FrequencyTable<char> {
    pub fn of_chars(text: &str, options: &CountOptions) -> Self {
        Self::tokenize(&CharTokenizer, text, options)
    }
}

impl FrequencyTable<String> {
    pub fn of_words(text: &str, options: &CountOptions) -> Self {
        Self::tokenize(&WordTokenizer, text, options)
    }
}

impl<S: Eq + Hash> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<S: Eq + Hash> Eq for FrequencyTable<S> {}

impl<S: Eq + Hash + Clone> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

/// Serializes as a map in first-encountered order.
impl<S: Eq + Hash + Serialize> Serialize for FrequencyTable<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for symbol in &self.order {
            map.serialize_entry(symbol, &self.counts[symbol])?;
        }
        map.end()
    }
}
