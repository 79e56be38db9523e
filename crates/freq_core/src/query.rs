//! Text-level shortcuts over [`FrequencyTable`] using the default
//! [`CountOptions`]: case folded, whitespace ignored.

use std::iter;

use crate::error::FrequencyError;
use crate::options::CountOptions;
use crate::table::FrequencyTable;

pub fn char_frequency(text: &str) -> FrequencyTable<char> {
    FrequencyTable::of_chars(text, &CountOptions::default())
}

pub fn word_frequency(text: &str) -> FrequencyTable<String> {
    FrequencyTable::of_words(text, &CountOptions::default())
}

pub fn most_frequent(text: &str) -> Option<char> {
    char_frequency(text).most_frequent()
}

pub fn top_k_frequent(text: &str, k: usize) -> Result<Vec<char>, FrequencyError> {
    char_frequency(text).top_k(k)
}

pub fn first_unique(text: &str) -> Option<char> {
    char_frequency(text).first_unique()
}

pub fn duplicates(text: &str) -> FrequencyTable<char> {
    char_frequency(text).duplicates()
}

/// Regroups the counted chars by descending count: `"aabbbcc"` becomes
/// `"bbbaacc"`.
pub fn sort_by_frequency(text: &str) -> String {
    char_frequency(text)
        .by_frequency()
        .into_iter()
        .flat_map(|(symbol, count)| iter::repeat_n(symbol, count))
        .collect()
}

/// Case-insensitive occurrences of `needle`. Unlike the table queries this
/// also counts whitespace when asked for it.
pub fn count_occurrences(text: &str, needle: char) -> usize {
    text.chars()
        .filter(|c| c.to_lowercase().eq(needle.to_lowercase()))
        .count()
}

/// Distinct chars of `a`, in order, that also occur in `b`.
pub fn common_symbols(a: &str, b: &str) -> Vec<char> {
    let other = char_frequency(b);
    char_frequency(a)
        .symbols()
        .filter(|symbol| other.contains(symbol))
        .copied()
        .collect()
}

/// Distinct chars in first-seen order.
pub fn distinct(text: &str) -> Vec<char> {
    char_frequency(text).symbols().copied().collect()
}
