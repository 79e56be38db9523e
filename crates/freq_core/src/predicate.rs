use std::collections::HashSet;

use freq_logging::freq_trace;

use crate::options::CountOptions;
use crate::table::FrequencyTable;
use crate::token::{CharTokenizer, Tokenizer};

/// True when both texts contain the same chars with the same counts,
/// ignoring case. Every char counts, including whitespace.
pub fn is_anagram(a: &str, b: &str) -> bool {
    is_anagram_with(a, b, &CountOptions::full_alphabet())
}

/// Anagram test under custom normalization, e.g. ignoring whitespace for
/// phrase anagrams.
pub fn is_anagram_with(a: &str, b: &str, options: &CountOptions) -> bool {
    let left = CharTokenizer.tokens(a, options);
    let right = CharTokenizer.tokens(b, options);
    if left.len() != right.len() {
        freq_trace!("anagram: length {} vs {}", left.len(), right.len());
        return false;
    }
    FrequencyTable::from_symbols(left) == FrequencyTable::from_symbols(right)
}

/// True when every latin letter `a`..=`z` occurs at least once, in any case.
pub fn is_pangram(text: &str) -> bool {
    let letters = FrequencyTable::of_chars(text, &CountOptions::letters());
    ('a'..='z').all(|letter| letters.contains(&letter))
}

/// True when no letter repeats, ignoring case. Non-letters such as hyphens
/// and spaces are not counted.
pub fn is_isogram(text: &str) -> bool {
    let mut seen = HashSet::new();
    CharTokenizer
        .tokens(text, &CountOptions::letters())
        .into_iter()
        .all(|letter| seen.insert(letter))
}
