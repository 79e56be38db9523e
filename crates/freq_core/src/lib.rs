//! Freq core: symbol frequency tables and the queries derived from them.
mod error;
mod options;
mod predicate;
mod query;
mod table;
mod token;

pub use error::FrequencyError;
pub use options::{CaseMode, CountOptions, IgnoreSet};
pub use predicate::{is_anagram, is_anagram_with, is_isogram, is_pangram};
pub use query::{
    char_frequency, common_symbols, count_occurrences, distinct, duplicates, first_unique,
    most_frequent, sort_by_frequency, top_k_frequent, word_frequency,
};
pub use table::FrequencyTable;
pub use token::{CharTokenizer, Tokenizer, WordTokenizer};
