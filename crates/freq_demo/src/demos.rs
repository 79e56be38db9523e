use anyhow::Context;
use freq_core::{
    char_frequency, common_symbols, count_occurrences, duplicates, first_unique, is_anagram,
    is_isogram, is_pangram, most_frequent, sort_by_frequency, top_k_frequent, word_frequency,
    FrequencyTable,
};
use freq_logging::freq_debug;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoResult {
    pub name: &'static str,
    pub input: String,
    pub output: Value,
}

fn record(
    name: &'static str,
    input: impl Into<String>,
    output: impl Serialize,
) -> anyhow::Result<DemoResult> {
    let output = serde_json::to_value(output).with_context(|| format!("serializing {name}"))?;
    freq_debug!("{name}: {output}");
    Ok(DemoResult {
        name,
        input: input.into(),
        output,
    })
}

pub fn run_all() -> anyhow::Result<Vec<DemoResult>> {
    let numbers = [1, 2, 3, 4, 4, 5, 5];
    let top_k = top_k_frequent("aaabbccccd", 2).context("top-k demo")?;

    Ok(vec![
        record("char_frequency", "Hello WorLd", char_frequency("Hello WorLd"))?,
        record("is_anagram", "listen / silent", is_anagram("listen", "silent"))?,
        record("most_frequent", "javascript", most_frequent("javascript"))?,
        record("first_unique", "aabbccde", first_unique("aabbccde"))?,
        record(
            "is_pangram",
            "The quick brown fox jumps over the lazy dog",
            is_pangram("The quick brown fox jumps over the lazy dog"),
        )?,
        record("duplicates", "programming", duplicates("programming"))?,
        record(
            "is_isogram",
            "machine / repeater",
            [is_isogram("machine"), is_isogram("repeater")],
        )?,
        record("sort_by_frequency", "aabbbcc", sort_by_frequency("aabbbcc"))?,
        record(
            "word_frequency",
            "the cat and the hat",
            word_frequency("the cat and the hat"),
        )?,
        record("top_k_frequent", "aaabbccccd, k = 2", top_k)?,
        record("count_occurrences", "banana, 'a'", count_occurrences("banana", 'a'))?,
        record("common_symbols", "monk / stonks", common_symbols("monk", "stonks"))?,
        record(
            "duplicate_numbers",
            format!("{numbers:?}"),
            FrequencyTable::from_symbols(numbers).duplicates(),
        )?,
    ])
}
