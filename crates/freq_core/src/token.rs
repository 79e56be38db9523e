use std::hash::Hash;

use crate::options::{CaseMode, CountOptions, IgnoreSet};

/// Splits text into normalized symbols.
pub trait Tokenizer: Send + Sync {
    type Symbol: Eq + Hash + Clone;

    fn tokens(&self, text: &str, options: &CountOptions) -> Vec<Self::Symbol>;
}

/// One symbol per `char`.
///
/// A char can lowercase to several chars; each of them is a symbol. The ignore
/// set is checked before and after folding.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    type Symbol = char;

    fn tokens(&self, text: &str, options: &CountOptions) -> Vec<char> {
        let mut symbols = Vec::with_capacity(text.len());
        for c in text.chars() {
            if options.ignore.ignores(c) {
                continue;
            }
            match options.case {
                CaseMode::Fold => symbols.extend(
                    c.to_lowercase()
                        .filter(|folded| !options.ignore.ignores(*folded)),
                ),
                CaseMode::Preserve => symbols.push(c),
            }
        }
        symbols
    }
}

/// Whitespace-separated words.
///
/// Whitespace always separates words regardless of the ignore set. Other
/// ignored chars are trimmed from the word edges, so `"hat."` counts as `hat`
/// when punctuation is ignored. Trimming runs on the folded word, so `"Stress"`
/// and `"stress"` trim the same way. Words left empty are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    type Symbol = String;

    fn tokens(&self, text: &str, options: &CountOptions) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|word| {
                let word = match options.case {
                    CaseMode::Fold => word.to_lowercase(),
                    CaseMode::Preserve => word.to_string(),
                };
                let trimmed = trim_ignored(&word, &options.ignore);
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == word.len() {
                    Some(word)
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect()
    }
}

fn trim_ignored<'a>(word: &'a str, ignore: &IgnoreSet) -> &'a str {
    match ignore {
        IgnoreSet::Whitespace | IgnoreSet::Nothing => word,
        _ => word.trim_matches(|c| ignore.ignores(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::trim_ignored;
    use crate::IgnoreSet;

    #[test]
    fn trims_only_word_edges() {
        let ignore = IgnoreSet::NonAlphabetic;
        assert_eq!(trim_ignored("\"don't!\"", &ignore), "don't");
    }

    #[test]
    fn whitespace_set_keeps_punctuation() {
        assert_eq!(trim_ignored("hat.", &IgnoreSet::Whitespace), "hat.");
    }

    #[test]
    fn word_of_only_ignored_chars_becomes_empty() {
        let ignore = IgnoreSet::chars(['-', '!']);
        assert_eq!(trim_ignored("--!", &ignore), "");
    }
}
