use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How symbols are case-normalized before they are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaseMode {
    /// Lowercase every symbol (full Unicode mapping).
    #[default]
    Fold,
    /// Count symbols exactly as they appear.
    Preserve,
}

/// Characters that are skipped while counting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IgnoreSet {
    #[default]
    Whitespace,
    Nothing,
    NonAlphabetic,
    Chars(BTreeSet<char>),
}

impl IgnoreSet {
    pub fn chars(chars: impl IntoIterator<Item = char>) -> Self {
        IgnoreSet::Chars(chars.into_iter().collect())
    }

    pub fn ignores(&self, c: char) -> bool {
        match self {
            IgnoreSet::Whitespace => c.is_whitespace(),
            IgnoreSet::Nothing => false,
            IgnoreSet::NonAlphabetic => !c.is_alphabetic(),
            IgnoreSet::Chars(set) => set.contains(&c),
        }
    }
}

/// Normalization rules shared by every tokenizer.
///
/// The default folds case and skips whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountOptions {
    pub case: CaseMode,
    pub ignore: IgnoreSet,
}

impl CountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-folded, nothing ignored: every character of the input is a symbol.
    pub fn full_alphabet() -> Self {
        Self::default().with_ignore(IgnoreSet::Nothing)
    }

    /// Case-folded letters only.
    pub fn letters() -> Self {
        Self::default().with_ignore(IgnoreSet::NonAlphabetic)
    }

    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }
}
