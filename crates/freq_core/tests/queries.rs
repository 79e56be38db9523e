use std::sync::Once;

use freq_core::{
    common_symbols, count_occurrences, distinct, duplicates, first_unique, most_frequent,
    sort_by_frequency, top_k_frequent, word_frequency, FrequencyError, FrequencyTable,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(freq_logging::initialize_for_tests);
}

#[test]
fn most_frequent_char() {
    init_logging();
    assert_eq!(most_frequent("javascript"), Some('a'));
    assert_eq!(most_frequent("JavaScript"), Some('a'));
    assert_eq!(most_frequent(""), None);
}

#[test]
fn most_frequent_tie_goes_to_first_seen() {
    init_logging();
    assert_eq!(most_frequent("abab"), Some('a'));
    assert_eq!(most_frequent("baab"), Some('b'));
}

#[test]
fn top_k_orders_by_count_then_first_seen() {
    init_logging();
    assert_eq!(top_k_frequent("aaabbccccd", 2).unwrap(), vec!['c', 'a']);
    assert_eq!(
        top_k_frequent("aaabbccccd", 4).unwrap(),
        vec!['c', 'a', 'b', 'd']
    );
    assert_eq!(top_k_frequent("xyzzy", 3).unwrap(), vec!['y', 'z', 'x']);
}

#[test]
fn top_k_larger_than_distinct_returns_all() {
    init_logging();
    assert_eq!(top_k_frequent("aab", 10).unwrap(), vec!['a', 'b']);
    assert_eq!(top_k_frequent("", 3).unwrap(), Vec::<char>::new());
}

#[test]
fn top_k_zero_is_invalid() {
    init_logging();
    let err = top_k_frequent("abc", 0).unwrap_err();
    assert!(matches!(err, FrequencyError::InvalidInput { .. }));
    assert_eq!(err.to_string(), "invalid input: k must be at least 1");
}

#[test]
fn top_k_leaves_table_untouched() {
    init_logging();
    let table = FrequencyTable::from_symbols("aaabbccccd".chars());
    let before = table.clone();
    let _ = table.top_k(2).unwrap();
    assert_eq!(table, before);
    assert_eq!(table.len(), 4);
}

#[test]
fn top_k_on_words() {
    init_logging();
    let table = word_frequency("to be or not to be");
    assert_eq!(
        table.top_k(2).unwrap(),
        vec!["to".to_string(), "be".to_string()]
    );
}

#[test]
fn first_unique_char() {
    init_logging();
    assert_eq!(first_unique("aabbccde"), Some('d'));
    assert_eq!(first_unique("sTreSS"), Some('t'));
    assert_eq!(first_unique("aabb"), None);
    assert_eq!(first_unique(""), None);
}

#[test]
fn duplicates_keep_only_repeated() {
    init_logging();
    let repeated = duplicates("programming");
    let entries: Vec<(char, usize)> = repeated.iter().map(|(c, n)| (*c, n)).collect();
    assert_eq!(entries, vec![('r', 2), ('g', 2), ('m', 2)]);
    assert!(duplicates("machine").is_empty());
}

#[test]
fn sort_by_frequency_groups_chars() {
    init_logging();
    assert_eq!(sort_by_frequency("aabbbcc"), "bbbaacc");
    assert_eq!(sort_by_frequency("tree"), "eetr");
    assert_eq!(sort_by_frequency(""), "");
}

#[test]
fn count_single_char_occurrences() {
    init_logging();
    assert_eq!(count_occurrences("hello", 'l'), 2);
    assert_eq!(count_occurrences("programming", 'm'), 2);
    assert_eq!(count_occurrences("banana", 'a'), 3);
    assert_eq!(count_occurrences("Banana", 'b'), 1);
    assert_eq!(count_occurrences("a b c", ' '), 2);
}

#[test]
fn common_chars_in_first_seen_order() {
    init_logging();
    assert_eq!(common_symbols("monk", "stonks"), vec!['o', 'n', 'k']);
    assert_eq!(common_symbols("character", "farceus"), vec!['c', 'a', 'r', 'e']);
    assert!(common_symbols("abc", "xyz").is_empty());
}

#[test]
fn distinct_removes_repeats() {
    init_logging();
    assert_eq!(distinct("banana"), vec!['b', 'a', 'n']);
}
