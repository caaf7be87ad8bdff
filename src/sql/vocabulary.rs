//! Built-in vocabulary
//!
//! SQL keywords, built-in function names and a dictionary of common
//! identifier words, loaded from `data/*.txt` (embedded at compile time via
//! `include_str!()`). The lists keep file order because suggestion ranking
//! follows declaration order; the sets serve membership checks.

use std::collections::HashSet;
use std::sync::LazyLock;

fn load(content: &'static str) -> Vec<&'static str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

static SQL_KEYWORDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| load(include_str!("../../data/sql_keywords.txt")));

static SQL_FUNCTIONS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| load(include_str!("../../data/sql_functions.txt")));

static DICTIONARY: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| load(include_str!("../../data/dictionary.txt")));

/// Lowercased union of keywords, functions and dictionary words.
static KNOWN_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    all_words().map(|w| w.to_ascii_lowercase()).collect()
});

/// Uppercased keywords, used to reject keywords as table aliases.
static KEYWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SQL_KEYWORDS.iter().copied().collect());

/// SQL keywords in declaration order (uppercase).
pub fn keywords() -> &'static [&'static str] {
    &SQL_KEYWORDS
}

/// Built-in function names in declaration order (uppercase).
pub fn functions() -> &'static [&'static str] {
    &SQL_FUNCTIONS
}

/// Common identifier words (lowercase).
pub fn dictionary() -> &'static [&'static str] {
    &DICTIONARY
}

/// Keywords, then functions, then dictionary words.
pub fn all_words() -> impl Iterator<Item = &'static str> {
    keywords()
        .iter()
        .chain(functions())
        .chain(dictionary())
        .copied()
}

/// Case-insensitive membership in the keyword, function or dictionary lists.
pub fn is_known_word(word: &str) -> bool {
    KNOWN_WORDS.contains(&word.to_ascii_lowercase())
}

/// Case-insensitive keyword check.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word.to_ascii_uppercase().as_str())
}
