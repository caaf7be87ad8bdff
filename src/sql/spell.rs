//! Spell and casing checker
//!
//! Flags identifiers that are either inconsistently cased (`SeLeCt`) or look
//! like a typo of a known word: a SQL keyword, a built-in function, a catalog
//! table/column, or a common identifier word. String literals and comments
//! are never inspected.

use crate::catalog::Catalog;
use crate::sql::lexer::{self, LiteralRanges, Token};
use crate::sql::vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Thresholds for the typo heuristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellConfig {
    /// Largest edit distance still reported as a typo
    pub max_distance: usize,
    /// Only compare against words whose length differs by at most this much
    pub max_length_delta: usize,
    /// Shorter words (aliases like `u`, `o`) are never checked
    pub min_word_length: usize,
    /// Additional words treated as known
    pub extra_words: Vec<String>,
}

impl Default for SpellConfig {
    fn default() -> Self {
        Self {
            max_distance: 2,
            max_length_delta: 2,
            min_word_length: 3,
            extra_words: Vec::new(),
        }
    }
}

/// Why a word was flagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SpellIssue {
    /// A `_`-separated part mixes upper and lower case
    Casing,
    /// Close to a known word
    Typo { closest: String, distance: usize },
}

/// A flagged identifier; `start..end` are byte offsets into the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MisspelledSpan {
    pub word: String,
    pub start: usize,
    pub end: usize,
    pub issue: SpellIssue,
}

/// Check `text` with the default thresholds.
///
/// `exclude` is the cursor offset of the word being typed; a word whose span
/// contains it (ends included) is never flagged.
pub fn check_spelling(
    text: &str,
    catalog: &Catalog,
    exclude: Option<usize>,
) -> Vec<MisspelledSpan> {
    check_spelling_with(text, catalog, exclude, &SpellConfig::default())
}

/// Check `text` with explicit thresholds. Spans come back in buffer order.
pub fn check_spelling_with(
    text: &str,
    catalog: &Catalog,
    exclude: Option<usize>,
    config: &SpellConfig,
) -> Vec<MisspelledSpan> {
    let literals = LiteralRanges::scan(text);
    let lexicon = Lexicon::new(catalog, config);

    let spans: Vec<MisspelledSpan> = lexer::identifiers(text)
        .filter(|tok| !literals.contains(tok.start))
        .filter(|tok| !exclude.is_some_and(|at| tok.start <= at && at <= tok.end))
        .filter_map(|tok| {
            let issue = check_token(&tok, &lexicon, config)?;
            tracing::trace!(word = tok.text, start = tok.start, ?issue, "Flagged");
            Some(MisspelledSpan {
                word: tok.text.to_string(),
                start: tok.start,
                end: tok.end,
                issue,
            })
        })
        .collect();

    tracing::debug!(count = spans.len(), "Spell check finished");
    spans
}

/// Whether every `_`-separated part is all-upper, all-lower or Title-case.
pub fn has_consistent_casing(word: &str) -> bool {
    word.split('_').all(|part| {
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            return true;
        };
        let rest = chars.as_str();
        let rest_lower = !rest.chars().any(|c| c.is_ascii_uppercase());
        let rest_upper = !rest.chars().any(|c| c.is_ascii_lowercase());
        if first.is_ascii_uppercase() {
            rest_lower || rest_upper
        } else {
            rest_lower
        }
    })
}

/// Words the checker compares against, built once per call.
struct Lexicon<'a> {
    /// Catalog names exactly as declared
    catalog_exact: HashSet<&'a str>,
    /// Lowercased catalog names and extra words
    known: HashSet<String>,
    /// `(lowercase, display)` candidates, catalog names first
    candidates: Vec<(String, &'a str)>,
}

impl<'a> Lexicon<'a> {
    fn new(catalog: &'a Catalog, config: &'a SpellConfig) -> Self {
        let extra = config.extra_words.iter().map(String::as_str);
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();
        let mut add = |word: &'a str| {
            let lower = word.to_ascii_lowercase();
            if seen.insert(lower.clone()) {
                candidates.push((lower, word));
            }
        };
        catalog.names().chain(extra.clone()).for_each(&mut add);
        vocabulary::all_words().for_each(|w| add(w));

        Self {
            catalog_exact: catalog.names().collect(),
            known: catalog
                .names()
                .chain(extra)
                .map(|w| w.to_ascii_lowercase())
                .collect(),
            candidates,
        }
    }

    fn is_known(&self, word: &str) -> bool {
        self.known.contains(&word.to_ascii_lowercase()) || vocabulary::is_known_word(word)
    }

    /// Closest candidate at a nonzero distance within the thresholds.
    fn closest(&self, word: &str, config: &SpellConfig) -> Option<(&'a str, usize)> {
        let lower = word.to_ascii_lowercase();
        let mut best: Option<(&'a str, usize)> = None;
        for (candidate, display) in &self.candidates {
            if candidate.len().abs_diff(lower.len()) > config.max_length_delta {
                continue;
            }
            let distance = strsim::levenshtein(&lower, candidate);
            if distance == 0 {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((*display, distance));
            }
        }
        best.filter(|&(_, d)| d <= config.max_distance)
    }
}

fn check_token(tok: &Token<'_>, lexicon: &Lexicon<'_>, config: &SpellConfig) -> Option<SpellIssue> {
    let word = tok.text;
    if word.bytes().any(|b| b.is_ascii_digit())
        || word.len() < config.min_word_length
        || lexicon.catalog_exact.contains(word)
    {
        return None;
    }
    if !has_consistent_casing(word) {
        return Some(SpellIssue::Casing);
    }
    if lexicon.is_known(word) {
        return None;
    }
    if word.contains('_') {
        compound_typo(word, lexicon, config)
    } else {
        word_typo(word, lexicon, config)
    }
}

/// Edit-distance check of a single word.
fn word_typo(word: &str, lexicon: &Lexicon<'_>, config: &SpellConfig) -> Option<SpellIssue> {
    let (closest, distance) = lexicon.closest(word, config)?;
    Some(SpellIssue::Typo {
        closest: closest.to_string(),
        distance,
    })
}

/// Edit-distance check of each `_`-separated part. Any misspelled part flags
/// the whole compound; `closest` is the compound with those parts corrected.
fn compound_typo(word: &str, lexicon: &Lexicon<'_>, config: &SpellConfig) -> Option<SpellIssue> {
    let mut total = 0;
    let corrected: Vec<&str> = word
        .split('_')
        .map(|part| {
            if part.len() < config.min_word_length || lexicon.is_known(part) {
                return part;
            }
            match lexicon.closest(part, config) {
                Some((closest, distance)) => {
                    total += distance;
                    closest
                }
                None => part,
            }
        })
        .collect();

    (total > 0).then(|| SpellIssue::Typo {
        closest: corrected.join("_"),
        distance: total,
    })
}
