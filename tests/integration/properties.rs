//! Property tests for engine invariants

use crate::common::test_catalog;
use proptest::prelude::*;
use sqlassist::sql::{apply_suggestion, check_spelling, suggest, vocabulary};

/// Every word the checker must accept as-is.
fn known_words() -> Vec<String> {
    let catalog = test_catalog();
    let words = catalog
        .names()
        .map(str::to_string)
        .chain(vocabulary::all_words().map(str::to_string))
        .collect();
    words
}

fn sql_fragment() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("SELECT ".to_string()),
            Just("FROM ".to_string()),
            Just("JOIN ".to_string()),
            Just(" ON ".to_string()),
            Just("users u ".to_string()),
            Just("orders o ".to_string()),
            Just("o.".to_string()),
            Just(", ".to_string()),
            Just("'quoted SELEKT' ".to_string()),
            "[a-zA-Z_]{1,8}".prop_map(|s| s + " "),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn spelling_is_idempotent(text in sql_fragment()) {
        let catalog = test_catalog();
        prop_assert_eq!(
            check_spelling(&text, &catalog, None),
            check_spelling(&text, &catalog, None)
        );
    }

    #[test]
    fn spans_are_ordered_and_disjoint(text in sql_fragment()) {
        let spans = check_spelling(&text, &test_catalog(), None);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for span in &spans {
            prop_assert_eq!(&text[span.start..span.end], span.word.as_str());
            prop_assert_ne!(span.word.as_str(), "SELEKT");
        }
    }

    #[test]
    fn known_words_never_flagged(index in any::<prop::sample::Index>(), upper in any::<bool>()) {
        let words = known_words();
        let word = index.get(&words);
        let word = if upper { word.to_ascii_uppercase() } else { word.to_ascii_lowercase() };
        let text = format!("SELECT {} FROM users", word);
        prop_assert!(check_spelling(&text, &test_catalog(), None).is_empty());
    }

    #[test]
    fn applied_cursor_follows_label(text in sql_fragment()) {
        let catalog = test_catalog();
        let cursor = text.len();
        for s in suggest(&text, cursor, &catalog) {
            let applied = apply_suggestion(&text, cursor, &s);
            prop_assert!(applied.cursor >= s.label.len());
            let start = applied.cursor - s.label.len();
            prop_assert_eq!(&applied.text[start..applied.cursor], s.label.as_str());
        }
    }
}
