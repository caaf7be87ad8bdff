//! Spell checker tests over realistic buffers

use crate::common::test_catalog;
use sqlassist::catalog::{Catalog, Table};
use sqlassist::sql::{SpellIssue, check_spelling};

#[test]
fn produts_scenario() {
    let catalog = Catalog::from_tables(vec![Table::new("products", &["id", "name", "price"])]);
    let spans = check_spelling("SELECT * FROM produts", &catalog, None);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].word, "produts");
    assert_eq!(
        spans[0].issue,
        SpellIssue::Typo {
            closest: "products".to_string(),
            distance: 1
        }
    );
}

#[test]
fn casing_rule() {
    let catalog = test_catalog();
    let spans = check_spelling("SeLeCt name FROM users", &catalog, None);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].issue, SpellIssue::Casing);

    for ok in ["SELECT", "select", "Select"] {
        let text = format!("{ok} name FROM users");
        assert!(check_spelling(&text, &catalog, None).is_empty(), "{ok}");
    }
}

#[test]
fn literal_exclusion() {
    let catalog = test_catalog();
    let text = "SELECT name FROM users WHERE status = 'pending SELEKT review'";
    assert!(check_spelling(text, &catalog, None)
        .iter()
        .all(|s| s.word != "SELEKT"));

    let text = "SELECT name FROM users WHERE name = 'it''s SELEKT'";
    assert!(check_spelling(text, &catalog, None).is_empty());
}

#[test]
fn multiline_query_with_comments() {
    let catalog = test_catalog();
    let text = "\
-- monthly totals, draft
SELECT u.name, SUM(o.total) AS revenu
FROM users u
JOIN orders o ON o.user_id = u.id
/* grup by later */
WHERE o.status = 'paid'
GROUP BY u.name";
    let spans = check_spelling(text, &catalog, None);
    let words: Vec<&str> = spans.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["revenu"]);
    assert_eq!(&text[spans[0].start..spans[0].end], "revenu");
}

#[test]
fn word_being_typed_is_not_flagged() {
    let catalog = test_catalog();
    let text = "SELECT nam";
    // "nam" is one edit from "name" but the cursor is at its end
    assert!(check_spelling(text, &catalog, Some(text.len())).is_empty());
    assert_eq!(check_spelling(text, &catalog, None).len(), 1);
}

#[test]
fn compound_identifiers() {
    let catalog = test_catalog();
    let spans = check_spelling("SELECT ordr_total, user_emial FROM orders", &catalog, None);
    let words: Vec<&str> = spans.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["ordr_total", "user_emial"]);
    assert!(check_spelling("SELECT order_id, created_at FROM orders", &catalog, None).is_empty());
}
