//! Suggestion flow tests: resolve, generate, apply

use crate::common::{orders_users_catalog, test_catalog, with_cursor};
use sqlassist::catalog::{Catalog, Table};
use sqlassist::sql::{
    CursorContext, SuggestionKind, apply_suggestion, generate_suggestions, partial_word,
    resolve_context, suggest,
};

fn labels(text: &str, cursor: usize, catalog: &Catalog) -> Vec<String> {
    suggest(text, cursor, catalog)
        .into_iter()
        .map(|s| s.label)
        .collect()
}

#[test]
fn every_table_after_from_and_join() {
    let catalog = test_catalog();
    for marked in ["SELECT * FROM |", "select * from users u join |", "SELECT *\nFROM\n  |"] {
        let (text, cursor) = with_cursor(marked);
        let s = suggest(&text, cursor, &catalog);
        assert_eq!(s.len(), catalog.tables.len(), "{marked}");
        assert!(s.iter().all(|s| s.kind == SuggestionKind::Table));
        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        let got: Vec<&str> = s.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(got, names);
    }
}

#[test]
fn select_list_columns_of_users() {
    let catalog = test_catalog();
    let (text, cursor) = with_cursor("SELECT | FROM users");
    let s = suggest(&text, cursor, &catalog);
    let got: Vec<&str> = s.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(got, vec!["id", "name", "email", "created_at"]);
    assert!(s.iter().all(|s| s.kind == SuggestionKind::Column));

    let (text, cursor) = with_cursor("SELECT cr| FROM users");
    let s = suggest(&text, cursor, &catalog);
    let columns: Vec<&str> = s
        .iter()
        .filter(|s| s.kind == SuggestionKind::Column)
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(columns, vec!["created_at"]);
}

#[test]
fn join_condition_scenario() {
    let catalog = orders_users_catalog();
    let text = "SELECT * FROM orders o JOIN users u ON ";
    assert!(labels(text, text.len(), &catalog).contains(&"o.user_id = u.id".to_string()));
}

#[test]
fn misspelled_table_offers_nothing() {
    let catalog = Catalog::from_tables(vec![Table::new("products", &["id", "name"])]);
    let text = "SELECT * FROM produts";
    assert!(suggest(text, text.len(), &catalog).is_empty());
}

#[test]
fn applying_then_resolving_again() {
    let catalog = test_catalog();
    let (text, cursor) = with_cursor("SELECT * FROM ord|");
    let s = suggest(&text, cursor, &catalog);
    let applied = apply_suggestion(&text, cursor, &s[0]);
    assert_eq!(applied.text, "SELECT * FROM orders");
    assert_eq!(applied.cursor, cursor - 3 + s[0].label.len());

    // re-resolving sees the whole inserted label before the cursor
    assert_eq!(partial_word(&applied.text, applied.cursor), "orders");
    assert_eq!(
        resolve_context(&applied.text, applied.cursor, &catalog),
        CursorContext::AfterFromOrJoin {
            partial: "orders".to_string()
        }
    );
}

#[test]
fn full_query_walkthrough() {
    let catalog = test_catalog();
    let mut text = String::from("SELECT * FROM o");
    let mut cursor = text.len();

    let s = suggest(&text, cursor, &catalog);
    let applied = apply_suggestion(&text, cursor, &s[0]);
    assert_eq!(applied.text, "SELECT * FROM orders");
    text = applied.text + " o JOIN us";
    cursor = text.len();

    let s = suggest(&text, cursor, &catalog);
    assert_eq!(s[0].label, "users");
    let applied = apply_suggestion(&text, cursor, &s[0]);
    text = applied.text + " u ON ";
    cursor = text.len();

    let s = suggest(&text, cursor, &catalog);
    assert_eq!(s[0].kind, SuggestionKind::JoinCondition);
    assert_eq!(s[0].label, "o.user_id = u.id");
    let applied = apply_suggestion(&text, cursor, &s[0]);
    assert_eq!(
        applied.text,
        "SELECT * FROM orders o JOIN users u ON o.user_id = u.id"
    );
    assert_eq!(applied.cursor, applied.text.len());
}

#[test]
fn alias_column_then_select_list() {
    let catalog = test_catalog();
    let (text, cursor) = with_cursor("SELECT o.st|, FROM orders o");
    let ctx = resolve_context(&text, cursor, &catalog);
    assert!(matches!(ctx, CursorContext::AfterAliasDot { ref alias, .. } if alias == "o"));
    let s = generate_suggestions(&ctx, partial_word(&text, cursor), &catalog);
    assert_eq!(s[0].label, "status");
    assert_eq!(s[0].origin_table.as_deref(), Some("orders"));

    let applied = apply_suggestion(&text, cursor, &s[0]);
    assert_eq!(applied.text, "SELECT o.status, FROM orders o");
}

#[test]
fn catalog_is_reread_every_call() {
    let mut catalog = test_catalog();
    let text = "SELECT * FROM ";
    assert_eq!(suggest(text, text.len(), &catalog).len(), 4);

    catalog.tables.push(Table::new("reviews", &["id", "product_id"]));
    assert_eq!(suggest(text, text.len(), &catalog).len(), 5);

    catalog.tables.retain(|t| t.name != "users");
    let got = labels(text, text.len(), &catalog);
    assert!(!got.contains(&"users".to_string()));
}

#[test]
fn malformed_sql_never_panics() {
    let catalog = test_catalog();
    let inputs = [
        "",
        ".",
        "JOIN",
        "FROM FROM FROM ",
        "SELECT ((( , . ON ON JOIN ",
        "SELECT * FROM orders o JOIN ON ",
        "'unterminated",
        "SELECT é.",
        "日本語 FROM ",
    ];
    for text in inputs {
        for cursor in 0..=text.len() + 2 {
            let _ = suggest(text, cursor, &catalog);
        }
    }
}
