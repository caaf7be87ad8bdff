//! Common test utilities and helpers
//!
//! Shared fixtures for integration tests.

#![allow(dead_code)]

use sqlassist::catalog::{Catalog, Table};

/// Create a standard test catalog for consistent testing
pub fn test_catalog() -> Catalog {
    Catalog::from_tables(vec![
        Table::new("users", &["id", "name", "email", "created_at"]),
        Table::new("orders", &["id", "user_id", "total", "status", "created_at"]),
        Table::new("order_items", &["id", "order_id", "product_id", "quantity"]),
        Table::new("products", &["id", "name", "price", "category"]),
    ])
}

/// Catalog used by the join-condition scenarios
pub fn orders_users_catalog() -> Catalog {
    Catalog::from_tables(vec![
        Table::new("orders", &["id", "user_id"]),
        Table::new("users", &["id", "name"]),
    ])
}

/// Split `"SELECT | FROM t"` into the text without the marker and the
/// cursor offset where the marker was.
pub fn with_cursor(marked: &str) -> (String, usize) {
    let cursor = marked.find('|').expect("cursor marker");
    let mut text = marked.to_string();
    text.remove(cursor);
    (text, cursor)
}
