//! sqlassist - Context-aware SQL editing assistance
//!
//! sqlassist is the analysis engine behind a SQL editor's inline help: it
//! works out what the cursor is pointing at, offers completions, and
//! underlines words that look misspelled. It is consumed as a library by an
//! editor surface and ships with a small CLI for scripting and debugging.
//!
//! # Features
//!
//! - **Context Resolution**: Table position, join condition, `alias.` column, select list
//! - **Suggestions**: Tables, columns, inferred join conditions, keywords and functions
//! - **Ghost Text**: Inline preview of the current suggestion with cycling
//! - **Spell Checking**: Casing consistency and edit-distance typo detection
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`catalog`]: Known tables and columns supplied by the host
//! - [`sql`]: The pure analysis engine
//! - [`completer`]: Ghost-text cycling state for hosts
//! - [`report`]: Plain-text rendering of results
//! - [`config`]: User settings
//! - [`error`]: Error types and result aliases
//!
//! # Example
//!
//! ```
//! use sqlassist::catalog::{Catalog, Table};
//! use sqlassist::sql::{apply_suggestion, check_spelling, suggest};
//!
//! let catalog = Catalog::from_tables(vec![
//!     Table::new("orders", &["id", "user_id", "total"]),
//!     Table::new("users", &["id", "name"]),
//! ]);
//!
//! let text = "SELECT * FROM orders o JOIN users u ON ";
//! let suggestions = suggest(text, text.len(), &catalog);
//! assert_eq!(suggestions[0].label, "o.user_id = u.id");
//!
//! let applied = apply_suggestion(text, text.len(), &suggestions[0]);
//! assert!(applied.text.ends_with("ON o.user_id = u.id"));
//!
//! let spans = check_spelling("SELECT * FROM ordres", &catalog, None);
//! assert_eq!(spans[0].word, "ordres");
//! ```

pub mod catalog;
pub mod completer;
pub mod config;
pub mod error;
pub mod report;
pub mod sql;

pub use error::{CatalogError, ConfigError};
