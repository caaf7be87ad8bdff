//! Cursor context resolution
//!
//! Classifies where the cursor sits in a SQL buffer (table position, join
//! condition, `alias.` column, select list) and resolves the tables that are
//! in scope. Resolution is a fixed, ordered list of matchers: the first one
//! that recognizes the text before the cursor wins. Several patterns can match
//! the same ambiguous input, so the order is part of the contract.

use crate::catalog::{Catalog, Table};
use crate::sql::lexer::is_word_byte;
use crate::sql::vocabulary;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `FROM|JOIN` followed by an optional partial table name at the cursor.
static TABLE_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:FROM|JOIN)\s+([A-Za-z_][A-Za-z0-9_]*)?$").expect("valid regex")
});

/// `JOIN <table> [[AS] <alias>] ON <partial>` at the cursor.
static JOIN_CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bJOIN\s+([A-Za-z_][A-Za-z0-9_]*)(?:\s+(?:AS\s+)?([A-Za-z_][A-Za-z0-9_]*))?\s+ON\s+[A-Za-z0-9_.]*$",
    )
    .expect("valid regex")
});

/// `<identifier>.<partial>` at the cursor.
static ALIAS_DOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\.[A-Za-z0-9_]*$").expect("valid regex")
});

/// A table reference anywhere in the buffer.
static TABLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(FROM|JOIN)\s+([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex")
});

/// Optional alias right after a table reference.
static ALIAS_AFTER_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s+(?:AS\s+)?([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex")
});

static SELECT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSELECT\b").expect("valid regex"));

static FROM_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bFROM\b").expect("valid regex"));

/// A catalog table as referenced in the query, with its alias if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBinding {
    pub table: Table,
    pub alias: Option<String>,
}

impl TableBinding {
    /// The qualifier to use in generated SQL: the alias when present,
    /// otherwise the table name.
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table.name)
    }
}

/// Where the cursor sits, and what it can be completed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "context", rename_all = "snake_case")]
pub enum CursorContext {
    /// After `FROM` or `JOIN`: expecting a table name.
    AfterFromOrJoin { partial: String },

    /// After `JOIN <table> ... ON`: expecting a join condition.
    AfterJoinOn {
        joining: TableBinding,
        in_scope: Vec<TableBinding>,
    },

    /// After `<alias>.`: expecting a column of the bound table.
    AfterAliasDot { alias: String, table: Table },

    /// Between `SELECT` and the first `FROM`: expecting a column.
    InSelectList { table: Table },

    /// Nothing structured; only keyword/function matching applies.
    Other,
}

/// A raw table reference found in the text
#[derive(Debug, Clone, PartialEq, Eq)]
struct TableRef<'a> {
    /// Introduced by `FROM` rather than `JOIN`
    is_from: bool,
    table: &'a str,
    alias: Option<&'a str>,
}

/// Inputs shared by every matcher
struct Input<'a> {
    text: &'a str,
    before: &'a str,
    cursor: usize,
    catalog: &'a Catalog,
}

type Matcher = fn(&Input<'_>) -> Option<CursorContext>;

/// Matchers in precedence order.
const MATCHERS: [(&str, Matcher); 4] = [
    ("table_position", table_position),
    ("join_condition", join_condition),
    ("alias_dot", alias_dot),
    ("select_list", select_list),
];

/// Classify the cursor position in `text`.
///
/// Offsets are bytes; values past the end are clamped and offsets inside a
/// multi-byte character move back to its start. When the cursor sits inside
/// a word (a word character follows it) the result is always
/// [`CursorContext::Other`].
pub fn resolve_context(text: &str, cursor: usize, catalog: &Catalog) -> CursorContext {
    let cursor = clamp_cursor(text, cursor);
    if is_mid_word(text, cursor) {
        tracing::debug!(cursor, "Cursor inside a word, no context");
        return CursorContext::Other;
    }

    let input = Input {
        text,
        before: &text[..cursor],
        cursor,
        catalog,
    };
    for (name, matcher) in MATCHERS {
        if let Some(context) = matcher(&input) {
            tracing::debug!(matcher = name, cursor, "Context resolved");
            return context;
        }
    }
    CursorContext::Other
}

/// The partial word typed immediately before the cursor.
///
/// The text before the cursor is split on whitespace, commas and parentheses;
/// the last piece is the partial word (so `u.na` stays whole). Returns an
/// empty string when a word character follows the cursor.
pub fn partial_word(text: &str, cursor: usize) -> &str {
    let cursor = clamp_cursor(text, cursor);
    if is_mid_word(text, cursor) {
        return "";
    }
    let before = &text[..cursor];
    let start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &before[start..]
}

/// Clamp `cursor` into `text` and back off to a char boundary.
pub(crate) fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

fn is_mid_word(text: &str, cursor: usize) -> bool {
    text.as_bytes().get(cursor).is_some_and(|&b| is_word_byte(b))
}

// ── Matchers ────────────────────────────────────────────────

fn table_position(input: &Input<'_>) -> Option<CursorContext> {
    let caps = TABLE_POSITION.captures(input.before)?;
    let partial = caps.get(1).map_or("", |m| m.as_str());
    Some(CursorContext::AfterFromOrJoin {
        partial: partial.to_string(),
    })
}

fn join_condition(input: &Input<'_>) -> Option<CursorContext> {
    let caps = JOIN_CONDITION.captures(input.before)?;
    let table = input.catalog.table(caps.get(1)?.as_str())?;
    let joining = TableBinding {
        table: table.clone(),
        alias: caps.get(2).map(|m| m.as_str().to_string()),
    };

    let in_scope = table_refs(input.before)
        .into_iter()
        .filter(|r| !r.table.eq_ignore_ascii_case(&joining.table.name))
        .filter_map(|r| bind(&r, input.catalog))
        .collect();

    Some(CursorContext::AfterJoinOn { joining, in_scope })
}

fn alias_dot(input: &Input<'_>) -> Option<CursorContext> {
    let caps = ALIAS_DOT.captures(input.before)?;
    let ident = caps.get(1)?.as_str();

    let bindings: Vec<TableBinding> = table_refs(input.text)
        .iter()
        .filter_map(|r| bind(r, input.catalog))
        .collect();
    let bound = bindings
        .iter()
        .find(|b| b.alias.as_deref().is_some_and(|a| a.eq_ignore_ascii_case(ident)))
        .or_else(|| {
            bindings
                .iter()
                .find(|b| b.table.name.eq_ignore_ascii_case(ident))
        })?;

    Some(CursorContext::AfterAliasDot {
        alias: ident.to_string(),
        table: bound.table.clone(),
    })
}

fn select_list(input: &Input<'_>) -> Option<CursorContext> {
    let select = SELECT_KEYWORD.find(input.text)?;
    if input.cursor <= select.end() {
        return None;
    }
    if let Some(from) = FROM_KEYWORD.find_at(input.text, select.end()) {
        if input.cursor > from.start() {
            return None;
        }
    }

    let table = table_refs(input.text)
        .into_iter()
        .filter(|r| r.is_from)
        .find_map(|r| input.catalog.table(r.table))?;

    Some(CursorContext::InSelectList {
        table: table.clone(),
    })
}

// ── Table references ────────────────────────────────────────

/// Every `FROM|JOIN <table> [[AS] <alias>]` in `text`, in order. Keywords are
/// never taken as aliases, so `FROM orders JOIN users` yields two references.
fn table_refs(text: &str) -> Vec<TableRef<'_>> {
    TABLE_REF
        .captures_iter(text)
        .filter_map(|caps| {
            let keyword = caps.get(1)?;
            let table = caps.get(2)?;
            let alias = ALIAS_AFTER_TABLE
                .captures(&text[table.end()..])
                .and_then(|a| a.get(1))
                .map(|a| a.as_str())
                .filter(|a| !vocabulary::is_keyword(a));
            Some(TableRef {
                is_from: keyword.as_str().eq_ignore_ascii_case("from"),
                table: table.as_str(),
                alias,
            })
        })
        .collect()
}

fn bind(r: &TableRef<'_>, catalog: &Catalog) -> Option<TableBinding> {
    catalog.table(r.table).map(|table| TableBinding {
        table: table.clone(),
        alias: r.alias.map(str::to_string),
    })
}
