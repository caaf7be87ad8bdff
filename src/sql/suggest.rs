//! Suggestion generation
//!
//! Turns a resolved [`CursorContext`] and the partial word into an ordered
//! candidate list, and applies an accepted candidate back to the buffer.

use crate::catalog::{Catalog, Table};
use crate::sql::context::{self, CursorContext, TableBinding};
use crate::sql::vocabulary;
use serde::Serialize;
use std::collections::HashSet;

/// Type of suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Keyword,
    Table,
    Column,
    Function,
    JoinCondition,
}

/// A completion candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The text to insert
    pub label: String,
    pub kind: SuggestionKind,
    /// Table a column belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_table: Option<String>,
    /// Extra display information (the table pair for join conditions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Suggestion {
    fn new(label: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            origin_table: None,
            detail: None,
        }
    }

    fn column(name: &str, table: &Table) -> Self {
        Self {
            origin_table: Some(table.name.clone()),
            ..Self::new(name, SuggestionKind::Column)
        }
    }
}

/// Buffer and cursor after accepting a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applied {
    pub text: String,
    pub cursor: usize,
}

/// Build the ordered candidate list for `context`.
///
/// Structured candidates come first in catalog order, followed by keywords
/// and then functions that extend the partial word. Duplicate labels keep
/// their first occurrence. An empty result means there is nothing to offer.
pub fn generate_suggestions(
    context: &CursorContext,
    partial: &str,
    catalog: &Catalog,
) -> Vec<Suggestion> {
    let mut out = match context {
        CursorContext::AfterFromOrJoin { .. } => table_candidates(catalog, partial),
        CursorContext::AfterJoinOn { joining, in_scope } => {
            join_candidates(joining, in_scope, partial)
        }
        CursorContext::AfterAliasDot { table, .. } => {
            let after_dot = partial.rsplit('.').next().unwrap_or("");
            column_candidates(table, after_dot)
        }
        CursorContext::InSelectList { table } => column_candidates(table, partial),
        CursorContext::Other => Vec::new(),
    };
    out.extend(vocabulary_candidates(partial));

    let mut seen = HashSet::new();
    out.retain(|s| seen.insert(s.label.clone()));
    tracing::debug!(count = out.len(), partial, "Suggestions generated");
    out
}

/// Resolve the context at `cursor` and generate suggestions for it.
pub fn suggest(text: &str, cursor: usize, catalog: &Catalog) -> Vec<Suggestion> {
    let context = context::resolve_context(text, cursor, catalog);
    let partial = context::partial_word(text, cursor);
    generate_suggestions(&context, partial, catalog)
}

/// Replace the partial word at `cursor` with the suggestion's label.
///
/// For a column picked after `alias.` only the part after the last dot is
/// replaced; every other kind replaces the whole partial word. The returned
/// cursor sits immediately after the inserted label.
pub fn apply_suggestion(text: &str, cursor: usize, suggestion: &Suggestion) -> Applied {
    let cursor = context::clamp_cursor(text, cursor);
    let partial = context::partial_word(text, cursor);
    let mut start = cursor - partial.len();
    if suggestion.kind == SuggestionKind::Column {
        if let Some(dot) = partial.rfind('.') {
            start += dot + 1;
        }
    }

    let mut new_text = String::with_capacity(text.len() + suggestion.label.len());
    new_text.push_str(&text[..start]);
    new_text.push_str(&suggestion.label);
    new_text.push_str(&text[cursor..]);

    Applied {
        text: new_text,
        cursor: start + suggestion.label.len(),
    }
}

/// Naive singular form: drop one trailing `s`.
pub fn singular(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn table_candidates(catalog: &Catalog, partial: &str) -> Vec<Suggestion> {
    catalog
        .tables
        .iter()
        .filter(|t| starts_with_ignore_case(&t.name, partial))
        .map(|t| Suggestion::new(t.name.as_str(), SuggestionKind::Table))
        .collect()
}

fn column_candidates(table: &Table, partial: &str) -> Vec<Suggestion> {
    table
        .columns
        .iter()
        .filter(|c| starts_with_ignore_case(c, partial))
        .map(|c| Suggestion::column(c, table))
        .collect()
}

/// Equality conditions between the joining table and each table in scope.
fn join_candidates(
    joining: &TableBinding,
    in_scope: &[TableBinding],
    partial: &str,
) -> Vec<Suggestion> {
    let needle = partial.to_ascii_lowercase();
    let mut out = Vec::new();

    for source in in_scope {
        let detail = format!("{} -> {}", source.table.name, joining.table.name);
        let mut push = |label: String| {
            if needle.is_empty() || label.to_ascii_lowercase().contains(&needle) {
                out.push(Suggestion {
                    detail: Some(detail.clone()),
                    ..Suggestion::new(label, SuggestionKind::JoinCondition)
                });
            }
        };

        // source.<joining>_id = joining.id
        let fk = format!("{}_id", singular(&joining.table.name));
        if let (Some(col), Some(id)) = (source.table.column(&fk), joining.table.column("id")) {
            push(format!(
                "{}.{} = {}.{}",
                source.qualifier(),
                col,
                joining.qualifier(),
                id
            ));
        }

        // joining.<source>_id = source.id
        let fk = format!("{}_id", singular(&source.table.name));
        if let (Some(col), Some(id)) = (joining.table.column(&fk), source.table.column("id")) {
            push(format!(
                "{}.{} = {}.{}",
                joining.qualifier(),
                col,
                source.qualifier(),
                id
            ));
        }

        // shared column names
        for col in &joining.table.columns {
            if col.eq_ignore_ascii_case("id") {
                continue;
            }
            if let Some(other) = source.table.column(col) {
                push(format!(
                    "{}.{} = {}.{}",
                    joining.qualifier(),
                    col,
                    source.qualifier(),
                    other
                ));
            }
        }
    }

    out
}

/// Keywords, then functions, that the partial word is a strict prefix of.
fn vocabulary_candidates(partial: &str) -> Vec<Suggestion> {
    if partial.is_empty() {
        return Vec::new();
    }
    let upper = partial.to_ascii_uppercase();
    let extends = |word: &&str| word.len() > upper.len() && word.starts_with(upper.as_str());

    let keywords = vocabulary::keywords()
        .iter()
        .copied()
        .filter(extends)
        .map(|kw| Suggestion::new(kw, SuggestionKind::Keyword));
    let functions = vocabulary::functions()
        .iter()
        .copied()
        .filter(extends)
        .map(|f| Suggestion::new(f, SuggestionKind::Function));
    keywords.chain(functions).collect()
}
