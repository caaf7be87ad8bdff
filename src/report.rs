//! Plain-text rendering of analysis results
//!
//! Used by the CLI. Flagged words are underlined with carets; the caret
//! column is computed from display width so wide characters earlier on the
//! line don't shift the underline.

use crate::sql::{CursorContext, MisspelledSpan, SpellIssue, Suggestion, SuggestionKind};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// One line per suggestion: `label  (kind, detail)`. `ghost` is the inline
/// suffix a host would preview after the cursor.
pub fn render_suggestions(
    context: &CursorContext,
    suggestions: &[Suggestion],
    ghost: Option<&str>,
) -> String {
    let mut out = format!("context: {}\n", context_name(context));
    if let Some(suffix) = ghost {
        let _ = writeln!(out, "ghost: {}", suffix);
    }
    if suggestions.is_empty() {
        out.push_str("no suggestions\n");
        return out;
    }
    for (i, s) in suggestions.iter().enumerate() {
        let marker = if i == 0 { '>' } else { ' ' };
        let _ = write!(out, "{} {}  ({}", marker, s.label, kind_name(s.kind));
        if let Some(table) = &s.origin_table {
            let _ = write!(out, ", {}", table);
        }
        if let Some(detail) = &s.detail {
            let _ = write!(out, ", {}", detail);
        }
        out.push_str(")\n");
    }
    out
}

/// Each flagged word with its source line and a caret underline.
pub fn render_spans(text: &str, spans: &[MisspelledSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        let line_start = text[..span.start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = text[span.start..]
            .find('\n')
            .map_or(text.len(), |i| span.start + i);
        let line_no = text[..span.start].matches('\n').count() + 1;
        let line = &text[line_start..line_end];
        let column = text[line_start..span.start].width();
        let gutter = format!("{} | ", line_no);

        let message = match &span.issue {
            SpellIssue::Casing => format!("inconsistent casing in '{}'", span.word),
            SpellIssue::Typo { closest, distance } => format!(
                "'{}' may be a misspelling of '{}' (distance {})",
                span.word, closest, distance
            ),
        };
        let _ = writeln!(out, "{}:{}: {}", line_no, column + 1, message);
        let _ = writeln!(out, "{}{}", gutter, line);
        let _ = writeln!(
            out,
            "{}{}",
            " ".repeat(gutter.len() + column),
            "^".repeat(span.word.width().max(1))
        );
    }
    out
}

pub fn context_name(context: &CursorContext) -> String {
    match context {
        CursorContext::AfterFromOrJoin { partial } if partial.is_empty() => {
            "table name".to_string()
        }
        CursorContext::AfterFromOrJoin { partial } => format!("table name starting '{}'", partial),
        CursorContext::AfterJoinOn { joining, .. } => {
            format!("join condition for {}", joining.table.name)
        }
        CursorContext::AfterAliasDot { alias, table } => {
            format!("column of {} (via {})", table.name, alias)
        }
        CursorContext::InSelectList { table } => format!("column of {}", table.name),
        CursorContext::Other => "none".to_string(),
    }
}

fn kind_name(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Keyword => "keyword",
        SuggestionKind::Table => "table",
        SuggestionKind::Column => "column",
        SuggestionKind::Function => "function",
        SuggestionKind::JoinCondition => "join",
    }
}
