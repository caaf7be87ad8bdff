//! SQL analysis engine
//!
//! Context resolution, suggestion generation and spell checking over a plain
//! text buffer. Every function here is pure: all state comes in through the
//! arguments and nothing is cached between calls.

pub mod context;
pub mod lexer;
pub mod spell;
pub mod suggest;
pub mod vocabulary;

pub use context::{CursorContext, TableBinding, partial_word, resolve_context};
pub use spell::{MisspelledSpan, SpellConfig, SpellIssue, check_spelling, check_spelling_with};
pub use suggest::{
    Applied, Suggestion, SuggestionKind, apply_suggestion, generate_suggestions, suggest,
};
