//! Inline ghost-text cycling
//!
//! The engine itself is stateless; this is the small piece of state a host
//! keeps between keystrokes to render the non-committed suffix after the
//! cursor and cycle through alternatives. It is rebuilt from a fresh
//! suggestion list whenever the buffer changes.

use crate::sql::suggest::{Suggestion, SuggestionKind};

/// Default number of candidates kept for cycling.
pub const DEFAULT_GHOST_CANDIDATES: usize = 5;

/// Ghost-text state: filtered candidates and the cycling index.
pub struct GhostText {
    candidates: Vec<Suggestion>,
    index: usize,
    /// Typed text the candidates extend (after the dot for alias columns)
    prefix: String,
}

impl GhostText {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            index: 0,
            prefix: String::new(),
        }
    }

    /// Rebuild from `suggestions` for the word `partial`.
    ///
    /// Only candidates whose label extends the typed prefix (case-insensitive)
    /// can be previewed inline; join conditions matched by substring and
    /// exact matches are dropped. Keeps at most `cap` candidates and returns
    /// the suffix of the first one.
    pub fn recompute(
        &mut self,
        suggestions: &[Suggestion],
        partial: &str,
        cap: usize,
    ) -> Option<String> {
        self.candidates.clear();
        self.index = 0;

        if suggestions.is_empty() {
            self.prefix.clear();
            return None;
        }

        for s in suggestions {
            if self.candidates.len() >= cap {
                break;
            }
            let prefix = typed_prefix(partial, s.kind);
            if s.label.len() > prefix.len()
                && s.label
                    .get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            {
                self.prefix = prefix.to_string();
                self.candidates.push(s.clone());
            }
        }

        self.suffix()
    }

    /// Advance to the next candidate (wraps around). Returns suffix.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.candidates.len();
        self.suffix()
    }

    /// Move to the previous candidate (wraps around). Returns suffix.
    pub fn prev(&mut self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        self.index = if self.index == 0 {
            self.candidates.len() - 1
        } else {
            self.index - 1
        };
        self.suffix()
    }

    /// The candidate currently previewed, for accepting it.
    pub fn current(&self) -> Option<&Suggestion> {
        self.candidates.get(self.index)
    }

    /// Clear all ghost-text state.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.index = 0;
        self.prefix.clear();
    }

    /// Whether there is anything to preview.
    pub fn is_active(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Ghost-text suffix: the current candidate minus the typed prefix.
    pub fn suffix(&self) -> Option<String> {
        self.candidates
            .get(self.index)
            .and_then(|c| c.label.get(self.prefix.len()..).map(|s| s.to_string()))
    }
}

impl Default for GhostText {
    fn default() -> Self {
        Self::new()
    }
}

/// The part of the partial word a candidate of `kind` would replace.
fn typed_prefix(partial: &str, kind: SuggestionKind) -> &str {
    match (kind, partial.rfind('.')) {
        (SuggestionKind::Column, Some(dot)) => &partial[dot + 1..],
        _ => partial,
    }
}
