//! Buffer scanning helpers
//!
//! Finds the byte ranges of string literals and comments across a whole
//! buffer, and walks identifier tokens outside of them. Everything here works
//! on bytes: all delimiters are ASCII, so ranges always land on char
//! boundaries.

use std::ops::Range;

/// Half-open byte ranges that must not be analyzed as SQL text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralRanges {
    ranges: Vec<Range<usize>>,
}

impl LiteralRanges {
    /// Scan `text` for quoted literals (`'...'`, `"..."` with doubled-quote
    /// escapes) and comments (`-- ...`, `/* ... */`). Unterminated literals
    /// and comments extend to the end of the buffer.
    pub fn scan(text: &str) -> Self {
        let bytes = text.as_bytes();
        let len = bytes.len();
        let mut ranges = Vec::new();
        let mut i = 0;

        while i < len {
            let b = bytes[i];

            // ── Line comment: -- to end of line ──────────────────
            if b == b'-' && i + 1 < len && bytes[i + 1] == b'-' {
                let start = i;
                while i < len && bytes[i] != b'\n' {
                    i += 1;
                }
                ranges.push(start..i);
                continue;
            }

            // ── Block comment: /* ... */ ─────────────────────────
            if b == b'/' && i + 1 < len && bytes[i + 1] == b'*' {
                let start = i;
                i += 2;
                loop {
                    if i >= len {
                        break; // unterminated
                    }
                    if i + 1 < len && bytes[i] == b'*' && bytes[i + 1] == b'/' {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
                ranges.push(start..i);
                continue;
            }

            // ── Quoted literal with doubled-quote escape ─────────
            if b == b'\'' || b == b'"' {
                let quote = b;
                let start = i;
                i += 1;
                loop {
                    if i >= len {
                        break; // unterminated
                    }
                    if bytes[i] == quote {
                        i += 1;
                        if i < len && bytes[i] == quote {
                            i += 1;
                            continue;
                        }
                        break;
                    }
                    i += 1;
                }
                ranges.push(start..i);
                continue;
            }

            i += 1;
        }

        Self { ranges }
    }

    /// Whether `offset` falls inside any literal or comment.
    pub fn contains(&self, offset: usize) -> bool {
        // Ranges are produced in ascending, non-overlapping order.
        let idx = self.ranges.partition_point(|r| r.end <= offset);
        self.ranges.get(idx).is_some_and(|r| r.contains(&offset))
    }

    pub fn as_slice(&self) -> &[Range<usize>] {
        &self.ranges
    }
}

/// An identifier token: `[A-Za-z_][A-Za-z0-9_]*`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Iterate identifier tokens in `text`, in order of position.
///
/// A token only starts at a word boundary, so `123abc` yields nothing and
/// `x1y` yields `x1y`. Tokens inside literals are still produced; callers
/// filter them with [`LiteralRanges`].
pub fn identifiers(text: &str) -> impl Iterator<Item = Token<'_>> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    std::iter::from_fn(move || {
        while i < len {
            let b = bytes[i];
            if b.is_ascii_alphabetic() || b == b'_' {
                let start = i;
                while i < len && is_word_byte(bytes[i]) {
                    i += 1;
                }
                return Some(Token {
                    text: &text[start..i],
                    start,
                    end: i,
                });
            }
            if b.is_ascii_digit() {
                // numbers and digit-led words are skipped whole
                while i < len && is_word_byte(bytes[i]) {
                    i += 1;
                }
                continue;
            }
            i += 1;
        }
        None
    })
}

/// `[A-Za-z0-9_]`
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
