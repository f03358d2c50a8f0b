//! Escape-aware segmentation of the program buffer.
//!
//! One scan pass splits the buffer into a literal output prefix and, when
//! three unescaped delimiters lie ahead, a decoded (pattern, replacement)
//! rule plus the raw remainder. Escape markers are interpreted here and only
//! here: the prefix, pattern, and replacement come out decoded, while the
//! remainder is handed back as raw program text for the rewriter to match
//! against.

use alloc::string::{String, ToString};
use core::str::Chars;

/// The character that bounds the pattern and replacement segments of a rule.
pub(crate) const DELIMITER: char = '/';

/// The character that forces the following character to be taken literally.
pub(crate) const ESCAPE: char = '\\';

/// Result of scanning the buffer for the next rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scan {
    /// Fewer than three unescaped delimiters remain: `prefix` is everything
    /// the program still emits before halting.
    Tail { prefix: String },
    /// A complete rule. `prefix` is emitted first, then `remainder` is
    /// folded under (`pattern` → `replacement`).
    Rule {
        prefix: String,
        pattern: String,
        replacement: String,
        remainder: String,
    },
}

/// Splits `buffer` into output prefix, rule, and remainder.
///
/// An escaped delimiter contributes a literal delimiter to the current
/// segment and never terminates it. An escape marker as the very last
/// character escapes nothing and is dropped without contributing a
/// character.
pub(crate) fn split_step(buffer: &str) -> Scan {
    let mut cursor = Cursor::new(buffer);

    let mut prefix = String::new();
    if !cursor.segment(&mut prefix) {
        return Scan::Tail { prefix };
    }

    let mut pattern = String::new();
    if !cursor.segment(&mut pattern) {
        return Scan::Tail { prefix };
    }

    let mut replacement = String::new();
    if !cursor.segment(&mut replacement) {
        return Scan::Tail { prefix };
    }

    Scan::Rule {
        prefix,
        pattern,
        replacement,
        remainder: cursor.rest().to_string(),
    }
}

/// Left-to-right cursor over the buffer being segmented.
struct Cursor<'src> {
    chars: Chars<'src>,
}

impl<'src> Cursor<'src> {
    fn new(buffer: &'src str) -> Self {
        Self {
            chars: buffer.chars(),
        }
    }

    /// Decodes one segment into `out`, consuming up to and including the
    /// terminating unescaped delimiter. Returns `false` if the buffer ran
    /// out first.
    fn segment(&mut self, out: &mut String) -> bool {
        while let Some(c) = self.chars.next() {
            match c {
                DELIMITER => return true,
                ESCAPE => {
                    // A trailing escape marker escapes nothing.
                    if let Some(escaped) = self.chars.next() {
                        out.push(escaped);
                    }
                }
                other => out.push(other),
            }
        }
        false
    }

    /// The raw, not-yet-scanned tail of the buffer.
    fn rest(&self) -> &'src str {
        self.chars.as_str()
    }
}
