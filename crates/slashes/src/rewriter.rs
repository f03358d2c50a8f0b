//! First-occurrence substitution over the raw program buffer.
//!
//! The pattern and replacement arrive already decoded; the buffer stays raw.
//! Matching is literal, byte-for-byte, at the lowest starting index. Both
//! sides are valid UTF-8, so every match lands on a character boundary.

use alloc::string::String;

use bstr::ByteSlice;

/// A (pattern, replacement) rule captured for one driver iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rule {
    pub pattern: String,
    pub replacement: String,
}

/// Replaces the leftmost occurrence of `pattern` in `buffer`, or returns
/// `None` if the buffer is already at fixpoint for this rule.
///
/// An empty pattern occurs in every buffer at index 0, including the empty
/// buffer, so it never reaches a fixpoint; folding it loops forever by
/// language definition.
pub(crate) fn substitute_once(buffer: &str, pattern: &str, replacement: &str) -> Option<String> {
    let start = buffer.as_bytes().find(pattern.as_bytes())?;
    let end = start + pattern.len();

    let mut next = String::with_capacity(buffer.len() - pattern.len() + replacement.len());
    next.push_str(&buffer[..start]);
    next.push_str(replacement);
    next.push_str(&buffer[end..]);
    Some(next)
}
