//! Whitespace tokenization shared by every line source variant.
//!
//! A separator is any character with the Unicode `White_Space` property
//! (`char::is_whitespace`). Runs of separators collapse into one boundary
//! and leading or trailing separators never produce empty tokens.

/// Borrowing iterator over the whitespace-delimited tokens of `line`.
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(char::is_whitespace).filter(|t| !t.is_empty())
}

/// Split `line` into owned tokens.
pub fn split_tokens(line: &str) -> Vec<String> {
    tokens(line).map(str::to_owned).collect()
}
