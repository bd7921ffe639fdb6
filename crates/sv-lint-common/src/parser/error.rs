//! Parse error types.

use thiserror::Error;

/// Errors produced while building the syntax tree.
///
/// A parse error never discards the token stream or the line table; it only
/// means the document has no syntax tree, so tree-based lint passes are
/// skipped while every other pass still runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated {construct} starting at byte {offset}")]
    Unterminated {
        construct: &'static str,
        offset: usize,
    },

    #[error("unmatched '{keyword}' at byte {offset}")]
    UnmatchedEnd { keyword: &'static str, offset: usize },
}

impl ParseError {
    /// Byte offset the error is anchored at.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Unterminated { offset, .. } => *offset,
            ParseError::UnmatchedEnd { offset, .. } => *offset,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
