//! Error types for spelling-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a word list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid word at line {line}: {value}")]
    InvalidWord { line: usize, value: String },

    #[error("invalid difficulty at line {line}: {value} (expected 1-5)")]
    InvalidDifficulty { line: usize, value: String },

    #[error("duplicate word {word} at line {line}")]
    DuplicateWord { word: String, line: usize },

    #[error("empty word list")]
    EmptyFile,
}
