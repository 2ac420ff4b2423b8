use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for malformed path expressions.
/// Every variant carries the byte offset of the offending character in the
/// expression text as given, anchors included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The expression does not start with `^` or does not end with `$`.
    #[error("malformed grammar: expected anchor '{expected}' at position {position}")]
    MissingAnchor { position: usize, expected: char },

    /// A character that is neither a direction nor a group delimiter.
    #[error("malformed grammar: unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { position: usize, found: char },

    /// A group was opened but the expression ended before its `)`.
    #[error("malformed grammar: group opened at position {position} is never closed")]
    UnclosedGroup { position: usize },

    /// A `)` with no open group to close.
    #[error("malformed grammar: unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },
}

impl GrammarError {
    /// Returns the byte offset the error points at.
    pub fn position(&self) -> usize {
        match self {
            GrammarError::MissingAnchor { position, .. }
            | GrammarError::UnexpectedCharacter { position, .. }
            | GrammarError::UnclosedGroup { position }
            | GrammarError::UnmatchedClose { position } => *position,
        }
    }
}

/// Error type for loading an expression from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the file content is not a valid expression.
    #[error("Failed to parse expression from '{0}': {1}")]
    Grammar(String, GrammarError),
}
