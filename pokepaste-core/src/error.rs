use thiserror::Error;

/// Failure to parse one Pokémon block. Other blocks are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("stat line '{line}' has {count} values, expected at most 6")]
    TooManyStatValues { line: String, count: usize },
    #[error("unbalanced parentheses in name line '{line}'")]
    UnbalancedParentheses { line: String },
}
