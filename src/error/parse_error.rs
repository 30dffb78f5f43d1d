#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression or
/// reordering it into postfix form.
pub enum ParseError {
    /// The input contained no tokens at all (empty or only spaces).
    EmptyExpression,
    /// The tokenizer met a character outside the recognised set.
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// A token of unrecognised shape reached the converter. Tokens produced
    /// by the lexer all have a defined role there, so the pipeline itself
    /// does not raise this.
    InvalidToken {
        /// The text of the offending token.
        token: String,
    },
    /// A `(` without a matching `)`, or the other way around.
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "empty expression"),
            Self::InvalidCharacter { character } => {
                write!(f, "invalid character: '{}'", character.escape_default())
            },
            Self::InvalidToken { token } => write!(f, "invalid token: {token}"),
            Self::MismatchedParentheses => write!(f, "mismatched parentheses"),
        }
    }
}

impl std::error::Error for ParseError {}
