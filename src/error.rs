/// Tokenizing and conversion errors.
///
/// Defines all error types that can occur before evaluation starts: empty
/// input, unrecognised characters, malformed tokens and unbalanced
/// parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as division by zero or a structurally invalid sequence.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of the evaluation pipeline.
///
/// Each stage fails with its own error type; this enum is what
/// [`crate::evaluate_expression`] hands back to the caller.
pub enum Error {
    /// Tokenizing or infix-to-postfix conversion failed.
    Parse(ParseError),
    /// Postfix evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
