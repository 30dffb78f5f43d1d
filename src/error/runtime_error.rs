#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An identifier reached evaluation. There is no variable binding, so
    /// identifiers are never evaluable.
    UnsupportedIdentifier {
        /// The identifier as written.
        name: String,
    },
    /// A numeric literal could not be parsed as a floating-point number.
    MalformedNumber {
        /// The literal text as it appeared in the input.
        literal: String,
    },
    /// An operator found fewer than two operands on the evaluation stack.
    StackUnderflow {
        /// The operator symbol.
        operator: char,
    },
    /// The postfix sequence was structurally invalid: a token that cannot
    /// appear in postfix form, or not exactly one value left at the end.
    MalformedPostfix {
        /// Number of values left on the stack when the error was detected.
        remaining: usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedIdentifier { name } => {
                write!(f, "identifiers are not supported in evaluation: '{name}'")
            },
            Self::MalformedNumber { literal } => write!(f, "malformed number: '{literal}'"),
            Self::StackUnderflow { operator } => {
                write!(f, "invalid postfix expression: operator '{operator}' is missing operands")
            },
            Self::MalformedPostfix { remaining } => write!(f,
                                                           "invalid postfix expression: {remaining} values left on the stack"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
