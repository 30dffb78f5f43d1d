use std::fmt;

use crate::error::RuntimeError;

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Maps an operator character to its variant.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character the operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength: `1` for `+` and `-`, `2` for `*` and `/`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator to `a` (left operand) and `b` (right operand).
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when dividing by exactly zero.
    ///
    /// # Example
    /// ```
    /// use rpn_calc::{error::RuntimeError, interpreter::token::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(8.0, 3.0), Ok(5.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64, RuntimeError> {
        Ok(match self {
               Self::Add => a + b,
               Self::Sub => a - b,
               Self::Mul => a * b,
               Self::Div => {
                   if b == 0.0 {
                       return Err(RuntimeError::DivisionByZero);
                   }
                   a / b
               },
           })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A lexical token of an arithmetic expression.
///
/// Tokens carry their source text only, never a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of digits and `.` characters, kept as text until evaluation.
    Number(String),
    /// A single lowercase letter.
    Identifier(char),
    /// `+`, `-`, `*` or `/`.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// A run of several characters starting with a letter, such as `ab` or
    /// `x1`. Treated as an operand like [`Token::Identifier`] and rejected
    /// only at evaluation.
    Word(String),
}

impl Token {
    /// Operator precedence of the token, `0` for anything that is not an
    /// operator.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Operator(op) => op.precedence(),
            _ => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) | Self::Word(text) => write!(f, "{text}"),
            Self::Identifier(c) => write!(f, "{c}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Renders a token sequence with single spaces between tokens.
///
/// # Example
/// ```
/// use rpn_calc::interpreter::token::{Operator, Token, format_postfix};
///
/// let rpn = [Token::Number("1".into()), Token::Number("2".into()), Token::Operator(Operator::Add)];
/// assert_eq!(format_postfix(&rpn), "1 2 +");
/// ```
#[must_use]
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
