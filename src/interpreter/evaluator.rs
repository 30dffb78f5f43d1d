use tracing::{debug, trace};

use crate::{error::RuntimeError, interpreter::token::Token};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Parses the text of a number token.
///
/// # Errors
/// Returns [`RuntimeError::MalformedNumber`] if the text is not a valid
/// floating-point literal, e.g. a bare `.` or `1.2.3`, or if its value is
/// out of the `f64` range, e.g. `1e400`.
pub fn parse_number(literal: &str) -> EvalResult<f64> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RuntimeError::MalformedNumber { literal: literal.to_string() }),
    }
}

/// Evaluates a postfix token sequence in a single left-to-right pass.
///
/// Numbers are pushed on a value stack; each operator pops its right operand
/// first, then its left one, and pushes the result. Exactly one value must be
/// left at the end.
///
/// # Errors
/// - [`RuntimeError::UnsupportedIdentifier`] as soon as an identifier is met.
/// - [`RuntimeError::MalformedNumber`] if a literal does not parse.
/// - [`RuntimeError::StackUnderflow`] if an operator has fewer than two
///   operands.
/// - [`RuntimeError::DivisionByZero`] if a divisor is exactly zero.
/// - [`RuntimeError::MalformedPostfix`] for parentheses or other tokens that
///   cannot appear in postfix form, or if the final stack does not hold
///   exactly one value.
///
/// # Example
/// ```
/// use rpn_calc::interpreter::{
///     evaluator::eval_postfix,
///     token::{Operator, Token},
/// };
///
/// let rpn = [Token::Number("8".into()),
///            Token::Number("3".into()),
///            Token::Operator(Operator::Sub),
///            Token::Number("1".into()),
///            Token::Operator(Operator::Sub)];
/// assert_eq!(eval_postfix(&rpn), Ok(4.0));
/// ```
pub fn eval_postfix(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Identifier(_) | Token::Word(_) => {
                return Err(RuntimeError::UnsupportedIdentifier { name: token.to_string() });
            },
            Token::Number(literal) => stack.push(parse_number(literal)?),
            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::StackUnderflow { operator: op.symbol() });
                };
                let value = op.apply(a, b)?;
                trace!(%a, %op, %b, %value, "applied operator");
                stack.push(value);
            },
            Token::LParen | Token::RParen => {
                return Err(RuntimeError::MalformedPostfix { remaining: stack.len() });
            },
        }
    }

    match stack.as_slice() {
        [value] => {
            debug!(result = %value, "evaluated postfix");
            Ok(*value)
        },
        _ => Err(RuntimeError::MalformedPostfix { remaining: stack.len() }),
    }
}
