//! # rpn-calc
//!
//! rpn-calc evaluates arithmetic expressions written in infix notation.
//! Expressions go through three stages: tokenizing, reordering into postfix
//! (Reverse Polish) notation, and a stack-based evaluation of the postfix
//! sequence.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{converter::to_postfix, evaluator::eval_postfix, lexer::tokenize},
};

/// Provides the error types of every stage.
///
/// Tokenizing and conversion fail with a `ParseError`, evaluation with a
/// `RuntimeError`. Both are wrapped in `Error` by the top-level entry point so
/// callers can match on a single type.
///
/// # Responsibilities
/// - Defines one variant per failure kind, carrying the offending text where
///   there is one.
/// - Renders human-readable messages through `Display`.
pub mod error;
/// Implements the three evaluation stages.
///
/// This module contains the token model, the lexer, the infix-to-postfix
/// converter and the postfix evaluator. Each stage consumes the output of the
/// previous one and may end the pipeline early with an error.
pub mod interpreter;

/// Evaluates an arithmetic expression and returns its value.
///
/// The expression may contain decimal numbers, `+ - * /`, parentheses and
/// spaces. `*` and `/` bind tighter than `+` and `-`, and operators of equal
/// precedence associate to the left. Single lowercase letters are recognised
/// but cannot be evaluated.
///
/// Every call owns its own stacks, so the function may be called from any
/// number of threads at once.
///
/// # Errors
/// Returns [`Error::Parse`] if tokenizing or conversion fails and
/// [`Error::Runtime`] if evaluation fails. The first failure aborts the
/// pipeline.
///
/// # Examples
/// ```
/// use rpn_calc::{
///     error::{Error, ParseError, RuntimeError},
///     evaluate_expression,
/// };
///
/// assert_eq!(evaluate_expression("3 + 5 * (2 - 8)"), Ok(-27.0));
/// assert_eq!(evaluate_expression("8 - 3 - 1"), Ok(4.0));
///
/// assert_eq!(evaluate_expression("(1 + 2"),
///            Err(Error::Parse(ParseError::MismatchedParentheses)));
/// assert_eq!(evaluate_expression("1 / 0"),
///            Err(Error::Runtime(RuntimeError::DivisionByZero)));
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64, Error> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(tokens)?;
    Ok(eval_postfix(&postfix)?)
}
