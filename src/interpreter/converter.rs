use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::token::{Token, format_postfix},
};

/// Result type used by the tokenizer and the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// Uses an operator stack: operands go straight to the output, an operator
/// first pops every stacked operator of greater or equal precedence, so
/// operators of the same level associate to the left (`8-3-1` becomes
/// `8 3 - 1 -`). Parentheses never appear in the output.
///
/// # Errors
/// - [`ParseError::MismatchedParentheses`] for a `)` with no open `(`, or a
///   `(` that is never closed.
///
/// # Example
/// ```
/// use rpn_calc::interpreter::{converter::to_postfix, lexer::tokenize, token::format_postfix};
///
/// let postfix = to_postfix(tokenize("3 + 5 * (2 - 8)").unwrap()).unwrap();
/// assert_eq!(format_postfix(&postfix), "3 5 2 8 - * +");
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) | Token::Word(_) => output.push(token),
            Token::LParen => stack.push(token),
            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
            Token::Operator(op) => {
                while stack.last().is_some_and(|top| top.precedence() >= op.precedence()) {
                    output.extend(stack.pop());
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LParen {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(top);
    }

    debug!(postfix = %format_postfix(&output), "converted to postfix");
    Ok(output)
}
