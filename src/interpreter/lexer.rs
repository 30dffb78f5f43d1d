use logos::Logos;
use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::token::{Operator, Token},
};

/// A single recognised character of the input.
///
/// The lexer works one character at a time; literals are assembled from
/// consecutive `Letter` and `Digit` lexemes by [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A lowercase letter.
    #[regex(r"[a-z]", first_char)]
    Letter(char),
    /// A digit or the decimal point.
    #[regex(r"[0-9.]", first_char)]
    Digit(char),
    /// Plain spaces. Tabs and newlines are not accepted.
    #[token(" ", logos::skip)]
    Space,
}

/// Returns the single character matched by the current lexeme.
fn first_char(lex: &logos::Lexer<Lexeme>) -> Option<char> {
    lex.slice().chars().next()
}

/// Turns a completed literal buffer into a token.
///
/// Runs starting with a digit or `.` are numbers (validated at evaluation
/// time). A lone letter is an identifier. Longer runs starting with a
/// letter, such as `ab` or `x1`, become a [`Token::Word`].
fn classify_run(run: String) -> Token {
    let mut chars = run.chars();
    match (chars.next(), chars.next()) {
        (Some(c), _) if c.is_ascii_digit() || c == '.' => Token::Number(run),
        (Some(c), None) => Token::Identifier(c),
        _ => Token::Word(run),
    }
}

/// Moves a non-empty pending buffer into `tokens`.
fn flush(buffer: &mut String, tokens: &mut Vec<Token>) {
    if !buffer.is_empty() {
        tokens.push(classify_run(std::mem::take(buffer)));
    }
}

/// Splits an arithmetic expression into tokens.
///
/// Spaces are skipped and never end a literal: `"1 2"` yields the single
/// number `12`. Only operators, parentheses and the end of input complete a
/// pending literal.
///
/// # Errors
/// - [`ParseError::InvalidCharacter`] for any character other than `a-z`,
///   `0-9`, `.`, `+ - * /`, parentheses and space.
/// - [`ParseError::EmptyExpression`] if no token was produced.
///
/// # Example
/// ```
/// use rpn_calc::interpreter::{
///     lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("2.5 * (x)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("2.5".into()),
///                 Token::Operator(Operator::Mul),
///                 Token::LParen,
///                 Token::Identifier('x'),
///                 Token::RParen]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut lexer = Lexeme::lexer(expression);

    while let Some(lexeme) = lexer.next() {
        let Ok(lexeme) = lexeme else {
            let character = expression.get(lexer.span().start..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(ParseError::InvalidCharacter { character });
        };

        let token = match lexeme {
            Lexeme::Letter(c) | Lexeme::Digit(c) => {
                buffer.push(c);
                continue;
            },
            Lexeme::Plus => Token::Operator(Operator::Add),
            Lexeme::Minus => Token::Operator(Operator::Sub),
            Lexeme::Star => Token::Operator(Operator::Mul),
            Lexeme::Slash => Token::Operator(Operator::Div),
            Lexeme::LParen => Token::LParen,
            Lexeme::RParen => Token::RParen,
            Lexeme::Space => continue,
        };

        flush(&mut buffer, &mut tokens);
        tokens.push(token);
    }

    flush(&mut buffer, &mut tokens);

    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(text: &str) -> Token {
        Token::Number(text.to_string())
    }

    #[test]
    fn splits_operators_and_parentheses_from_literals() {
        let tokens = tokenize("3+5*(2-8)").unwrap();
        assert_eq!(tokens,
                   vec![num("3"),
                        Token::Operator(Operator::Add),
                        num("5"),
                        Token::Operator(Operator::Mul),
                        Token::LParen,
                        num("2"),
                        Token::Operator(Operator::Sub),
                        num("8"),
                        Token::RParen]);
    }

    #[test]
    fn spaces_are_skipped_without_ending_a_literal() {
        assert_eq!(tokenize("  1 2 . 5 ").unwrap(), vec![num("12.5")]);
        assert_eq!(tokenize("10 +  2").unwrap(),
                   vec![num("10"), Token::Operator(Operator::Add), num("2")]);
    }

    #[test]
    fn single_letter_is_identifier() {
        assert_eq!(tokenize("a+1").unwrap(),
                   vec![Token::Identifier('a'), Token::Operator(Operator::Add), num("1")]);
    }

    #[test]
    fn mixed_runs_are_kept_for_later_stages() {
        assert_eq!(tokenize("ab").unwrap(), vec![Token::Word("ab".into())]);
        assert_eq!(tokenize("a1").unwrap(), vec![Token::Word("a1".into())]);
        assert_eq!(tokenize("1a").unwrap(), vec![num("1a")]);
        assert_eq!(tokenize("1.2.3").unwrap(), vec![num("1.2.3")]);
        assert_eq!(tokenize(".").unwrap(), vec![num(".")]);
    }

    #[test]
    fn empty_and_blank_input_is_empty_expression() {
        assert_eq!(tokenize(""), Err(ParseError::EmptyExpression));
        assert_eq!(tokenize("    "), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn unrecognised_characters_are_rejected() {
        assert_eq!(tokenize("1 $ 2"), Err(ParseError::InvalidCharacter { character: '$' }));
        assert_eq!(tokenize("X"), Err(ParseError::InvalidCharacter { character: 'X' }));
        assert_eq!(tokenize("1\t+ 2"), Err(ParseError::InvalidCharacter { character: '\t' }));
        assert_eq!(tokenize("2 ^ 3"), Err(ParseError::InvalidCharacter { character: '^' }));
    }
}
