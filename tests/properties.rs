use proptest::prelude::*;
use rpn_calc::{
    error::{Error, RuntimeError},
    evaluate_expression,
    interpreter::{converter::to_postfix, lexer::tokenize, token::Token},
};

const MAX_INPUT_CHARS: usize = 64;

/// A well-formed expression together with its source text.
#[derive(Debug, Clone)]
enum Expr {
    Number(String, f64),
    Binary(Box<Expr>, char, Box<Expr>),
    Group(Box<Expr>),
}

const fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        _ => 2,
    }
}

impl Expr {
    const fn binding(&self) -> u8 {
        match self {
            Self::Binary(_, op, _) => precedence(*op),
            Self::Number(..) | Self::Group(_) => 3,
        }
    }

    /// Renders the tree with just enough parentheses to keep its shape
    /// under left-associative precedence rules.
    fn render(&self) -> String {
        match self {
            Self::Number(text, _) => text.clone(),
            Self::Group(inner) => format!("({})", inner.render()),
            Self::Binary(left, op, right) => {
                let level = precedence(*op);
                let left = if left.binding() < level {
                    format!("({})", left.render())
                } else {
                    left.render()
                };
                let right = if right.binding() <= level {
                    format!("({})", right.render())
                } else {
                    right.render()
                };
                format!("{left} {op} {right}")
            },
        }
    }

    /// Direct recursive evaluation. `None` means a division by zero.
    fn value(&self) -> Option<f64> {
        match self {
            Self::Number(_, v) => Some(*v),
            Self::Group(inner) => inner.value(),
            Self::Binary(left, op, right) => {
                let a = left.value()?;
                let b = right.value()?;
                match op {
                    '+' => Some(a + b),
                    '-' => Some(a - b),
                    '*' => Some(a * b),
                    _ if b == 0.0 => None,
                    _ => Some(a / b),
                }
            },
        }
    }
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..1000, any::<bool>()).prop_map(|(n, half)| {
                                              if half {
                                                  Expr::Number(format!("{n}.5"), f64::from(n) + 0.5)
                                              } else {
                                                  Expr::Number(n.to_string(), f64::from(n))
                                              }
                                          });

    leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![
                3 => (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner.clone())
                    .prop_map(|(l, op, r)| Expr::Binary(Box::new(l), op, Box::new(r))),
                1 => inner.prop_map(|e| Expr::Group(Box::new(e))),
            ]
        })
}

proptest! {
    #[test]
    fn matches_direct_evaluation(expr in expr_strategy()) {
        let src = expr.render();
        let outcome = evaluate_expression(&src);
        match expr.value() {
            Some(v) => prop_assert_eq!(outcome, Ok(v), "expression {}", src),
            None => prop_assert_eq!(outcome,
                                    Err(Error::Runtime(RuntimeError::DivisionByZero)),
                                    "expression {}",
                                    src),
        }
    }

    #[test]
    fn postfix_has_no_parentheses(expr in expr_strategy()) {
        let src = expr.render();
        let tokens = tokenize(&src).unwrap();
        let expected_len = tokens.iter()
                                 .filter(|t| !matches!(t, Token::LParen | Token::RParen))
                                 .count();
        let postfix = to_postfix(tokens).unwrap();

        prop_assert!(!postfix.iter().any(|t| matches!(t, Token::LParen | Token::RParen)));
        prop_assert_eq!(postfix.len(), expected_len);
    }

    #[test]
    fn spacing_does_not_change_the_result(expr in expr_strategy()) {
        let src = expr.render();
        prop_assert_eq!(evaluate_expression(&src), evaluate_expression(&src.replace(' ', "")));
    }

    #[test]
    fn evaluation_is_repeatable(src in "[0-9a-z+*/() .$-]{0,32}") {
        let first = evaluate_expression(&src);
        prop_assert_eq!(evaluate_expression(&src), first);
    }

    #[test]
    fn arbitrary_input_never_panics(src in proptest::collection::vec(any::<char>(), 0..=MAX_INPUT_CHARS)) {
        let src: String = src.into_iter().collect();
        let _ = evaluate_expression(&src);
    }
}
