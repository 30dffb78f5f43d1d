/// The converter module reorders infix tokens into postfix order.
///
/// Implements operator-precedence reordering over an explicit operator
/// stack. Its output contains operands and operators only, ready for a single
/// stack-based evaluation pass.
///
/// # Responsibilities
/// - Applies precedence and left-associativity of `+ - * /`.
/// - Resolves parentheses and reports unbalanced ones.
/// - Rejects tokens that are neither operands, operators nor parentheses.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// Walks the postfix tokens once, maintaining a stack of `f64` values, and
/// produces the single remaining value as the result.
///
/// # Responsibilities
/// - Parses numeric literals into values.
/// - Applies operators, reporting division by zero.
/// - Rejects identifiers and structurally invalid sequences.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text character by character and assembles
/// numbers, identifiers, operators and parentheses. This is the first stage
/// of evaluation.
///
/// # Responsibilities
/// - Skips spaces and rejects unrecognised characters.
/// - Buffers literal runs and completes them at operators, parentheses and
///   the end of input.
/// - Reports empty input.
pub mod lexer;
pub mod token;
