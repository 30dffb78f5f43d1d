use std::{fs, process::ExitCode};

use clap::Parser;
use rpn_calc::{
    error::Error,
    interpreter::{
        converter::to_postfix, evaluator::eval_postfix, lexer::tokenize, token::format_postfix,
    },
};
use tracing::{level_filters::LevelFilter, warn};
use tracing_subscriber::{filter::Targets, fmt::Layer, prelude::*};

/// Expression evaluated when none is given on the command line.
const DEFAULT_EXPRESSION: &str = "3 + 5 * (2 - 8)";

/// rpn-calc evaluates arithmetic expressions with `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate every line of it.
    #[arg(short, long)]
    file: bool,

    /// Also print the postfix form of each expression.
    #[arg(short, long)]
    postfix: bool,

    /// Log each evaluation stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[arg(default_value = DEFAULT_EXPRESSION)]
    contents: String,
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };

    tracing_subscriber::registry().with(Layer::new().with_writer(std::io::stderr)
                                                    .with_target(false)
                                                    .with_filter(Targets::new().with_default(LevelFilter::WARN)
                                                                               .with_target("rpn_calc", level)))
                                  .init();
}

/// Runs the pipeline once, printing the postfix form between conversion and
/// evaluation when asked to.
fn evaluate(expression: &str, show_postfix: bool) -> Result<f64, Error> {
    let postfix = to_postfix(tokenize(expression)?)?;
    if show_postfix {
        println!("Postfix: {}", format_postfix(&postfix));
    }
    Ok(eval_postfix(&postfix)?)
}

/// Evaluates one expression and prints the outcome. Returns whether it
/// succeeded.
fn run(expression: &str, show_postfix: bool) -> bool {
    match evaluate(expression, show_postfix) {
        Ok(value) => {
            println!("Result: {value}");
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.file {
        return if run(&args.contents, args.postfix) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let script = match fs::read_to_string(&args.contents) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", &args.contents);
            return ExitCode::FAILURE;
        },
    };

    let mut failures = 0usize;
    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !run(line, args.postfix) {
            warn!(line = number + 1, expression = line, "expression failed");
            failures += 1;
        }
    }

    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

#[cfg(test)]
mod tests {
    use rpn_calc::evaluate_expression;

    use super::*;

    #[test]
    fn postfix_mode_matches_plain_evaluation() {
        for src in ["3 + 5 * (2 - 8)", "(1 + 2", "a + 1", "1 / 0", "", "1 $ 2", "1e400"] {
            assert_eq!(evaluate(src, true), evaluate_expression(src), "{src:?}");
            assert_eq!(evaluate(src, false), evaluate_expression(src), "{src:?}");
        }
    }
}
