use std::io::{BufRead, Write};

use crate::config::CalcConfig;
use crate::error::CalcResult;
use crate::eval::evaluate;
use crate::grammar::Calculator;

pub const BANNER: &str = "Simple calculator powered by pcomb";
pub const FAREWELL: &str = "Bye bye!";

/// How trailing input after an expression is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// As excessive input, at the position where it starts.
    #[default]
    Lenient,
    /// As a parse error, at the furthest position parsing reached.
    Strict,
}

/// Evaluates one line and renders the answer.
pub fn evaluate_line(
    calculator: &Calculator,
    config: &CalcConfig,
    mode: Mode,
    line: &str,
) -> CalcResult<String> {
    let expr = match mode {
        Mode::Lenient => calculator.parse_line_lenient(line)?,
        Mode::Strict => calculator.parse_line(line)?,
    };
    let value = evaluate(&expr)?;
    if config.show_ast {
        Ok(format!("AST = {}\nResult = {}", expr, value))
    } else {
        Ok(format!("Result = {}", value))
    }
}

/// Reads lines until an empty line or the end of `input`, answering each one.
///
/// Errors in a line are printed and the loop goes on; only I/O errors end it.
pub fn run<R: BufRead, W: Write>(
    calculator: &Calculator,
    config: &CalcConfig,
    mode: Mode,
    input: R,
    output: &mut W,
) -> CalcResult<()> {
    writeln!(output, "{}", BANNER)?;
    let mut lines = input.lines();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.is_empty() {
            break;
        }

        match evaluate_line(calculator, config, mode, &line) {
            Ok(answer) => writeln!(output, "{}", answer)?,
            Err(e) => {
                tracing::debug!("line {:?} rejected: {:?}", line, e);
                writeln!(output, "{}", e)?
            }
        }
    }
    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}
