//! @acp:module "Prompts"
//! @acp:summary "Line-oriented answers from a terminal or piped stdin"
//! @acp:domain cli
//! @acp:layer handler

use std::io::{BufRead, IsTerminal};

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::MathGenError;

/// Prompt for the operation choice
pub const MODE_PROMPT: &str =
    "Select the type of operations (1: Addition/Subtraction, 2: Multiplication/Division, 3: Algebra)";

/// Prompt for the outcome range
pub const RANGE_PROMPT: &str = "Enter the range for the outcomes (e.g., 0-20)";

/// Ask one question
///
/// A terminal gets a dialoguer prompt; otherwise one line is read from stdin.
/// Prompts are drawn on stderr, leaving stdout to the worksheet.
pub fn ask(prompt: &str, what: &'static str) -> Result<String> {
    if std::io::stdin().is_terminal() && console::Term::stderr().is_term() {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        return Ok(answer);
    }

    eprintln!("{}: ", prompt);
    let stdin = std::io::stdin();
    Ok(read_answer(&mut stdin.lock(), what)?)
}

/// Read one answer line, trimmed; end of input is [`MathGenError::MissingInput`]
pub fn read_answer<R: BufRead>(reader: &mut R, what: &'static str) -> crate::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(MathGenError::MissingInput(what));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_answer_trims_line_ending() {
        let mut input = Cursor::new("2\r\n0-20\n");
        assert_eq!(read_answer(&mut input, "operation").unwrap(), "2");
        assert_eq!(read_answer(&mut input, "range").unwrap(), "0-20");
    }

    #[test]
    fn test_read_answer_at_end_of_input() {
        let mut input = Cursor::new("1\n");
        read_answer(&mut input, "operation").unwrap();
        assert!(matches!(
            read_answer(&mut input, "range"),
            Err(MathGenError::MissingInput("range"))
        ));
    }

    #[test]
    fn test_read_answer_blank_line_is_empty_answer() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_answer(&mut input, "operation").unwrap(), "");
    }
}
