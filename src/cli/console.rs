//! Line-oriented console I/O.

use crate::errors::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Width of the `~` rule printed around listings and reports.
pub const RULE_WIDTH: usize = 30;

/// Prompt/response console over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader and a writer, typically locked stdin and stdout.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints the `~~~` rule.
    pub fn rule(&mut self) -> Result<()> {
        self.say("~".repeat(RULE_WIDTH))
    }

    /// Prints `label` without a newline and reads one line of input.
    ///
    /// The trailing line break is removed; other whitespace is preserved. Bytes that
    /// are not UTF-8 become U+FFFD, so a stray byte is just bad input. Returns
    /// `Ok(None)` at end of input.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_break_only() -> Result<()> {
        let mut console = Console::new(Cursor::new(" P1 \r\nnext\n"), Vec::new());

        assert_eq!(console.prompt("ID: ")?, Some(" P1 ".to_string()));
        assert_eq!(console.prompt("Again: ")?, Some("next".to_string()));
        assert_eq!(console.prompt("Gone: ")?, None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "ID: Again: Gone: ");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() -> Result<()> {
        let mut console = Console::new(Cursor::new(&b"\xffP1\n"[..]), Vec::new());
        assert_eq!(console.prompt("> ")?, Some("\u{fffd}P1".to_string()));
        Ok(())
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() -> Result<()> {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("> ")?, Some(String::new()));
        Ok(())
    }

    #[test]
    fn test_rule_width() -> Result<()> {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.rule()?;
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, format!("{}\n", "~".repeat(30)));
        Ok(())
    }
}
