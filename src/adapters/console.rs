use std::io::{BufRead, Write};

use crate::error::AtmError;

/// Line-oriented terminal: prompts go to `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes a full line.
    pub fn say(&mut self, line: &str) -> Result<(), AtmError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes `text` without a newline and reads one answer line.
    ///
    /// Returns `None` once the input is closed.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, AtmError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_reads_one_line_at_a_time() {
        let mut console = Console::new("1234\r\n2\n".as_bytes(), Vec::new());

        assert_eq!(console.prompt("PIN: ").unwrap().as_deref(), Some("1234"));
        assert_eq!(console.prompt("Choice: ").unwrap().as_deref(), Some("2"));
        assert_eq!(console.prompt("Again: ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "PIN: Choice: Again: ");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        console.say("hello").unwrap();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "hello\n");
    }
}
