//! Line-oriented prompt helpers shared by the interactive commands.

use std::io::{self, BufRead, Write};

/// Prompting reader/writer pair. `None` from a read means end of input.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` without a newline and reads one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until `parse` accepts the answer, printing its message otherwise.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, &'static str>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(message)?,
            }
        }
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    #[cfg(test)]
    pub fn into_output(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use std::io::Cursor;

    #[test]
    fn ask_trims_and_reports_eof() {
        let mut console = Console::new(Cursor::new("  hi \n"), Vec::new());
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("hi"));
        assert_eq!(console.ask("> ").unwrap(), None);
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > ");
    }

    #[test]
    fn ask_until_repeats_on_rejection() {
        let mut console = Console::new(Cursor::new("x\n\n5\n"), Vec::new());
        let value = console
            .ask_until("n: ", |raw| raw.parse::<u8>().map_err(|_| "again"))
            .unwrap();
        assert_eq!(value, Some(5));
        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("again").count(), 2);
    }
}
