//! Line-oriented terminal I/O shared by both seats.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// A line reader paired with a writer.
///
/// Both seats borrow the same console, so two humans at one keyboard read
/// from a single buffered input.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> Console<'a> {
    /// Wraps an input and an output stream.
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Console<'static> {
        Console::new(io::BufReader::new(io::stdin()), io::stdout())
    }

    /// Writes `message` followed by a newline.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Writes `prompt` and reads one trimmed line. `None` at end of input.
    pub fn ask(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_trims_and_reports_eof() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(&b"  5 \n"[..], &mut out);
            assert_eq!(console.ask("> ").unwrap(), Some("5".to_string()));
            assert_eq!(console.ask("> ").unwrap(), None);
            console.say("bye").unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "> > bye\n");
    }
}
