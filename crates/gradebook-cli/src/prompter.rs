//! Console implementation of the path prompter.

use std::io::{BufRead, Write};

use gradebook_core::PathPrompter;

/// Prompts on `output` and reads answers line by line from `input`.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> PathPrompter for ConsolePrompter<R, W> {
    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{}", prompt).ok()?;
        self.output.flush().ok()?;

        // Lossy, so a non-UTF-8 answer is still an answer
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                Some(line.trim_end_matches(['\n', '\r']).to_string())
            }
        }
    }

    fn display_message(&mut self, message: &str) {
        // Nothing useful to do if the console itself is gone
        let _ = writeln!(self.output, "{}", message);
    }
}
