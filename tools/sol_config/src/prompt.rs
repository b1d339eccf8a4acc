use std::io::{BufRead, Write};

use crate::{config::Choice, error::ConfigError};

/// Asks for settings one line at a time, repeating the question until the
/// answer parses.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask<T: Choice>(&mut self) -> Result<T, ConfigError> {
        let mut line = String::new();
        loop {
            write!(
                self.output,
                "[sol_config] Select {}: [{}]: ",
                T::KIND,
                T::CHOICES.join(" / ")
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConfigError::UnexpectedEof(T::KIND));
            }
            match line.parse() {
                Ok(choice) => return Ok(choice),
                Err(err) => writeln!(self.output, "[sol_config] {err}")?,
            }
        }
    }
}
