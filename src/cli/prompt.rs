//! Line-oriented prompting
//!
//! The only place that blocks on input. Core parsers return a result; the
//! retry loops that turn a validation error into a re-prompt live here.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::error::{TrackerError, TrackerResult};

/// Reads answers from `input`, writing prompts and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Get the output sink for plain messages
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line, without its line terminator
    ///
    /// End of input is reported as [`TrackerError::InputClosed`].
    pub fn read_line(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TrackerError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask until `parse` accepts the answer
    ///
    /// Validation errors are printed and the question is repeated; any other
    /// error ends the loop.
    pub fn ask_until<T, F>(&mut self, prompt: &str, parse: F) -> TrackerResult<T>
    where
        F: Fn(&str) -> TrackerResult<T>,
    {
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask for an integer, silently repeating the question on anything else
    ///
    /// Integers beyond the i64 range saturate, so they still count as an
    /// answer rather than a reason to ask again.
    pub fn ask_integer(&mut self, prompt: &str) -> TrackerResult<i64> {
        loop {
            match self.read_line(prompt)?.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow => return Ok(i64::MAX),
                    IntErrorKind::NegOverflow => return Ok(i64::MIN),
                    _ => {}
                },
            }
        }
    }

    /// Consume the prompter, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
