//! Line-based terminal I/O.
//!
//! Every prompt loops until the answer parses, so the game code only ever
//! sees valid values. Input and output are generic so sessions can be
//! driven from a script in tests.

use super::ConsoleSettings;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use derive_more::{Display, Error};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Prompting console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    settings: ConsoleSettings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W, settings: &ConsoleSettings) -> Self {
        Self {
            input,
            output,
            settings: *settings,
        }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes a blank line.
    pub fn blank(&mut self) -> Result<(), ConsoleError> {
        self.say("")
    }

    /// Reads one line without its terminator.
    ///
    /// `None` means the line was consumed but is not UTF-8. Only end of
    /// input is an error.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::new("Input closed".to_string()));
        }
        match String::from_utf8(raw) {
            Ok(line) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(err) => {
                debug!(error = %err, "Undecodable input line");
                Ok(None)
            }
        }
    }

    /// Asks `question` until `parse` accepts the answer.
    ///
    /// Each rejection prints the parse error and asks again. Only closed
    /// input or a write failure ends the loop early.
    #[instrument(skip(self, parse))]
    pub fn prompt_until<T, E, F>(&mut self, question: &str, parse: F) -> Result<T, ConsoleError>
    where
        E: fmt::Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            self.say(question)?;
            let Some(answer) = self.read_line()? else {
                self.say("Sorry, that was not readable text")?;
                continue;
            };
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    debug!(%answer, %reason, "Rejected input");
                    self.say(format!("Sorry, {}", reason))?;
                }
            }
        }
    }

    /// Asks a yes/no question; accepts `y`, `yes`, `n` and `no`.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, ConsoleError> {
        self.prompt_until(question, |answer| match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err("you must enter y or n"),
        })
    }

    /// Asks for a non-empty line of text.
    pub fn ask_text(&mut self, question: &str) -> Result<String, ConsoleError> {
        self.prompt_until(question, |answer| {
            let trimmed = answer.trim();
            if trimmed.is_empty() {
                Err("you must enter a value")
            } else {
                Ok(trimmed.to_string())
            }
        })
    }

    /// Shows `message` and waits for enter.
    ///
    /// Skipped entirely when pauses are turned off.
    pub fn pause(&mut self, message: &str) -> Result<(), ConsoleError> {
        if !*self.settings.pause_between_rounds() {
            return Ok(());
        }
        self.say(message)?;
        self.read_line()?;
        Ok(())
    }

    /// Clears the screen when clearing is enabled.
    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        if *self.settings.clear_screen() {
            crossterm::execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Console I/O failure.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        warn!(error = %err, "Terminal I/O failed");
        Self::new(format!("I/O error: {}", err))
    }
}
