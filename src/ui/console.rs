//! Line-based prompting over an explicit input/output pair.

use crate::domain::{FieldKind, FieldValue, DATE_FORMAT};
use crate::error::AppError;
use chrono::NaiveDate;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one line, minus its terminator.
    /// Lines that are not UTF-8 are rejected and asked again. End of input is
    /// [`AppError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(AppError::InputClosed);
            }
            match String::from_utf8(raw) {
                Ok(mut line) => {
                    let trimmed = line.trim_end_matches(['\r', '\n']).len();
                    line.truncate(trimmed);
                    return Ok(line);
                }
                Err(_) => self.say("Error: Invalid input. Please try again.")?,
            }
        }
    }

    /// Menu selection: re-asks until the line parses as an integer.
    pub fn read_choice(&mut self) -> Result<i64, AppError> {
        loop {
            let line = self.ask("")?;
            match line.trim().parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Error: Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Re-asks until the line is non-blank and converts to `kind`.
    pub fn prompt_field(&mut self, prompt: &str, kind: FieldKind) -> Result<FieldValue, AppError> {
        loop {
            let line = self.ask(prompt)?;
            let value = line.trim();
            if value.is_empty() {
                self.say("Error: Input cannot be empty. Please try again.")?;
                continue;
            }
            match parse_field(value, kind) {
                Some(v) => return Ok(v),
                None => self.say(invalid_message(kind))?,
            }
        }
    }

    pub fn prompt_text(&mut self, prompt: &str) -> Result<String, AppError> {
        match self.prompt_field(prompt, FieldKind::Text)? {
            FieldValue::Text(s) => Ok(s),
            other => Err(AppError::Validation(format!("expected text, got {:?}", other))),
        }
    }

    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, AppError> {
        match self.prompt_field(prompt, FieldKind::Integer)? {
            FieldValue::Int(n) => Ok(n),
            other => Err(AppError::Validation(format!("expected integer, got {:?}", other))),
        }
    }
}

fn parse_field(value: &str, kind: FieldKind) -> Option<FieldValue> {
    match kind {
        FieldKind::Text => Some(FieldValue::Text(value.to_string())),
        FieldKind::Integer => value.parse().ok().map(FieldValue::Int),
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .ok()
            .map(FieldValue::Date),
    }
}

fn invalid_message(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Date => "Error: Invalid date, expected YYYY-MM-DD. Please try again.",
        _ => "Error: Invalid input. Please try again.",
    }
}
