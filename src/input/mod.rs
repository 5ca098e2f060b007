//! Interactive setup prompts.
//!
//! Every prompt is a retry loop: recoverable input errors are reported and
//! the question is asked again. Only a closed input stream or an I/O failure
//! ends the loop with an error.

use crate::config::SeedMode;
use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid format: {0:?} is not a whole number")]
    Malformed(String),
    #[error("number out of range, it must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },
    #[error("could not read that value ({0}), please try again")]
    Unexpected(String),
    #[error("input closed before a valid answer was given")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether asking again can fix this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InputError::Malformed(_) | InputError::OutOfRange { .. } | InputError::Unexpected(_)
        )
    }
}

/// Parse an integer. `min`/`max` only label the error for values too large for an i64.
fn parse_integer(text: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let text = text.trim();
    text.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::Empty | IntErrorKind::InvalidDigit => InputError::Malformed(text.to_owned()),
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange { min, max },
        _ => InputError::Unexpected(e.to_string()),
    })
}

/// Parse an integer and check it against `min..=max`
pub fn parse_in_range(text: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let value = parse_integer(text, min, max)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange { min, max })
    }
}

fn capacity_bound(capacity: usize) -> i64 {
    i64::try_from(capacity).unwrap_or(i64::MAX)
}

/// Validate an alive-cell count against the field capacity.
/// Both the prompt and `--alive` go through here.
pub fn validate_alive_count(value: i64, capacity: usize) -> Result<usize, InputError> {
    usize::try_from(value)
        .ok()
        .filter(|&count| count <= capacity)
        .ok_or(InputError::OutOfRange { min: 0, max: capacity_bound(capacity) })
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_raw_line(&mut self) -> Result<Vec<u8>, InputError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(buf)
    }

    /// Next line as text; undecodable bytes are a recoverable error
    fn read_line(&mut self) -> Result<String, InputError> {
        let buf = self.read_raw_line()?;
        String::from_utf8(buf).map_err(|e| InputError::Unexpected(e.to_string()))
    }

    /// Ask `question` until `parse` accepts the answer
    pub fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;
            match self.read_line().and_then(|line| parse(&line)) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    warn!(error = %err, "rejected input");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// 0 selects random seeding, 1 the fixed pattern
    pub fn select_mode(&mut self) -> Result<SeedMode, InputError> {
        self.ask("Start from random cells (0) or the fixed pattern (1)? ", |text| {
            parse_in_range(text, 0, 1).map(|v| if v == 0 { SeedMode::Random } else { SeedMode::Pattern })
        })
    }

    /// Number of cells to bring to life, in `0..=capacity`
    pub fn alive_count(&mut self, capacity: usize) -> Result<usize, InputError> {
        let question = format!("Number of alive cells at start (0 to {capacity}): ");
        self.ask(&question, |text| {
            parse_integer(text, 0, capacity_bound(capacity))
                .and_then(|value| validate_alive_count(value, capacity))
        })
    }

    /// Block until any line is entered
    pub fn wait_for_start(&mut self) -> Result<(), InputError> {
        write!(self.output, "Press Enter to start.")?;
        self.output.flush()?;
        self.read_raw_line().map(drop)
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
