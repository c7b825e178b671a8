//! Console prompting for run parameters.
//!
//! Input is read as whitespace-separated tokens, so values may be given one
//! per line or several on a line. A token that does not parse or is out of
//! range is discarded and the prompt repeats.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::warn;

use crate::error::PromptError;
use crate::simulator::{ExecMode, SimConfig};

/// Largest cave size or sample size accepted from the console.
pub const MAX_COUNT: u32 = i32::MAX as u32;

/// Rows and regions reserved up front when reading a map; the rest grows
/// with the input actually received.
const LAYOUT_PREALLOC: usize = 1024;

pub const MODE_PROMPT: &str = "Mode A, B or C ? ";
pub const SIZE_PROMPT: &str = "Cave size [>0] ? ";
pub const ACCESSIBILITY_PROMPT: &str = "Accessibility [0;1] ? ";
pub const SAMPLE_PROMPT: &str = "Sample size [>0] ? ";

pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self, expected: &str) -> Result<String, PromptError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::EndOfInput {
                    expected: expected.to_string(),
                });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Prompt until a value within `[min, max]` is entered.
    pub fn bounded_value<T>(
        &mut self,
        prompt: &str,
        expected: &str,
        min: T,
        max: T,
    ) -> Result<T, PromptError>
    where
        T: FromStr + PartialOrd,
    {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let token = self.next_token(expected)?;
            match token.parse::<T>() {
                Ok(value) if value >= min && value <= max => return Ok(value),
                _ => warn!("rejected {} {:?}", expected, token),
            }
        }
    }

    pub fn exec_mode(&mut self) -> Result<ExecMode, PromptError> {
        loop {
            write!(self.output, "{}", MODE_PROMPT)?;
            self.output.flush()?;

            let token = self.next_token("mode")?;
            let mut chars = token.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(mode) = ExecMode::from_char(c) {
                    return Ok(mode);
                }
            }
            warn!("rejected mode {:?}", token);
        }
    }

    /// Read `size` rows of `size` integers: 0 is free, anything else is
    /// obstructed. Tokens that are not integers are skipped.
    pub fn read_layout(&mut self, size: usize) -> Result<Vec<Vec<bool>>, PromptError> {
        let reserve = size.min(LAYOUT_PREALLOC);
        let mut rows = Vec::with_capacity(reserve);
        for _ in 0..size {
            let mut strip = Vec::with_capacity(reserve);
            while strip.len() < size {
                let token = self.next_token("cave map")?;
                match token.parse::<i64>() {
                    Ok(flag) => strip.push(flag != 0),
                    Err(_) => warn!("skipping map token {:?}", token),
                }
            }
            rows.push(strip);
        }
        Ok(rows)
    }

    /// Ask for the mode and everything that mode needs.
    pub fn read_config(&mut self) -> Result<SimConfig, PromptError> {
        let mode = self.exec_mode()?;
        let cave_size =
            self.bounded_value::<u32>(SIZE_PROMPT, "cave size", 1, MAX_COUNT)? as usize;

        let config = match mode {
            ExecMode::ShowPaths => SimConfig::show_paths(self.read_layout(cave_size)?),
            ExecMode::Estimate => {
                let accessibility =
                    self.bounded_value(ACCESSIBILITY_PROMPT, "accessibility", 0.0, 1.0)?;
                let samples = self.sample_size()?;
                SimConfig::estimate(cave_size, accessibility, samples)
            }
            ExecMode::Sweep => SimConfig::sweep(cave_size, self.sample_size()?),
        };
        Ok(config)
    }

    fn sample_size(&mut self) -> Result<u32, PromptError> {
        self.bounded_value(SAMPLE_PROMPT, "sample size", 1, MAX_COUNT)
    }
}
