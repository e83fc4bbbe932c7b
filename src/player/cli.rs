#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::core::{BoardError, Cell, ShotOutcome};

use super::Player;

/// Human player typing 1-indexed `row column` pairs.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a syntactically valid pair is entered.
    fn read_coordinates(&mut self) -> anyhow::Result<(i32, i32)> {
        loop {
            write!(self.output, "Your shot: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before a shot was entered");
            }
            match parse_coordinates(&line) {
                Ok(pair) => return Ok(pair),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }
}

/// Parse `"<row> <column>"`. Only the syntax is checked here; bounds are the
/// board's business.
pub fn parse_coordinates(input: &str) -> Result<(i32, i32), String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [x, y] = parts.as_slice() else {
        return Err("Input two coordinates!".to_string());
    };
    let figure = |s: &str| -> Result<i32, String> {
        if !s.chars().all(|ch| ch.is_ascii_digit()) {
            return Err("Input figures!".to_string());
        }
        s.parse()
            .map_err(|_| format!("Coordinate {} is too large", s))
    };
    Ok((figure(*x)?, figure(*y)?))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Cell> {
        let (x, y) = self.read_coordinates()?;
        Ok(Cell::new(x - 1, y - 1))
    }

    fn handle_rejected_target(&mut self, _cell: Cell, err: BoardError) {
        let _ = writeln!(self.output, "{}", err);
    }

    fn handle_shot_result(&mut self, _cell: Cell, outcome: ShotOutcome) {
        let msg = match outcome {
            ShotOutcome::Hit => "Ship wounded!",
            ShotOutcome::Sunk => "Ship destroyed!",
            ShotOutcome::Miss => "Missed!",
        };
        let _ = writeln!(self.output, "{}", msg);
    }

    fn handle_opponent_shot(&mut self, cell: Cell, outcome: ShotOutcome) {
        let what = match outcome {
            ShotOutcome::Hit => "your ship is wounded",
            ShotOutcome::Sunk => "your ship is destroyed",
            ShotOutcome::Miss => "missed",
        };
        let _ = writeln!(self.output, "Comp shot at {}: {}", cell, what);
    }
}
