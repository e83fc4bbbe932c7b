#![cfg(feature = "std")]

//! Text rendering of boards for the terminal.

use std::fmt::Write;
use std::string::String;

use crate::core::{Board, CellState};

/// Symbol shown for a cell. With `hide`, intact ship cells look like water.
pub fn marker(state: CellState, hide: bool) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::ShipIntact if hide => 'O',
        CellState::ShipIntact => '■',
        CellState::Hit => 'X',
        CellState::Miss | CellState::ExcludedEmpty => '.',
    }
}

/// Horizontal rule matching the width of two boards of `size`.
pub fn separator(size: usize) -> String {
    "-".repeat(10 * size)
}

/// Welcome text with the input format.
pub fn greeting(size: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n Welcome to Sea Battle");
    let _ = writeln!(out, "{}", separator(size));
    let _ = writeln!(out, "   Input format: x y");
    let _ = writeln!(out, "   x - row number (1-{})", size);
    let _ = writeln!(out, "   y - column number (1-{})", size);
    out
}

fn header(size: usize) -> String {
    let mut line = String::from("  |");
    for c in 1..=size {
        let _ = write!(line, " {} |", c);
    }
    line
}

fn row_line(board: &Board, row: usize, hide: bool) -> String {
    let mut line = format!("{} |", row + 1);
    if let Some(states) = board.rows().nth(row) {
        for &state in states {
            let _ = write!(line, " {} |", marker(state, hide));
        }
    }
    line
}

/// Both boards side by side: the user's board on the left, the computer's on
/// the right, hidden unless `hide_right` is `false`.
pub fn render_boards(left: &Board, right: &Board, hide_right: bool) -> String {
    let width = header(left.size()).chars().count();
    let gap = "    ";
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}{}{}",
        "  Board of User",
        gap,
        "  Board of Comp",
        width = width
    );
    let _ = writeln!(out, "{}{}{}", header(left.size()), gap, header(right.size()));
    for r in 0..left.size().max(right.size()) {
        let l = if r < left.size() {
            row_line(left, r, false)
        } else {
            String::new()
        };
        let rt = if r < right.size() {
            row_line(right, r, hide_right)
        } else {
            String::new()
        };
        let _ = writeln!(out, "{:<width$}{}{}", l, gap, rt, width = width);
    }
    out
}
