//! Ship definitions: a straight run of cells with remaining hit points.

use core::fmt;

use crate::core::grid::Cell;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends to the right of the bow (increasing column).
    Horizontal,
    /// Extends below the bow (increasing row).
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship of `length` cells starting at `bow`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Cell,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Create an undamaged ship. Bounds are checked by the board on placement.
    pub fn new(bow: Cell, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            lives: length,
        }
    }

    /// Cells occupied by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Returns `true` if `cell` is one of the ship's cells.
    pub fn is_hit_by(&self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Remove one hit point. Returns `true` when this hit destroyed the ship.
    pub fn take_hit(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        self.lives == 0
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn bow(&self) -> Cell {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged cells left.
    pub fn lives(&self) -> usize {
        self.lives
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, lives: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.lives,
        )
    }
}
