//! Grid geometry: cells, bounds checks and the 8-connected neighbourhood.

use core::fmt;

/// Offsets of the 3×3 block around a cell, centre included.
pub const NEAR: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-indexed (row, column) position. Coordinates are signed so that
/// off-grid targets can be represented and rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The 8 surrounding cells, not filtered by any grid bounds.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEAR.into_iter()
            .filter(|&offset| offset != (0, 0))
            .map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// The 3×3 block around the cell, the cell included.
    pub fn contour(self) -> impl Iterator<Item = Cell> {
        NEAR.into_iter().map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Largest of the row and column distances.
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

/// Formats 1-indexed, the way players type coordinates.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Bounds of a square `size`×`size` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn out_of_bounds(&self, cell: Cell) -> bool {
        !(self.contains_coord(cell.row) && self.contains_coord(cell.col))
    }

    fn contains_coord(&self, v: i32) -> bool {
        v >= 0 && (v as usize) < self.size
    }

    /// Row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if self.out_of_bounds(cell) {
            None
        } else {
            Some(cell.row as usize * self.size + cell.col as usize)
        }
    }

    /// All cells of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.size as i32;
        (0..n).flat_map(move |r| (0..n).map(move |c| Cell::new(r, c)))
    }
}
