//! Game board: ship placement with the no-touching rule and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{BoardError, ShotOutcome};
use crate::core::grid::{Cell, Grid};
use crate::core::ship::Ship;

/// What is known about a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Water nobody has looked at.
    Empty,
    /// Part of a ship that has not been hit there.
    ShipIntact,
    /// Part of a ship that has been hit.
    Hit,
    /// Shot landed on water.
    Miss,
    /// Water revealed around a sunk ship.
    ExcludedEmpty,
}

/// Main board state: field markers, excluded cells, ships and losses.
pub struct Board {
    grid: Grid,
    field: Vec<CellState>,
    busy: BTreeSet<Cell>,
    ships: Vec<Ship>,
    destroyed: usize,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            grid: Grid::new(size),
            field: vec![CellState::Empty; size * size],
            busy: BTreeSet::new(),
            ships: Vec::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn out_of_bounds(&self, cell: Cell) -> bool {
        self.grid.out_of_bounds(cell)
    }

    /// Marker of `cell`, or `None` when it is off the grid.
    pub fn cell_state(&self, cell: Cell) -> Option<CellState> {
        self.grid.index(cell).map(|i| self.field[i])
    }

    /// `true` if `cell` can no longer be targeted (or, while placing, used).
    pub fn is_busy(&self, cell: Cell) -> bool {
        self.busy.contains(&cell)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of sunk ships.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// `true` once every ship is sunk. A board without ships is never defeated.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.destroyed == self.ships.len()
    }

    fn set_state(&mut self, cell: Cell, state: CellState) {
        if let Some(i) = self.grid.index(cell) {
            self.field[i] = state;
        }
    }

    /// Place `ship`. Every cell must be on the grid and not busy, which also
    /// keeps it off the contour of ships placed before.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship
            .cells()
            .any(|c| self.out_of_bounds(c) || self.busy.contains(&c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for c in ship.cells() {
            self.set_state(c, CellState::ShipIntact);
            self.busy.insert(c);
        }
        self.ships.push(ship);
        self.apply_contour(&ship, false);
        Ok(())
    }

    /// Mark every in-bounds cell around `ship` as busy. With `reveal` the
    /// newly marked cells are also shown as known water.
    fn apply_contour(&mut self, ship: &Ship, reveal: bool) {
        for sc in ship.cells() {
            for cur in sc.contour() {
                if self.out_of_bounds(cur) || self.busy.contains(&cur) {
                    continue;
                }
                if reveal {
                    self.set_state(cur, CellState::ExcludedEmpty);
                }
                self.busy.insert(cur);
            }
        }
    }

    /// Fire at `cell`. Rejected shots leave the board untouched.
    pub fn resolve_shot(&mut self, cell: Cell) -> Result<ShotOutcome, BoardError> {
        if self.out_of_bounds(cell) {
            return Err(BoardError::OutOfBounds);
        }
        if self.busy.contains(&cell) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.busy.insert(cell);

        let target = self
            .ships
            .iter()
            .position(|s| s.is_alive() && s.is_hit_by(cell));
        let Some(idx) = target else {
            self.set_state(cell, CellState::Miss);
            return Ok(ShotOutcome::Miss);
        };

        self.set_state(cell, CellState::Hit);
        if self.ships[idx].take_hit() {
            self.destroyed += 1;
            let ship = self.ships[idx];
            self.apply_contour(&ship, true);
            log::debug!("ship {:?} sunk ({}/{})", ship, self.destroyed, self.ships.len());
            Ok(ShotOutcome::Sunk)
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// Forget placement exclusions so combat starts with every cell targetable.
    pub fn reset_turn_exclusions(&mut self) {
        self.busy.clear();
    }

    /// Markers row by row, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.field.chunks(self.grid.size().max(1))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  size: {},\n  busy: {},\n  destroyed: {},\n  ships: {:?}\n}}",
            self.grid.size(),
            self.busy.len(),
            self.destroyed,
            self.ships
        )
    }
}
