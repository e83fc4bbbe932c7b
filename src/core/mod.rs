//! Core sea battle engine (no_std compatible)
//!
//! Grid geometry, ships, boards and fleet generation.
//! Everything here only needs `alloc`; terminal I/O lives outside `core`.

pub mod board;
pub mod common;
pub mod config;
pub mod fleet;
pub mod grid;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, CellState};
pub use common::{BoardError, ShotOutcome};
pub use config::*;
pub use fleet::{generate_fleet, random_board};
pub use grid::{Cell, Grid, NEAR};
pub use ship::{Orientation, Ship};
