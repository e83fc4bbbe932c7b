use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{BoardError, Cell, Grid};

use super::Player;

/// Computer player firing at random cells it has not tried yet.
///
/// The pool belongs to one player for one match, so a cell is never drawn
/// twice whatever the outcome of earlier shots.
pub struct AiPlayer {
    pool: Vec<Cell>,
    rejected: usize,
}

impl AiPlayer {
    /// Player with every cell of a `size`×`size` grid still untried.
    pub fn new(size: usize) -> Self {
        Self {
            pool: Grid::new(size).cells().collect(),
            rejected: 0,
        }
    }

    /// Cells not drawn yet.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Drawn cells the opponent board refused, e.g. water revealed
    /// around a sunk ship.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn is_untried(&self, cell: Cell) -> bool {
        self.pool.contains(&cell)
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Cell> {
        if self.pool.is_empty() {
            anyhow::bail!("no untried cells left to target");
        }
        let idx = rng.random_range(0..self.pool.len());
        let cell = self.pool.swap_remove(idx);
        log::debug!("AI targets {}", cell);
        Ok(cell)
    }

    fn handle_rejected_target(&mut self, cell: Cell, err: BoardError) {
        self.rejected += 1;
        log::info!("AI target {} rejected: {}", cell, err);
    }
}
