//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: uniform random targeting from a shrinking pool of untried cells
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;

use crate::core::{BoardError, Cell, ShotOutcome};

/// Interface implemented by the two kinds of contestant.
///
/// A Player only picks targets and listens to feedback. It never touches a
/// board directly; the match applies its shots to the opponent's board.
pub trait Player {
    /// Choose the next cell to fire at. Errors are fatal for the match
    /// (closed input, exhausted target pool).
    fn select_target(&mut self, rng: &mut SmallRng) -> anyhow::Result<Cell>;

    /// The chosen cell was refused by the opponent board; another one will
    /// be requested without the turn being spent.
    fn handle_rejected_target(&mut self, _cell: Cell, _err: BoardError) {}

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _cell: Cell, _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _cell: Cell, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_coordinates, CliPlayer};
