//! Random fleet placement with a bounded number of attempts per board.

use alloc::vec::Vec;
use rand::Rng;

use crate::core::board::Board;
use crate::core::common::BoardError;
use crate::core::config::MatchConfig;
use crate::core::grid::Cell;
use crate::core::ship::{Orientation, Ship};

/// Try to place ships of the given `lengths` on a fresh `size`×`size` board.
///
/// Longest ships go first. Each failed placement counts towards
/// `max_attempts` across the whole board; once the cap is passed the board is
/// abandoned with [`BoardError::GenerationExhausted`]. On success the
/// placement exclusions are already cleared.
pub fn generate_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    lengths: &[usize],
    max_attempts: usize,
) -> Result<Board, BoardError> {
    if size == 0 && !lengths.is_empty() {
        return Err(BoardError::InvalidPlacement);
    }
    let mut board = Board::new(size);
    let mut sorted: Vec<usize> = lengths.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut attempts = 0;
    for &len in sorted.iter() {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                return Err(BoardError::GenerationExhausted {
                    attempts: max_attempts,
                });
            }
            let ship = random_ship(rng, size, len);
            match board.add_ship(ship) {
                Ok(()) => break,
                Err(BoardError::InvalidPlacement) => {
                    log::trace!("placement {:?} rejected", ship);
                }
                Err(e) => return Err(e),
            }
        }
    }

    board.reset_turn_exclusions();
    Ok(board)
}

fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Ship {
    let bow = Cell::new(
        rng.random_range(0..size) as i32,
        rng.random_range(0..size) as i32,
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// Build a fully populated board, regenerating from scratch whenever
/// [`generate_fleet`] runs out of attempts.
///
/// The configuration must be valid (see [`MatchConfig::validate`]); an
/// unplaceable fleet would keep this looping.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, config: &MatchConfig) -> Board {
    let mut restarts = 0usize;
    loop {
        match generate_fleet(rng, config.size, &config.fleet, config.max_attempts) {
            Ok(board) => {
                log::debug!("fleet placed after {} board restarts", restarts);
                return board;
            }
            Err(e) => {
                restarts += 1;
                log::debug!("{}; regenerating board", e);
            }
        }
    }
}
