//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, BoardError, Cell, Match, MatchConfig, MatchState, Player,
    ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_boards, CliPlayer};
