//! Match controller: alternating turns with an extra shot after every hit.

use alloc::boxed::Box;
use core::fmt;
use rand::rngs::SmallRng;

use crate::core::{random_board, Board, BoardError, Cell, MatchConfig, ShotOutcome};
use crate::player::Player;

/// One of the two seats in a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first player"),
            Side::Second => write!(f, "second player"),
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingTurn(Side),
    Finished(Side),
}

/// What happened during one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnReport {
    pub side: Side,
    pub cell: Cell,
    pub outcome: ShotOutcome,
    /// Targets refused before the shot landed.
    pub rejected: usize,
}

/// Two players, each with the board it defends, and the turn order.
pub struct Match {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    state: MatchState,
    turns: usize,
    shots: [usize; 2],
    rng: SmallRng,
}

impl Match {
    /// Start a match. `first_board` is the board `first` defends.
    pub fn new(
        first: Box<dyn Player>,
        first_board: Board,
        second: Box<dyn Player>,
        second_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            players: [first, second],
            boards: [first_board, second_board],
            state: MatchState::AwaitingTurn(Side::First),
            turns: 0,
            shots: [0, 0],
            rng,
        }
    }

    /// Start a match on two freshly generated boards.
    pub fn generate(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        config: &MatchConfig,
        mut rng: SmallRng,
    ) -> Self {
        let first_board = random_board(&mut rng, config);
        let second_board = random_board(&mut rng, config);
        Self::new(first, first_board, second, second_board, rng)
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::Finished(side) => Some(side),
            MatchState::AwaitingTurn(_) => None,
        }
    }

    /// Board defended by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Completed turns so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Shots that landed for `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Ask `side` for targets until one is accepted by the opponent board.
    fn take_turn(&mut self, side: Side) -> anyhow::Result<TurnReport> {
        let shooter = side.index();
        let target = side.opponent().index();
        let mut rejected = 0;
        loop {
            let cell = self.players[shooter].select_target(&mut self.rng)?;
            match self.boards[target].resolve_shot(cell) {
                Ok(outcome) => {
                    self.players[shooter].handle_shot_result(cell, outcome);
                    self.players[target].handle_opponent_shot(cell, outcome);
                    return Ok(TurnReport {
                        side,
                        cell,
                        outcome,
                        rejected,
                    });
                }
                Err(err @ (BoardError::OutOfBounds | BoardError::AlreadyTargeted)) => {
                    rejected += 1;
                    log::debug!("{} target {} rejected: {}", side, cell, err);
                    self.players[shooter].handle_rejected_target(cell, err);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            }
        }
    }

    /// Play one turn of the active side and advance the state.
    pub fn step(&mut self) -> anyhow::Result<TurnReport> {
        let side = match self.state {
            MatchState::AwaitingTurn(side) => side,
            MatchState::Finished(winner) => {
                anyhow::bail!("match already finished, {} won", winner)
            }
        };
        let report = self.take_turn(side)?;
        self.turns += 1;
        self.shots[side.index()] += 1;

        self.state = if self.boards[side.opponent().index()].is_defeated() {
            log::info!("{} wins after {} turns", side, self.turns);
            MatchState::Finished(side)
        } else if report.outcome.grants_extra_turn() {
            MatchState::AwaitingTurn(side)
        } else {
            MatchState::AwaitingTurn(side.opponent())
        };
        Ok(report)
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        loop {
            if let MatchState::Finished(winner) = self.state {
                return Ok(winner);
            }
            self.step()?;
        }
    }
}
