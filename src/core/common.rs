//! Common types for Sea Battle: board errors and shot outcomes.

use core::fmt;

/// Result of a shot that landed on a legal, untargeted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShotOutcome {
    /// Shot damaged a vessel that is still afloat.
    Hit,
    /// Shot destroyed the last intact cell of a vessel.
    Sunk,
    /// Shot landed on water.
    Miss,
}

impl ShotOutcome {
    /// `Hit` and `Sunk` let the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target cell lies outside the grid.
    OutOfBounds,
    /// Target cell was already shot at or is known to be empty.
    AlreadyTargeted,
    /// Vessel leaves the grid or touches another vessel.
    InvalidPlacement,
    /// Fleet placement gave up after the attempt cap was reached.
    GenerationExhausted { attempts: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Your shot is out of the board!"),
            BoardError::AlreadyTargeted => write!(f, "You've already shot here"),
            BoardError::InvalidPlacement => {
                write!(f, "Ship placement is out of bounds or touches another ship")
            }
            BoardError::GenerationExhausted { attempts } => {
                write!(f, "Unable to place fleet after {} attempts", attempts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
