use alloc::vec::Vec;
use core::fmt;

/// Default edge length of the square grid.
pub const GRID_SIZE: usize = 6;
pub const MIN_GRID_SIZE: usize = 6;
pub const MAX_GRID_SIZE: usize = 9;

/// Vessel lengths of the canonical fleet.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of vessel cells in the canonical fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed per board before it is thrown away.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_attempts: usize,
    /// Render the computer's intact ships as unknown water.
    pub hide_enemy: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            fleet: FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            hide_enemy: true,
        }
    }
}

/// Reasons a [`MatchConfig`] cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    SizeOutOfRange(usize),
    EmptyFleet,
    InvalidShipLength(usize),
    NoPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SizeOutOfRange(n) => write!(
                f,
                "grid size {} out of range - must be {}-{}",
                n, MIN_GRID_SIZE, MAX_GRID_SIZE
            ),
            ConfigError::EmptyFleet => write!(f, "fleet has no ships"),
            ConfigError::InvalidShipLength(len) => {
                write!(f, "ship length {} does not fit the grid", len)
            }
            ConfigError::NoPlacementAttempts => write!(f, "placement attempt cap must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl MatchConfig {
    /// Default configuration on a grid of `size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange(self.size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&len) = self.fleet.iter().find(|&&l| l == 0 || l > self.size) {
            return Err(ConfigError::InvalidShipLength(len));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }

    /// Number of cells occupied by the whole fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}
