#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
pub use game::{Match, MatchState, Side, TurnReport};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use player::*;
#[cfg(feature = "std")]
pub use ui::*;
