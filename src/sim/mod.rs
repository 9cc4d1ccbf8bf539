//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - Stable dot identity (by `DotId`)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod phase;
pub mod physics;
pub mod pilot;
pub mod pool;
pub mod state;
pub mod tick;
pub mod torus;

pub use collision::{dot_growth, player_growth, resolve_player_hits, update_dots};
pub use input::{HeldKeys, Key, SteerSampler};
pub use phase::{GamePhase, GameStatus, Outcome};
pub use pilot::{demo_steer, play_demo};
pub use pool::target_dot_count;
pub use state::{Dot, DotId, GameEvent, GameState, Player};
pub use tick::{TickInput, tick};
pub use torus::Torus;
