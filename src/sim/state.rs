//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; nothing is global.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phase::{GamePhase, GameStatus};
use super::torus::Torus;
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Stable dot identifier, never reused within a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DotId(pub u32);

/// The player-controlled circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    /// Movement speed (pixels per tick)
    pub speed: f64,
    pub color: u32,
}

impl Player {
    pub fn new(pos: DVec2, speed: f64) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius: PLAYER_START_RADIUS,
            speed,
            color: PLAYER_COLOR,
        }
    }

    /// Point the player along `direction` at full speed
    ///
    /// A zero direction keeps the current heading.
    pub fn steer(&mut self, direction: DVec2) {
        let dir = direction.normalize_or_zero();
        if dir != DVec2::ZERO {
            self.vel = dir * self.speed;
        }
    }
}

/// A free-floating dot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dot {
    pub id: DotId,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: u32,
}

/// Things that happened during a tick (for logging and tests)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// `winner` absorbed `loser`
    DotMerged { winner: DotId, loser: DotId, radius: f64 },
    /// Player ate a dot and grew to `player_radius`
    DotEaten { id: DotId, player_radius: f64 },
    /// Player touched a dot at least as large as itself
    FatalCollision { id: DotId },
    Won,
    Lost,
    Restarted,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub torus: Torus,
    pub phase: GamePhase,
    pub player: Player,
    /// Live dots, in spawn order
    pub dots: Vec<Dot>,
    /// Simulation tick counter (since construction)
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game from a config and seed, with the initial dots placed
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let torus = Torus::new(config.width, config.height);
        let mut state = Self {
            seed,
            torus,
            phase: GamePhase::Playing,
            player: Player::new(torus.center(), config.player_speed),
            dots: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.reset();

        Ok(state)
    }

    /// Allocate a new dot ID
    pub fn next_dot_id(&mut self) -> DotId {
        let id = DotId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a dot with the given properties, returning its ID
    pub fn push_dot(&mut self, pos: DVec2, vel: DVec2, radius: f64) -> DotId {
        let id = self.next_dot_id();
        self.dots.push(Dot {
            id,
            pos: self.torus.wrap(pos),
            vel,
            radius,
            color: DOT_PALETTE[0],
        });
        id
    }

    pub fn dot(&self, id: DotId) -> Option<&Dot> {
        self.dots.iter().find(|d| d.id == id)
    }

    /// Radius at which the player wins
    pub fn win_radius(&self) -> f64 {
        self.torus.min_extent() / 2.0
    }

    /// Flag for the renderer; a pending loss still shows as playing
    pub fn status(&self) -> GameStatus {
        self.phase.status(self.player.radius >= self.win_radius())
    }
}
