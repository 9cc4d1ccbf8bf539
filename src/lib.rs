//! Panda Dots - A wrap-around arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (torus geometry, gravity, merges, game phases)
//! - `renderer`: Frame building and Canvas2D drawing
//! - `config`: Startup configuration and validation

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Player radius after a reset
    pub const PLAYER_START_RADIUS: f64 = 18.0;
    /// Default player movement speed (pixels per tick)
    pub const PLAYER_SPEED: f64 = 2.0;

    /// Extra clearance around the player when placing new dots
    pub const SPAWN_MARGIN: f64 = 10.0;
    /// Dots spawned on reset
    pub const INITIAL_DOT_COUNT: usize = 50;
    /// Replenish target never exceeds this
    pub const MAX_DOT_COUNT: usize = 200;
    /// Player radius per extra dot in the replenish target
    pub const RADIUS_PER_EXTRA_DOT: f64 = 5.0;

    /// New dot radius range [min, max)
    pub const DOT_MIN_RADIUS: f64 = 6.0;
    pub const DOT_MAX_RADIUS: f64 = 13.0;
    /// New dot speed range [min, max)
    pub const DOT_MIN_SPEED: f64 = 0.5;
    pub const DOT_MAX_SPEED: f64 = 1.0;
    /// Dots never move faster than this (pixels per tick)
    pub const DOT_SPEED_LIMIT: f64 = 2.0;

    /// Gravity reaches out to this many radii of the pulling dot
    pub const GRAVITY_RANGE_FACTOR: f64 = 5.0;
    /// Tuned damping divisor on gravity strength
    pub const GRAVITY_DAMPING: f64 = 40.0;

    /// Dot merge: loser radius is divided by this before scaling
    pub const DOT_MERGE_DIVISOR: f64 = 2.5;
    /// Dot merge growth reduction floor and radius scale
    pub const DOT_GROWTH_FLOOR: f64 = 0.55;
    pub const DOT_GROWTH_SCALE: f64 = 90.0;

    /// Player growth curve
    pub const PLAYER_GROWTH_BASE_SCALE: f64 = 47.5;
    pub const PLAYER_GROWTH_FLOOR: f64 = 0.38;
    pub const PLAYER_GROWTH_SCALE: f64 = 57.5;
    pub const PLAYER_GROWTH_PENALTY: f64 = 0.95;

    /// Steering sample interval (~60 Hz, independent of the frame rate)
    pub const STEER_SAMPLE_MS: f64 = 16.0;

    /// Dot palette: base green, 20% lighter, 30% lighter, 20% darker, 30% darker
    pub const DOT_PALETTE: [u32; 5] = [0x599D15, 0x6AB929, 0x78D42E, 0x4A8412, 0x3B6A0E];
    /// Player fallback fill
    pub const PLAYER_COLOR: u32 = 0x599D15;
}

/// Format a packed RGB color as a CSS hex string
pub fn css_color(rgb: u32) -> String {
    format!("#{:06X}", rgb & 0x00FF_FFFF)
}
