//! Idle/demo mode - a simple pilot that plays the game
//!
//! Chases the nearest edible dot and runs from anything big nearby. Not
//! clever, but enough to keep the attract screen and the headless runner
//! interesting.

use glam::DVec2;

use super::input::SteerSampler;
use super::phase::{GamePhase, GameStatus};
use super::state::{GameEvent, GameState};
use super::tick::{TickInput, tick};

/// Extra clearance kept from dots that could eat the player
const DANGER_MARGIN: f64 = 60.0;

/// Frame clock for unattended runs (60 Hz)
pub const DEMO_FRAME_MS: f64 = 1000.0 / 60.0;

/// Pick a steering direction for the player, or `None` to hold course
pub fn demo_steer(state: &GameState) -> Option<DVec2> {
    let player = &state.player;
    let torus = &state.torus;

    // Run from threats first, weighting closer ones more
    let flee = state
        .dots
        .iter()
        .filter(|d| d.radius >= player.radius)
        .filter_map(|d| {
            let offset = torus.delta(player.pos, d.pos);
            let gap = offset.length() - d.radius - player.radius;
            (gap < DANGER_MARGIN).then(|| -offset.normalize_or_zero() / gap.max(1.0))
        })
        .fold(DVec2::ZERO, |acc, v| acc + v);

    if flee != DVec2::ZERO {
        return Some(flee.normalize_or_zero());
    }

    state
        .dots
        .iter()
        .filter(|d| d.radius < player.radius)
        .map(|d| torus.delta(player.pos, d.pos))
        .min_by(|a, b| {
            a.length_squared()
                .partial_cmp(&b.length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|offset| offset.normalize_or_zero())
        .filter(|dir| *dir != DVec2::ZERO)
}

/// Let the pilot play for up to `max_ticks` frames or until the run ends
///
/// Steering is re-sampled on the `SteerSampler` cadence against a 60 Hz
/// frame clock. A loss still pending when the budget runs out is resolved
/// before returning, so the status never reports a lost run as playing.
pub fn play_demo(state: &mut GameState, max_ticks: u64) -> GameStatus {
    let mut sampler = SteerSampler::default();
    let mut input = TickInput::default();

    for _ in 0..max_ticks {
        if state.phase.is_terminal() {
            break;
        }
        for _ in 0..sampler.advance(DEMO_FRAME_MS) {
            input.steer = demo_steer(state);
        }
        tick(state, &input);

        for event in &state.events {
            match event {
                GameEvent::Won | GameEvent::Lost => {
                    log::info!("{:?} at tick {}", event, state.time_ticks)
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    if state.phase == GamePhase::LosePending {
        tick(state, &TickInput::default());
    }

    state.status()
}
