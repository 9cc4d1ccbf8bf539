//! Fixed per-frame simulation tick
//!
//! Core game loop that advances the simulation one step.

use glam::DVec2;

use super::collision::{resolve_player_hits, update_dots};
use super::phase::GamePhase;
use super::physics::move_player;
use super::pilot::demo_steer;
use super::state::{GameEvent, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest steering sample (unit or zero); `None` keeps the current heading
    pub steer: Option<DVec2>,
    /// Restart request; only honored once the run is over
    pub restart: bool,
    /// Idle/demo mode - the pilot steers instead of the keys
    pub idle_mode: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase.is_terminal() {
        if input.restart {
            state.reset();
            state.events.push(GameEvent::Restarted);
            log::info!("Restarted");
        }
        return;
    }

    // Loss deferred from last tick: that frame has been shown, now end the run
    if state.phase == GamePhase::LosePending {
        state.phase = state.phase.resolve_pending();
        state.events.push(GameEvent::Lost);
        log::info!(
            "Lost at radius {:.2} after {} ticks",
            state.player.radius,
            state.time_ticks
        );
        return;
    }

    state.time_ticks += 1;

    let steer = if input.idle_mode {
        demo_steer(state)
    } else {
        input.steer
    };
    if let Some(dir) = steer {
        state.player.steer(dir);
    }

    move_player(&mut state.player, &state.torus);
    update_dots(&mut state.dots, &state.torus, &mut state.events);
    let fatal = resolve_player_hits(
        &mut state.player,
        &mut state.dots,
        &state.torus,
        &mut state.events,
    );

    state.replenish();

    let won = state.player.radius >= state.win_radius();
    state.phase = state.phase.after_tick(won, fatal);

    match state.phase {
        GamePhase::Won => {
            state.events.push(GameEvent::Won);
            log::info!(
                "Won at radius {:.2} after {} ticks",
                state.player.radius,
                state.time_ticks
            );
        }
        GamePhase::LosePending => log::debug!("Fatal collision, loss deferred one frame"),
        _ => {}
    }
}
