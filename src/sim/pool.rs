//! Dot spawning and replenishment

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use super::phase::GamePhase;
use super::state::{Dot, GameState, Player};
use crate::consts::*;

/// How many dots the field should hold for a given player radius
pub fn target_dot_count(player_radius: f64) -> usize {
    let extra = (player_radius / RADIUS_PER_EXTRA_DOT).floor().max(0.0) as usize;
    (INITIAL_DOT_COUNT + extra).min(MAX_DOT_COUNT)
}

impl GameState {
    /// Append `count` random dots, none of them near the player
    ///
    /// Positions are rejection-sampled until they clear the player by
    /// `SPAWN_MARGIN`. If the exclusion disc covers the whole domain there is
    /// nowhere to land, so nothing is spawned.
    pub fn spawn_dots(&mut self, count: usize) {
        let exclusion = self.player.radius + SPAWN_MARGIN;
        if count > 0 && exclusion >= self.torus.farthest_corner_distance(self.player.pos) {
            log::warn!(
                "Player radius {:.2} leaves no room to spawn, skipping {} dots",
                self.player.radius,
                count
            );
            return;
        }

        self.dots.reserve(count);
        for _ in 0..count {
            let pos = loop {
                let candidate = DVec2::new(
                    self.rng.random_range(0.0..self.torus.width),
                    self.rng.random_range(0.0..self.torus.height),
                );
                if candidate.distance(self.player.pos) > exclusion {
                    break candidate;
                }
            };

            let speed = self.rng.random_range(DOT_MIN_SPEED..DOT_MAX_SPEED);
            let angle = self.rng.random_range(0.0..TAU);
            let radius = self.rng.random_range(DOT_MIN_RADIUS..DOT_MAX_RADIUS);
            let color = DOT_PALETTE[self.rng.random_range(0..DOT_PALETTE.len())];

            let id = self.next_dot_id();
            self.dots.push(Dot {
                id,
                pos,
                vel: DVec2::from_angle(angle) * speed,
                radius,
                color,
            });
        }
    }

    /// Top the field back up to the target count
    pub fn replenish(&mut self) {
        let target = target_dot_count(self.player.radius);
        if self.dots.len() < target {
            self.spawn_dots(target - self.dots.len());
        }
    }

    /// Fresh run: centered starting player, initial dots
    pub fn reset(&mut self) {
        self.player = Player::new(self.torus.center(), self.player.speed);
        self.dots.clear();
        self.phase = GamePhase::Playing;
        self.spawn_dots(INITIAL_DOT_COUNT);
        log::debug!("Field reset with {} dots", self.dots.len());
    }
}
