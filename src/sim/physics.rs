//! Per-tick motion: dot gravity, speed clamp, Euler step, wrap

use std::collections::HashSet;

use glam::DVec2;

use super::state::{Dot, DotId, Player};
use super::torus::Torus;
use crate::consts::{DOT_SPEED_LIMIT, GRAVITY_DAMPING, GRAVITY_RANGE_FACTOR};

/// Velocity change on a dot from a single other dot
///
/// Only strictly larger dots pull, and only within `5 x` their radius.
/// Uses the direct (unwrapped) displacement, so there is no pull across an
/// edge.
#[inline]
pub fn gravity_pull(pos: DVec2, radius: f64, other_pos: DVec2, other_radius: f64) -> DVec2 {
    if other_radius <= radius {
        return DVec2::ZERO;
    }

    let delta = other_pos - pos;
    let distance = delta.length();
    if distance <= 0.0 || distance >= other_radius * GRAVITY_RANGE_FACTOR {
        return DVec2::ZERO;
    }

    let strength = (other_radius - radius) / (distance * GRAVITY_DAMPING);
    delta / distance * strength
}

/// Rescale `vel` down to `limit` if it is faster
#[inline]
pub fn clamp_speed(vel: DVec2, limit: f64) -> DVec2 {
    let speed = vel.length();
    if speed > limit { vel / speed * limit } else { vel }
}

/// Advance the player one tick along its current velocity
pub fn move_player(player: &mut Player, torus: &Torus) {
    player.pos = torus.wrap(player.pos + player.vel);
}

/// Apply gravity, clamp, move, and wrap the dot at `index`
///
/// Dots in `consumed` exert no pull. Callers step dots in list order, so a dot
/// sees the already-moved positions of earlier dots and the old positions of
/// later ones. The pull loop is the O(n^2) hot path of the tick; fine for the
/// 200-dot ceiling.
pub fn step_dot(dots: &mut [Dot], index: usize, torus: &Torus, consumed: &HashSet<DotId>) {
    let (pos, radius) = (dots[index].pos, dots[index].radius);

    let pull = dots
        .iter()
        .enumerate()
        .filter(|&(j, other)| j != index && !consumed.contains(&other.id))
        .fold(DVec2::ZERO, |acc, (_, other)| {
            acc + gravity_pull(pos, radius, other.pos, other.radius)
        });

    let dot = &mut dots[index];
    dot.vel = clamp_speed(dot.vel + pull, DOT_SPEED_LIMIT);
    dot.pos = torus.wrap(dot.pos + dot.vel);
}
