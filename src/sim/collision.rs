//! Collision detection and consumption rules
//!
//! Overlap is measured on the torus, so circles touch across edges. Two
//! passes run each tick: dot motion with merges, then player vs dot.

use std::collections::HashSet;

use glam::DVec2;

use super::physics::step_dot;
use super::state::{Dot, DotId, GameEvent, Player};
use super::torus::Torus;
use crate::consts::*;

/// Whether two circles overlap on the torus
#[inline]
pub fn circles_overlap(torus: &Torus, a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    torus.distance(a, b) < a_radius + b_radius
}

/// Whether at least one of two dots is heading toward the other
///
/// Uses the direct displacement between centers, not the wrapped one.
#[inline]
pub fn is_closing(a_pos: DVec2, a_vel: DVec2, b_pos: DVec2, b_vel: DVec2) -> bool {
    let d = b_pos - a_pos;
    a_vel.dot(d) > 0.0 || b_vel.dot(-d) > 0.0
}

/// Winner radius after a dot absorbs a smaller dot
///
/// Bigger winners grow proportionally less.
#[inline]
pub fn dot_growth(winner_radius: f64, loser_radius: f64) -> f64 {
    let reduction = (1.0 - winner_radius / DOT_GROWTH_SCALE).max(DOT_GROWTH_FLOOR);
    winner_radius + loser_radius / DOT_MERGE_DIVISOR * reduction
}

/// Player radius after eating a dot
#[inline]
pub fn player_growth(player_radius: f64, dot_radius: f64) -> f64 {
    let base = 1.0 / (1.0 + player_radius / PLAYER_GROWTH_BASE_SCALE);
    let reduction = (1.0 - player_radius / PLAYER_GROWTH_SCALE).max(PLAYER_GROWTH_FLOOR);
    player_radius + dot_radius * base * reduction * PLAYER_GROWTH_PENALTY
}

/// Dot pass: move each dot, then merge it with anything it runs into
///
/// Dots are handled in list order. Each one is stepped by the physics and
/// immediately checked against every other live dot, so it meets earlier dots
/// at their new positions and later dots at their old ones. The strictly
/// larger dot of an overlapping, closing pair wins; equal radii never merge.
/// Consumed dots neither move nor pull, and are removed once at the end.
pub fn update_dots(dots: &mut Vec<Dot>, torus: &Torus, events: &mut Vec<GameEvent>) {
    let mut consumed: HashSet<DotId> = HashSet::new();

    for i in 0..dots.len() {
        if consumed.contains(&dots[i].id) {
            continue;
        }
        step_dot(dots, i, torus, &consumed);
        merge_dot(dots, i, torus, &mut consumed, events);
    }

    if !consumed.is_empty() {
        dots.retain(|d| !consumed.contains(&d.id));
    }
}

fn merge_dot(
    dots: &mut [Dot],
    i: usize,
    torus: &Torus,
    consumed: &mut HashSet<DotId>,
    events: &mut Vec<GameEvent>,
) {
    for j in 0..dots.len() {
        if j == i || consumed.contains(&dots[j].id) {
            continue;
        }

        let (a, b) = (&dots[i], &dots[j]);
        if !circles_overlap(torus, a.pos, a.radius, b.pos, b.radius)
            || !is_closing(a.pos, a.vel, b.pos, b.vel)
        {
            continue;
        }

        let (winner, loser) = if a.radius > b.radius {
            (i, j)
        } else if a.radius < b.radius {
            (j, i)
        } else {
            continue;
        };

        let loser_radius = dots[loser].radius;
        let loser_id = dots[loser].id;
        let winner_dot = &mut dots[winner];
        winner_dot.radius = dot_growth(winner_dot.radius, loser_radius);
        consumed.insert(loser_id);
        events.push(GameEvent::DotMerged {
            winner: winner_dot.id,
            loser: loser_id,
            radius: winner_dot.radius,
        });

        if loser == i {
            break;
        }
    }
}

/// Player vs dot pass
///
/// Smaller dots are eaten on contact. Touching a dot at least as big as the
/// player leaves that dot in place and reports a fatal hit; eating continues
/// for the rest of the list. Returns whether any hit was fatal.
pub fn resolve_player_hits(
    player: &mut Player,
    dots: &mut Vec<Dot>,
    torus: &Torus,
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut eaten: HashSet<DotId> = HashSet::new();
    let mut fatal = false;

    for dot in dots.iter() {
        if !circles_overlap(torus, player.pos, player.radius, dot.pos, dot.radius) {
            continue;
        }

        if player.radius > dot.radius {
            player.radius = player_growth(player.radius, dot.radius);
            eaten.insert(dot.id);
            events.push(GameEvent::DotEaten {
                id: dot.id,
                player_radius: player.radius,
            });
        } else {
            fatal = true;
            events.push(GameEvent::FatalCollision { id: dot.id });
        }
    }

    if !eaten.is_empty() {
        dots.retain(|d| !eaten.contains(&d.id));
    }

    fatal
}
