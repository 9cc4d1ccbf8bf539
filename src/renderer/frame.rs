//! Per-frame draw list
//!
//! Flattens the game state into circles to draw (with wrap-around copies)
//! plus the status flag and terminal overlay text. Platform independent.

use glam::DVec2;
use serde::Serialize;

use crate::sim::{GameState, GameStatus, Outcome};

/// What a circle represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sprite {
    Player,
    Dot,
}

/// One circle to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCircle {
    pub pos: DVec2,
    pub radius: f64,
    pub color: u32,
    pub sprite: Sprite,
}

/// End-of-run message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub title: &'static str,
    pub hint: &'static str,
}

impl Overlay {
    pub fn for_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Self {
                title: "You Win!",
                hint: "Press Enter to play again",
            },
            Outcome::Lost => Self {
                title: "You Lose!",
                hint: "Press Enter to try again",
            },
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Player first, then dots in list order
    pub circles: Vec<DrawCircle>,
    pub status: GameStatus,
    pub overlay: Option<Overlay>,
}

impl Frame {
    pub fn build(state: &GameState) -> Self {
        let torus = &state.torus;
        let mut circles = Vec::with_capacity(state.dots.len() + 4);

        let player = &state.player;
        for pos in torus.draw_positions(player.pos, player.radius) {
            circles.push(DrawCircle {
                pos,
                radius: player.radius,
                color: player.color,
                sprite: Sprite::Player,
            });
        }

        for dot in &state.dots {
            for pos in torus.draw_positions(dot.pos, dot.radius) {
                circles.push(DrawCircle {
                    pos,
                    radius: dot.radius,
                    color: dot.color,
                    sprite: Sprite::Dot,
                });
            }
        }

        let status = state.status();
        let overlay = match status {
            GameStatus::Over(outcome) => Some(Overlay::for_outcome(outcome)),
            GameStatus::Playing => None,
        };

        Self {
            width: torus.width,
            height: torus.height,
            circles,
            status,
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GamePhase;

    fn empty_state() -> GameState {
        let mut state = GameState::new(&GameConfig::with_extents(400.0, 400.0), 21).unwrap();
        state.dots.clear();
        state
    }

    #[test]
    fn test_player_drawn_first() {
        let mut state = empty_state();
        state.push_dot(DVec2::new(100.0, 100.0), DVec2::ZERO, 8.0);

        let frame = Frame::build(&state);
        assert_eq!(frame.circles.len(), 2);
        assert_eq!(frame.circles[0].sprite, Sprite::Player);
        assert_eq!(frame.circles[1].sprite, Sprite::Dot);
        assert_eq!(frame.status, GameStatus::Playing);
        assert!(frame.overlay.is_none());
    }

    #[test]
    fn test_edge_dot_duplicated() {
        let mut state = empty_state();
        state.push_dot(DVec2::new(2.0, 2.0), DVec2::ZERO, 8.0);

        let frame = Frame::build(&state);
        let dots: Vec<_> = frame
            .circles
            .iter()
            .filter(|c| c.sprite == Sprite::Dot)
            .collect();
        assert_eq!(dots.len(), 4);
        assert!(dots.iter().any(|c| c.pos == DVec2::new(402.0, 402.0)));
    }

    #[test]
    fn test_overlay_follows_outcome() {
        let mut state = empty_state();
        state.phase = GamePhase::Lost;
        let frame = Frame::build(&state);
        assert_eq!(frame.status, GameStatus::Over(Outcome::Lost));
        assert_eq!(frame.overlay.unwrap().title, "You Lose!");

        state.phase = GamePhase::Won;
        state.player.radius = 200.0;
        let frame = Frame::build(&state);
        assert_eq!(frame.overlay.unwrap().title, "You Win!");
    }

    #[test]
    fn test_pending_loss_renders_normally() {
        let mut state = empty_state();
        state.phase = GamePhase::LosePending;
        let frame = Frame::build(&state);
        assert_eq!(frame.status, GameStatus::Playing);
        assert!(frame.overlay.is_none());
    }
}
