//! Win/lose state machine
//!
//! ```text
//! Playing --radius >= win--> Won
//! Playing --fatal hit--> LosePending --next tick--> Lost
//! Won | Lost --restart--> Playing
//! ```

use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Fatal collision this tick; it still renders as a normal frame
    LosePending,
    /// Player reached the win radius
    Won,
    /// Player was eaten
    Lost,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Renderer-facing game flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Over(Outcome),
}

impl GamePhase {
    /// Only restart leaves a terminal phase
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }

    /// Phase after the end-of-tick checks
    ///
    /// The win check runs first, so a same-tick fatal collision never
    /// overrides a win.
    pub fn after_tick(self, won: bool, fatal_collision: bool) -> GamePhase {
        if self != GamePhase::Playing {
            return self;
        }
        if won {
            GamePhase::Won
        } else if fatal_collision {
            GamePhase::LosePending
        } else {
            GamePhase::Playing
        }
    }

    /// Resolve a deferred loss at the start of a tick
    pub fn resolve_pending(self) -> GamePhase {
        match self {
            GamePhase::LosePending => GamePhase::Lost,
            other => other,
        }
    }

    /// Status for display; terminal message uses the same win test
    pub fn status(self, win_reached: bool) -> GameStatus {
        match self {
            GamePhase::Playing | GamePhase::LosePending => GameStatus::Playing,
            GamePhase::Won | GamePhase::Lost => GameStatus::Over(if win_reached {
                Outcome::Won
            } else {
                Outcome::Lost
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_beats_fatal_collision() {
        assert_eq!(GamePhase::Playing.after_tick(true, true), GamePhase::Won);
        assert_eq!(
            GamePhase::Playing.after_tick(false, true),
            GamePhase::LosePending
        );
        assert_eq!(GamePhase::Playing.after_tick(false, false), GamePhase::Playing);
    }

    #[test]
    fn test_terminal_phases_stick() {
        for phase in [GamePhase::Won, GamePhase::Lost] {
            assert!(phase.is_terminal());
            assert_eq!(phase.after_tick(false, true), phase);
            assert_eq!(phase.resolve_pending(), phase);
        }
        assert!(!GamePhase::LosePending.is_terminal());
    }

    #[test]
    fn test_pending_resolves_to_lost() {
        assert_eq!(GamePhase::LosePending.resolve_pending(), GamePhase::Lost);
        assert_eq!(GamePhase::Playing.resolve_pending(), GamePhase::Playing);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(GamePhase::LosePending.status(false), GameStatus::Playing);
        assert_eq!(
            GamePhase::Lost.status(false),
            GameStatus::Over(Outcome::Lost)
        );
        assert_eq!(GamePhase::Won.status(true), GameStatus::Over(Outcome::Won));
    }
}
