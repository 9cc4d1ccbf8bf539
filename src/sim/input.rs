//! Keyboard state and fixed-cadence steering samples
//!
//! Key events can arrive at any time; they only flip flags here. A separate
//! sampler turns the held keys into a steering direction every
//! `STEER_SAMPLE_MS`, independent of the frame rate.

use glam::DVec2;

use crate::consts::STEER_SAMPLE_MS;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Restart,
    Idle,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "Enter" => Some(Key::Restart),
            "i" | "I" => Some(Key::Idle),
            _ => None,
        }
    }
}

/// Direction keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Record a key press or release (non-direction keys are ignored)
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::Restart | Key::Idle => {}
        }
    }

    /// Unit direction of the held keys, or zero (screen space, up is -y)
    pub fn direction(&self) -> DVec2 {
        let mut dir = DVec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Fixed-cadence clock for steering samples
#[derive(Debug, Clone)]
pub struct SteerSampler {
    interval_ms: f64,
    accumulator_ms: f64,
}

impl Default for SteerSampler {
    fn default() -> Self {
        Self::new(STEER_SAMPLE_MS)
    }
}

impl SteerSampler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulator_ms: 0.0,
        }
    }

    /// Feed elapsed wall time; returns how many samples came due
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.accumulator_ms += elapsed_ms.max(0.0);
        let mut due = 0;
        while self.accumulator_ms >= self.interval_ms {
            self.accumulator_ms -= self.interval_ms;
            due += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_name("W"), Some(Key::Up));
        assert_eq!(Key::from_name("s"), Some(Key::Down));
        assert_eq!(Key::from_name("a"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("Enter"), Some(Key::Restart));
        assert_eq!(Key::from_name("I"), Some(Key::Idle));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_direction_is_unit_or_zero() {
        let mut keys = HeldKeys::default();
        assert_eq!(keys.direction(), DVec2::ZERO);

        keys.set(Key::Up, true);
        assert_eq!(keys.direction(), DVec2::new(0.0, -1.0));

        keys.set(Key::Right, true);
        let dir = keys.direction();
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!(dir.x > 0.0 && dir.y < 0.0);

        // Opposing keys cancel
        keys.set(Key::Down, true);
        assert_eq!(keys.direction(), DVec2::new(1.0, 0.0));
        keys.set(Key::Right, false);
        assert_eq!(keys.direction(), DVec2::ZERO);
    }

    #[test]
    fn test_sampler_cadence() {
        let mut sampler = SteerSampler::default();
        assert_eq!(sampler.advance(10.0), 0);
        assert_eq!(sampler.advance(10.0), 1);
        assert_eq!(sampler.advance(33.0), 2);
        assert_eq!(sampler.advance(-5.0), 0);
    }
}
