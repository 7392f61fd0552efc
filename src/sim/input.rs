//! Input nudges
//!
//! Each key press or button tap adds a fixed velocity change along one axis.
//! Screen y grows downward, so `Up` subtracts from y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nudge {
    Up,
    Right,
    Down,
    Left,
}

impl Nudge {
    /// Parse a key name (`w`, `ArrowUp`, ...) or on-screen button id (`up-button`, ...)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" | "up-button" => Some(Nudge::Up),
            "d" | "D" | "ArrowRight" | "right-button" => Some(Nudge::Right),
            "s" | "S" | "ArrowDown" | "down-button" => Some(Nudge::Down),
            "a" | "A" | "ArrowLeft" | "left-button" => Some(Nudge::Left),
            _ => None,
        }
    }

    /// Unit velocity change for this nudge
    pub fn delta(self) -> Vec2 {
        match self {
            Nudge::Up => Vec2::NEG_Y,
            Nudge::Right => Vec2::X,
            Nudge::Down => Vec2::Y,
            Nudge::Left => Vec2::NEG_X,
        }
    }

    /// New velocity after one nudge; only the nudged axis changes
    pub fn apply(self, velocity: Vec2, speed: f32) -> Vec2 {
        velocity + self.delta() * speed
    }
}
