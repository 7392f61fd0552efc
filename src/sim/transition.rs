//! Win-state transition
//!
//! `Playing --(ball touches goal)--> Won`. The transition is pure: it takes
//! the current phase and one collision pair and returns the next phase plus
//! the effects the host must apply. `Won` is terminal; further contacts yield
//! no effects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::layout::BodyLabel;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball is loose in the maze
    #[default]
    Playing,
    /// Goal reached; terminal
    Won,
}

/// A collision-start pair reported by the host engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub a: BodyLabel,
    pub b: BodyLabel,
}

impl Contact {
    pub fn new(a: BodyLabel, b: BodyLabel) -> Self {
        Self { a, b }
    }

    /// True for {ball, goal} in either order
    pub fn is_ball_goal(&self) -> bool {
        matches!(
            (self.a, self.b),
            (BodyLabel::Ball, BodyLabel::Goal) | (BodyLabel::Goal, BodyLabel::Ball)
        )
    }
}

/// Instruction for the host engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Reveal the victory indicator
    ShowVictory,
    /// Make every `Wall` body dynamic
    ReleaseWalls,
    /// Set world gravity
    SetGravity(Vec2),
}

/// Effects emitted on the one and only win
pub fn win_effects(gravity: f32) -> Vec<Effect> {
    vec![
        Effect::ShowVictory,
        Effect::ReleaseWalls,
        Effect::SetGravity(Vec2::new(0.0, gravity)),
    ]
}

/// Advance the phase by one contact
pub fn transition(phase: GamePhase, contact: &Contact, gravity: f32) -> (GamePhase, Vec<Effect>) {
    match phase {
        GamePhase::Playing if contact.is_ball_goal() => (GamePhase::Won, win_effects(gravity)),
        _ => (phase, Vec::new()),
    }
}
