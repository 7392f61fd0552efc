//! Game session state
//!
//! One session = one maze. Everything needed to reproduce it (settings and
//! seed) is kept alongside the derived maze and layout.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::Nudge;
use super::transition::{Contact, Effect, GamePhase, transition};
use crate::error::Result;
use crate::layout::{Layout, layout_maze};
use crate::maze::{Maze, generate};
use crate::settings::Settings;

/// Complete session state (deterministic given settings and seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the maze was generated from
    pub seed: u64,
    pub settings: Settings,
    pub maze: Maze,
    pub layout: Layout,
    pub phase: GamePhase,
}

impl GameState {
    /// Validate settings, then generate and lay out a maze
    ///
    /// Uses `settings.seed` when present, otherwise draws a fresh one.
    pub fn new(settings: Settings) -> Result<Self> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Result<Self> {
        let size = settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let maze = generate(size, &mut rng);
        let layout = layout_maze(&maze, &settings.layout_params());

        log::info!(
            "New {}x{} maze (seed {}): {} walls",
            size.rows(),
            size.columns(),
            seed,
            layout.walls.len()
        );

        Ok(Self {
            seed,
            settings,
            maze,
            layout,
            phase: GamePhase::Playing,
        })
    }

    /// Process one batch of collision-start pairs
    ///
    /// Several ball/goal pairs in the same batch still win only once.
    pub fn handle_collisions(&mut self, contacts: &[Contact]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for contact in contacts {
            let before = self.phase;
            let (phase, mut emitted) = transition(before, contact, self.settings.win_gravity);
            if before == GamePhase::Won && contact.is_ball_goal() {
                log::debug!("Ignoring ball/goal contact after win");
            }
            if phase != before {
                log::info!("Goal reached (seed {})", self.seed);
            }
            self.phase = phase;
            effects.append(&mut emitted);
        }
        effects
    }

    /// Velocity after a player nudge
    pub fn nudge(&self, velocity: Vec2, nudge: Nudge) -> Vec2 {
        nudge.apply(velocity, self.settings.nudge_speed)
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }
}
