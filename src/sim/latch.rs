//! Thread-safe game phase
//!
//! For hosts that deliver collision callbacks on more than one thread. The
//! `Playing -> Won` step is a single compare-and-set, so exactly one caller
//! observes the win no matter how many contacts race.

use std::sync::atomic::{AtomicU8, Ordering};

use super::transition::{Contact, Effect, GamePhase, win_effects};

const PLAYING: u8 = 0;
const WON: u8 = 1;

#[derive(Debug)]
pub struct SharedPhase {
    phase: AtomicU8,
    gravity: f32,
}

impl SharedPhase {
    /// `gravity` must be positive (downward); take it from validated [`Settings`]
    ///
    /// [`Settings`]: crate::settings::Settings
    pub fn new(gravity: f32) -> Self {
        debug_assert!(gravity > 0.0, "win gravity must point downward");
        Self {
            phase: AtomicU8::new(PLAYING),
            gravity,
        }
    }

    pub fn get(&self) -> GamePhase {
        match self.phase.load(Ordering::Acquire) {
            PLAYING => GamePhase::Playing,
            _ => GamePhase::Won,
        }
    }

    /// Apply one contact; returns the win effects only to the caller that won the race
    pub fn trigger(&self, contact: &Contact) -> Vec<Effect> {
        if !contact.is_ball_goal() {
            return Vec::new();
        }
        match self
            .phase
            .compare_exchange(PLAYING, WON, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => {
                log::info!("Goal reached");
                win_effects(self.gravity)
            }
            Err(_) => {
                log::debug!("Ignoring ball/goal contact after win");
                Vec::new()
            }
        }
    }
}
