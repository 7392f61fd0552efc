//! Game session logic
//!
//! Everything the host calls back into after the world is built:
//! - Collision pairs drive the win transition
//! - Key presses and button taps become velocity nudges
//! - No physics, rendering or platform dependencies

pub mod input;
pub mod latch;
pub mod state;
pub mod transition;

pub use input::Nudge;
pub use latch::SharedPhase;
pub use state::GameState;
pub use transition::{Contact, Effect, GamePhase, transition, win_effects};
