//! Maze Ball - roll a ball through a randomly generated perfect maze
//!
//! Core modules:
//! - `maze`: Perfect-maze generation over a rectangular grid
//! - `layout`: Conversion of maze openings into wall/ball/goal bodies
//! - `sim`: Win-state machine, shared phase, and input nudges
//! - `settings`: Configuration surface with JSON persistence
//!
//! Physics, rendering and windowing belong to the host engine. This crate
//! hands it body specs and reacts to the collision pairs it reports.

pub mod error;
pub mod layout;
pub mod maze;
pub mod settings;
pub mod sim;

pub use error::{MazeError, Result};
pub use layout::{BodyLabel, Layout, LayoutParams, WallSpec, layout};
pub use maze::{Cell, Direction, Grid, GridSize, Maze, generate, generate_from};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default grid dimensions (the original board is 6x6)
    pub const DEFAULT_ROWS: usize = 6;
    pub const DEFAULT_COLUMNS: usize = 6;

    /// Default viewport in world units
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

    /// Interior wall thickness
    pub const WALL_THICKNESS: f32 = 5.0;
    /// Outer boundary thickness
    pub const BOUNDARY_THICKNESS: f32 = 2.0;

    /// Ball radius as a fraction of the smaller cell side
    pub const BALL_RADIUS_FACTOR: f32 = 0.25;
    /// Goal extent as a fraction of the cell size
    pub const GOAL_SCALE: f32 = 0.7;

    /// Velocity change applied per input nudge
    pub const NUDGE_SPEED: f32 = 2.0;
    /// Downward gravity switched on when the maze collapses
    pub const WIN_GRAVITY: f32 = 1.0;
}
