//! Error types
//!
//! Out-of-bounds neighbours during the walk are not errors; they are skipped.
//! Everything here is raised at the boundary, before any generation work.

use thiserror::Error;

/// Errors surfaced by maze construction and configuration
#[derive(Debug, Error)]
pub enum MazeError {
    /// Rows or columns is zero, or the cell count does not fit in `usize`
    #[error("invalid grid {rows}x{columns}: need at least 1x1 and rows * columns within usize")]
    InvalidGridDimensions { rows: usize, columns: usize },

    /// An explicit start cell lies outside the grid
    #[error("start cell ({row}, {column}) is outside the grid")]
    InvalidStartCell { row: usize, column: usize },

    #[error("invalid viewport {width}x{height}: both must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },

    #[error("invalid setting `{name}` = {value}: must be finite and positive")]
    InvalidSetting { name: &'static str, value: f32 },

    #[error("settings file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
