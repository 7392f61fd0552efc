//! Game settings
//!
//! Persisted as a JSON file. Missing fields take their defaults, so a file
//! may override only what it cares about.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{MazeError, Result};
use crate::layout::LayoutParams;
use crate::maze::GridSize;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Grid ===
    /// Cell rows
    pub rows: usize,
    /// Cell columns
    pub columns: usize,
    /// Fixed seed for reproducible mazes (random when absent)
    pub seed: Option<u64>,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Bodies ===
    /// Interior wall thickness
    pub wall_thickness: f32,
    /// Outer frame thickness
    pub boundary_thickness: f32,
    /// Ball radius as a fraction of the smaller cell side
    pub ball_radius_factor: f32,
    /// Goal extent as a fraction of the cell size
    pub goal_scale: f32,

    // === Feel ===
    /// Velocity change per key press / button tap
    pub nudge_speed: f32,
    /// Downward gravity applied when the maze collapses
    pub win_gravity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            seed: None,

            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,

            wall_thickness: WALL_THICKNESS,
            boundary_thickness: BOUNDARY_THICKNESS,
            ball_radius_factor: BALL_RADIUS_FACTOR,
            goal_scale: GOAL_SCALE,

            nudge_speed: NUDGE_SPEED,
            win_gravity: WIN_GRAVITY,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MazeError::InvalidSetting { name, value })
    }
}

impl Settings {
    /// Check every field; returns the validated grid size
    pub fn validate(&self) -> Result<GridSize> {
        let size = GridSize::new(self.rows, self.columns)?;

        let (width, height) = (self.viewport_width, self.viewport_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(MazeError::InvalidViewport { width, height });
        }

        positive("wall_thickness", self.wall_thickness)?;
        positive("boundary_thickness", self.boundary_thickness)?;
        positive("ball_radius_factor", self.ball_radius_factor)?;
        positive("goal_scale", self.goal_scale)?;
        positive("nudge_speed", self.nudge_speed)?;
        // y grows downward, so a collapsing maze needs positive gravity
        positive("win_gravity", self.win_gravity)?;

        Ok(size)
    }

    /// Width and height of one cell: viewport divided by column/row count
    pub fn cell_size(&self) -> (f32, f32) {
        (
            self.viewport_width / self.columns.max(1) as f32,
            self.viewport_height / self.rows.max(1) as f32,
        )
    }

    pub fn layout_params(&self) -> LayoutParams {
        let (cell_width, cell_height) = self.cell_size();
        LayoutParams {
            cell_width,
            cell_height,
            wall_thickness: self.wall_thickness,
            boundary_thickness: self.boundary_thickness,
            ball_radius_factor: self.ball_radius_factor,
            goal_scale: self.goal_scale,
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    ///
    /// Invalid settings are rejected and nothing is written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("maze_ball_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults_validate() {
        let settings = Settings::default();
        let size = settings.validate().unwrap();
        assert_eq!((size.rows(), size.columns()), (DEFAULT_ROWS, DEFAULT_COLUMNS));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let settings = Settings {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(MazeError::InvalidGridDimensions { rows: 0, .. })
        ));
    }

    #[test]
    fn test_bad_viewport_rejected() {
        let settings = Settings {
            viewport_width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(MazeError::InvalidViewport { .. })));
    }

    #[test]
    fn test_bad_thickness_rejected() {
        let settings = Settings {
            wall_thickness: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(MazeError::InvalidSetting { name: "wall_thickness", .. })
        ));
    }

    #[test]
    fn test_non_downward_gravity_rejected() {
        for win_gravity in [0.0, -1.0, f32::INFINITY] {
            let settings = Settings {
                win_gravity,
                ..Default::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(MazeError::InvalidSetting { name: "win_gravity", .. })
            ));
        }
    }

    #[test]
    fn test_cell_size_divides_viewport() {
        let settings = Settings {
            rows: 4,
            columns: 8,
            viewport_width: 800.0,
            viewport_height: 200.0,
            ..Default::default()
        };
        assert_eq!(settings.cell_size(), (100.0, 50.0));
        let params = settings.layout_params();
        assert_eq!(params.cell_width, 100.0);
        assert_eq!(params.wall_thickness, WALL_THICKNESS);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "rows": 10, "seed": 42 }"#).unwrap();
        assert_eq!(settings.rows, 10);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.columns, DEFAULT_COLUMNS);
        assert_eq!(settings.goal_scale, GOAL_SCALE);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save_load");
        let settings = Settings {
            rows: 9,
            columns: 11,
            seed: Some(7),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_invalid_settings_not_saved() {
        let path = temp_path("invalid_save");
        let settings = Settings {
            rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.save(&path),
            Err(MazeError::InvalidGridDimensions { rows: 0, .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = temp_path("does_not_exist");
        assert!(matches!(Settings::load(&path), Err(MazeError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let path = temp_path("malformed");
        fs::write(&path, "{ rows: ").unwrap();
        let result = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(MazeError::Json(_))));
    }
}
