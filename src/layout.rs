//! Wall layout: maze openings -> physical body specs
//!
//! World coordinates put the origin at the top-left corner with y growing
//! downward; every spec is described by its center, matching how the host
//! engine instantiates rectangles and circles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::maze::{Grid, Maze};

/// Label attached to each body, reported back in collision pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyLabel {
    Ball,
    Goal,
    Wall,
    Boundary,
}

/// Wall orientation (the axis along which it is long)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A static rectangular wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    pub label: BodyLabel,
    pub orientation: Orientation,
    pub center: Vec2,
    pub length: f32,
    pub thickness: f32,
}

impl WallSpec {
    /// Axis-aligned (width, height)
    pub fn size(&self) -> Vec2 {
        match self.orientation {
            Orientation::Horizontal => Vec2::new(self.length, self.thickness),
            Orientation::Vertical => Vec2::new(self.thickness, self.length),
        }
    }
}

/// The player's ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSpec {
    pub center: Vec2,
    pub radius: f32,
}

/// The static goal pad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    pub center: Vec2,
    pub size: Vec2,
}

/// Geometry inputs for a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub cell_width: f32,
    pub cell_height: f32,
    pub wall_thickness: f32,
    pub boundary_thickness: f32,
    /// Ball radius as a fraction of the smaller cell side
    pub ball_radius_factor: f32,
    /// Goal extent as a fraction of the cell size
    pub goal_scale: f32,
}

impl LayoutParams {
    /// Default proportions for the given cell size
    pub fn for_cell(cell_width: f32, cell_height: f32) -> Self {
        Self {
            cell_width,
            cell_height,
            wall_thickness: WALL_THICKNESS,
            boundary_thickness: BOUNDARY_THICKNESS,
            ball_radius_factor: BALL_RADIUS_FACTOR,
            goal_scale: GOAL_SCALE,
        }
    }
}

/// Everything the host needs to build the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// World extent (columns * cell width, rows * cell height)
    pub world: Vec2,
    /// Interior walls, one per closed opening
    pub walls: Vec<WallSpec>,
    /// Outer frame: top, bottom, left, right
    pub boundaries: Vec<WallSpec>,
    pub ball: BallSpec,
    pub goal: GoalSpec,
}

impl Layout {
    pub fn horizontal_walls(&self) -> impl Iterator<Item = &WallSpec> {
        self.walls
            .iter()
            .filter(|w| w.orientation == Orientation::Horizontal)
    }

    pub fn vertical_walls(&self) -> impl Iterator<Item = &WallSpec> {
        self.walls
            .iter()
            .filter(|w| w.orientation == Orientation::Vertical)
    }
}

/// Derive body specs from the opening grids
///
/// `vertical` is R x (C - 1) and `horizontal` is (R - 1) x C; the grid's
/// rows come from `vertical` and its columns from `horizontal`, so a single
/// row or column maze still lays out correctly.
pub fn layout(vertical: &Grid<bool>, horizontal: &Grid<bool>, params: &LayoutParams) -> Layout {
    let LayoutParams {
        cell_width: w,
        cell_height: h,
        wall_thickness,
        ..
    } = *params;
    let rows = vertical.rows();
    let columns = horizontal.columns();
    let world = Vec2::new(columns as f32 * w, rows as f32 * h);

    let horizontal_walls = horizontal
        .iter()
        .filter(|(_, _, open)| !**open)
        .map(|(row, column, _)| WallSpec {
            label: BodyLabel::Wall,
            orientation: Orientation::Horizontal,
            center: Vec2::new(column as f32 * w + w / 2.0, row as f32 * h + h),
            length: w,
            thickness: wall_thickness,
        });
    let vertical_walls = vertical
        .iter()
        .filter(|(_, _, open)| !**open)
        .map(|(row, column, _)| WallSpec {
            label: BodyLabel::Wall,
            orientation: Orientation::Vertical,
            center: Vec2::new(column as f32 * w + w, row as f32 * h + h / 2.0),
            length: h,
            thickness: wall_thickness,
        });
    let walls: Vec<WallSpec> = horizontal_walls.chain(vertical_walls).collect();

    let ball = BallSpec {
        center: Vec2::new(w / 2.0, h / 2.0),
        radius: w.min(h) * params.ball_radius_factor,
    };
    let goal = GoalSpec {
        center: Vec2::new(world.x - w / 2.0, world.y - h / 2.0),
        size: Vec2::new(w, h) * params.goal_scale,
    };

    log::debug!(
        "Laid out {} interior walls over a {}x{} world",
        walls.len(),
        world.x,
        world.y
    );

    Layout {
        world,
        walls,
        boundaries: boundaries(world, params.boundary_thickness),
        ball,
        goal,
    }
}

/// Convenience wrapper over [`layout`] for a generated maze
pub fn layout_maze(maze: &Maze, params: &LayoutParams) -> Layout {
    layout(&maze.vertical, &maze.horizontal, params)
}

fn boundaries(world: Vec2, thickness: f32) -> Vec<WallSpec> {
    let frame = |orientation, center, length| WallSpec {
        label: BodyLabel::Boundary,
        orientation,
        center,
        length,
        thickness,
    };
    vec![
        frame(Orientation::Horizontal, Vec2::new(world.x / 2.0, 0.0), world.x),
        frame(Orientation::Horizontal, Vec2::new(world.x / 2.0, world.y), world.x),
        frame(Orientation::Vertical, Vec2::new(0.0, world.y / 2.0), world.y),
        frame(Orientation::Vertical, Vec2::new(world.x, world.y / 2.0), world.y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Cell, Direction, FixedOrder, GridSize, generate, generate_from};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn golden() -> Maze {
        let size = GridSize::new(3, 3).unwrap();
        generate_from(size, Cell::new(0, 0), &mut FixedOrder(Direction::ALL)).unwrap()
    }

    #[test]
    fn test_golden_wall_positions() {
        let params = LayoutParams::for_cell(100.0, 50.0);
        let layout = layout_maze(&golden(), &params);

        assert_eq!(layout.world, Vec2::new(300.0, 150.0));
        assert_eq!(layout.walls.len(), 4);

        // Closed horizontals: (0,0) and (0,1)
        let horizontal: Vec<Vec2> = layout.horizontal_walls().map(|w| w.center).collect();
        assert_eq!(horizontal, vec![Vec2::new(50.0, 50.0), Vec2::new(150.0, 50.0)]);

        // Closed verticals: (1,1) and (2,0)
        let vertical: Vec<Vec2> = layout.vertical_walls().map(|w| w.center).collect();
        assert_eq!(vertical, vec![Vec2::new(200.0, 75.0), Vec2::new(100.0, 125.0)]);

        for wall in layout.horizontal_walls() {
            assert_eq!(wall.size(), Vec2::new(100.0, WALL_THICKNESS));
        }
        for wall in layout.vertical_walls() {
            assert_eq!(wall.size(), Vec2::new(WALL_THICKNESS, 50.0));
        }
    }

    #[test]
    fn test_ball_and_goal() {
        let params = LayoutParams::for_cell(100.0, 50.0);
        let layout = layout_maze(&golden(), &params);

        assert_eq!(layout.ball.center, Vec2::new(50.0, 25.0));
        assert_eq!(layout.ball.radius, 12.5);
        assert_eq!(layout.goal.center, Vec2::new(250.0, 125.0));
        assert!((layout.goal.size - Vec2::new(70.0, 35.0)).length() < 1e-4);
    }

    #[test]
    fn test_boundaries_frame_world() {
        let params = LayoutParams::for_cell(100.0, 50.0);
        let layout = layout_maze(&golden(), &params);

        assert_eq!(layout.boundaries.len(), 4);
        assert!(layout.boundaries.iter().all(|b| b.label == BodyLabel::Boundary));
        assert_eq!(layout.boundaries[0].center, Vec2::new(150.0, 0.0));
        assert_eq!(layout.boundaries[1].center, Vec2::new(150.0, 150.0));
        assert_eq!(layout.boundaries[2].size(), Vec2::new(BOUNDARY_THICKNESS, 150.0));
        assert_eq!(layout.boundaries[3].center, Vec2::new(300.0, 75.0));
    }

    #[test]
    fn test_single_cell_has_no_interior_walls() {
        let size = GridSize::new(1, 1).unwrap();
        let maze = generate(size, &mut Pcg32::seed_from_u64(3));
        let layout = layout_maze(&maze, &LayoutParams::for_cell(40.0, 40.0));

        assert!(layout.walls.is_empty());
        assert_eq!(layout.world, Vec2::new(40.0, 40.0));
        assert_eq!(layout.ball.center, layout.goal.center);
    }

    #[test]
    fn test_single_row_world_extent() {
        let size = GridSize::new(1, 4).unwrap();
        let maze = generate(size, &mut Pcg32::seed_from_u64(9));
        let layout = layout_maze(&maze, &LayoutParams::for_cell(10.0, 20.0));

        assert_eq!(layout.world, Vec2::new(40.0, 20.0));
        assert!(layout.walls.is_empty());
    }

    #[test]
    fn test_layout_serializes_labels_lowercase() {
        let params = LayoutParams::for_cell(10.0, 10.0);
        let layout = layout_maze(&golden(), &params);
        let json = serde_json::to_string(&layout).unwrap();
        assert!(json.contains("\"label\":\"wall\""));
        assert!(json.contains("\"label\":\"boundary\""));
        assert!(json.contains("\"orientation\":\"vertical\""));
    }

    proptest! {
        #[test]
        fn prop_wall_counts_match_closed_openings(
            rows in 1usize..15,
            columns in 1usize..15,
            seed in any::<u64>()
        ) {
            let size = GridSize::new(rows, columns).unwrap();
            let maze = generate(size, &mut Pcg32::seed_from_u64(seed));
            let layout = layout_maze(&maze, &LayoutParams::for_cell(32.0, 24.0));

            prop_assert_eq!(layout.horizontal_walls().count(), maze.horizontal.count(&false));
            prop_assert_eq!(layout.vertical_walls().count(), maze.vertical.count(&false));

            // Interior walls never touch the outer frame
            for wall in &layout.walls {
                prop_assert!(wall.center.x > 0.0 && wall.center.x < layout.world.x + 1e-3);
                prop_assert!(wall.center.y > 0.0 && wall.center.y < layout.world.y + 1e-3);
            }
        }
    }
}
