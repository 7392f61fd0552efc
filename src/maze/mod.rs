//! Perfect-maze generation
//!
//! A maze is a spanning tree over the cell grid: every cell reachable, exactly
//! one simple path between any two cells. Openings live in two boolean grids:
//! - `vertical[r][c]`: the wall between `(r, c)` and `(r, c + 1)` is open
//! - `horizontal[r][c]`: the wall between `(r, c)` and `(r + 1, c)` is open
//!
//! The generator owns every matrix it fills and returns them by value; no
//! generation state outlives a call.

pub mod analysis;
pub mod ascii;
pub mod generator;
pub mod grid;

pub use generator::{FixedOrder, NeighborOrder, Shuffled, generate, generate_from};
pub use grid::{Cell, Direction, Grid, GridSize};

use serde::{Deserialize, Serialize};

/// A fully generated maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    pub size: GridSize,
    /// Cell the walk started from
    pub start: Cell,
    /// R x C, all `true` once generation returns
    pub visited: Grid<bool>,
    /// R x (C - 1)
    pub vertical: Grid<bool>,
    /// (R - 1) x C
    pub horizontal: Grid<bool>,
    /// Cells in the order the walk first entered them
    pub visit_order: Vec<Cell>,
}

impl Maze {
    /// Whether the wall on `direction` side of `cell` is open
    ///
    /// Outer edges are never open.
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        let Some(next) = cell.step(direction, self.size) else {
            return false;
        };
        match direction {
            Direction::Left | Direction::Right => {
                self.vertical[(cell.row, cell.column.min(next.column))]
            }
            Direction::Up | Direction::Down => {
                self.horizontal[(cell.row.min(next.row), cell.column)]
            }
        }
    }

    /// Neighbours reachable from `cell` through an opening
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.is_open(cell, dir))
            .filter_map(move |dir| cell.step(dir, self.size))
    }

    /// Total number of open walls in both grids
    pub fn open_edge_count(&self) -> usize {
        self.vertical.count(&true) + self.horizontal.count(&true)
    }

    /// The goal cell (bottom-right)
    pub fn goal(&self) -> Cell {
        self.size.last_cell()
    }

    /// Open the wall between `cell` and its neighbour in `direction`
    ///
    /// Left/right land in `vertical` at the lower column, up/down in
    /// `horizontal` at the lower row.
    pub(crate) fn open(&mut self, cell: Cell, direction: Direction) {
        match direction {
            Direction::Left => self.vertical[(cell.row, cell.column - 1)] = true,
            Direction::Right => self.vertical[(cell.row, cell.column)] = true,
            Direction::Up => self.horizontal[(cell.row - 1, cell.column)] = true,
            Direction::Down => self.horizontal[(cell.row, cell.column)] = true,
        }
    }

    /// All-closed, unvisited maze
    pub(crate) fn closed(size: GridSize, start: Cell) -> Self {
        let (rows, columns) = (size.rows(), size.columns());
        Self {
            size,
            start,
            visited: Grid::filled(rows, columns, false),
            vertical: Grid::filled(rows, columns - 1, false),
            horizontal: Grid::filled(rows - 1, columns, false),
            visit_order: Vec::with_capacity(size.cell_count()),
        }
    }
}
