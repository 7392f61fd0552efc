//! Randomized depth-first walk ("recursive backtracker")
//!
//! Runs on an explicit frame stack so grid size is bounded by memory rather
//! than thread stack depth. Each frame holds a cell and its shuffled
//! neighbour list; the walk descends into the first unvisited neighbour
//! before trying the next one, which is what produces long corridors.

use rand::Rng;
use rand::seq::SliceRandom;

use super::Maze;
use super::grid::{Cell, Direction, GridSize};
use crate::error::{MazeError, Result};

/// Decides the order in which a cell's four neighbours are tried
pub trait NeighborOrder {
    fn order(&mut self, directions: &mut [Direction; 4]);
}

/// Uniformly random permutation drawn from an injected RNG
pub struct Shuffled<'a, R: Rng + ?Sized>(pub &'a mut R);

impl<R: Rng + ?Sized> NeighborOrder for Shuffled<'_, R> {
    fn order(&mut self, directions: &mut [Direction; 4]) {
        directions.shuffle(&mut *self.0);
    }
}

/// Same permutation at every cell (golden tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedOrder(pub [Direction; 4]);

impl NeighborOrder for FixedOrder {
    fn order(&mut self, directions: &mut [Direction; 4]) {
        *directions = self.0;
    }
}

/// One level of the walk
struct Frame {
    cell: Cell,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn enter(cell: Cell, order: &mut impl NeighborOrder) -> Self {
        let mut directions = Direction::ALL;
        order.order(&mut directions);
        Self {
            cell,
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let dir = self.directions.get(self.next).copied()?;
        self.next += 1;
        Some(dir)
    }
}

/// Generate a maze from a uniformly random start cell
pub fn generate<R: Rng + ?Sized>(size: GridSize, rng: &mut R) -> Maze {
    let start = Cell::new(
        rng.random_range(0..size.rows()),
        rng.random_range(0..size.columns()),
    );
    walk(size, start, &mut Shuffled(rng))
}

/// Generate a maze from an explicit start cell and neighbour ordering
pub fn generate_from(
    size: GridSize,
    start: Cell,
    order: &mut impl NeighborOrder,
) -> Result<Maze> {
    if !size.contains(start) {
        return Err(MazeError::InvalidStartCell {
            row: start.row,
            column: start.column,
        });
    }
    Ok(walk(size, start, order))
}

fn walk(size: GridSize, start: Cell, order: &mut impl NeighborOrder) -> Maze {
    let mut maze = Maze::closed(size, start);
    maze.visited[start] = true;
    maze.visit_order.push(start);

    let mut stack = Vec::with_capacity(size.cell_count());
    stack.push(Frame::enter(start, order));
    let mut max_depth = 1;

    while let Some(frame) = stack.last_mut() {
        let cell = frame.cell;
        let Some(dir) = frame.next_direction() else {
            // Neighbours exhausted: backtrack
            stack.pop();
            continue;
        };

        let Some(next) = cell.step(dir, size) else {
            continue;
        };
        if maze.visited[next] {
            continue;
        }

        maze.open(cell, dir);
        maze.visited[next] = true;
        maze.visit_order.push(next);
        stack.push(Frame::enter(next, order));
        max_depth = max_depth.max(stack.len());
    }

    log::debug!(
        "Generated {}x{} maze from ({}, {}): {} openings, max depth {}",
        size.rows(),
        size.columns(),
        start.row,
        start.column,
        maze.open_edge_count(),
        max_depth
    );

    maze
}
