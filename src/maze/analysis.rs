//! Structural checks and path queries over a generated maze

use std::collections::VecDeque;

use super::Maze;
use super::grid::{Cell, Grid};

/// Disjoint-set forest over cell indices
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns false if `a` and `b` were already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

impl Maze {
    /// Every open wall as a `(cell, neighbour)` pair, neighbour right of or below cell
    pub fn open_edges(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        let right = self
            .vertical
            .iter()
            .filter(|(_, _, open)| **open)
            .map(|(r, c, _)| (Cell::new(r, c), Cell::new(r, c + 1)));
        let down = self
            .horizontal
            .iter()
            .filter(|(_, _, open)| **open)
            .map(|(r, c, _)| (Cell::new(r, c), Cell::new(r + 1, c)));
        right.chain(down)
    }

    /// Openings form a spanning tree: `R*C - 1` edges, no cycle, one component
    pub fn is_perfect(&self) -> bool {
        let n = self.size.cell_count();
        if self.open_edge_count() != n - 1 {
            return false;
        }
        let mut sets = UnionFind::new(n);
        // n - 1 successful unions over n nodes leaves exactly one component
        self.open_edges()
            .all(|(a, b)| sets.union(self.size.index_of(a), self.size.index_of(b)))
    }

    /// Shortest path through open walls, both endpoints included
    ///
    /// In a perfect maze this is the only simple path.
    pub fn solve(&self, from: Cell, to: Cell) -> Option<Vec<Cell>> {
        if !self.size.contains(from) || !self.size.contains(to) {
            return None;
        }

        let mut came_from: Grid<Option<Cell>> =
            Grid::filled(self.size.rows(), self.size.columns(), None);
        let mut queue = VecDeque::from([from]);
        came_from[from] = Some(from);

        while let Some(cell) = queue.pop_front() {
            if cell == to {
                return Some(walk_back(&came_from, from, to));
            }
            for next in self.open_neighbors(cell) {
                if came_from[next].is_none() {
                    came_from[next] = Some(cell);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Path from the ball's cell (top-left) to the goal
    pub fn solution(&self) -> Option<Vec<Cell>> {
        self.solve(Cell::new(0, 0), self.goal())
    }

    /// Cells with exactly one opening
    pub fn dead_ends(&self) -> usize {
        self.size
            .cells()
            .filter(|&cell| self.open_neighbors(cell).count() == 1)
            .count()
    }
}

fn walk_back(came_from: &Grid<Option<Cell>>, from: Cell, to: Cell) -> Vec<Cell> {
    let mut path = vec![to];
    let mut cell = to;
    while cell != from {
        match came_from[cell] {
            Some(prev) => cell = prev,
            None => break,
        }
        path.push(cell);
    }
    path.reverse();
    path
}
