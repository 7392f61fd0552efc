//! Grid primitives: dimensions, cell coordinates, directions and dense matrices

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};

/// Validated maze dimensions (both at least 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridSize")]
pub struct GridSize {
    rows: usize,
    columns: usize,
}

/// Unchecked wire form; deserialization goes through [`GridSize::new`]
#[derive(Deserialize)]
struct RawGridSize {
    rows: usize,
    columns: usize,
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = MazeError;

    fn try_from(raw: RawGridSize) -> Result<Self> {
        GridSize::new(raw.rows, raw.columns)
    }
}

impl GridSize {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 || rows.checked_mul(columns).is_none() {
            return Err(MazeError::InvalidGridDimensions { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether a cell lies inside the grid
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// The bottom-right cell, where the goal sits
    pub fn last_cell(&self) -> Cell {
        Cell::new(self.rows - 1, self.columns - 1)
    }

    /// Row-major iterator over every cell
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let columns = self.columns;
        (0..self.cell_count()).map(move |i| Cell::new(i / columns, i % columns))
    }

    /// Row-major index of a cell
    #[inline]
    pub(crate) fn index_of(&self, cell: Cell) -> usize {
        cell.row * self.columns + cell.column
    }
}

/// A `(row, column)` coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Neighbour one step in `direction`, or `None` when it falls off the grid
    pub fn step(self, direction: Direction, size: GridSize) -> Option<Cell> {
        let next = match direction {
            Direction::Up => Cell::new(self.row.checked_sub(1)?, self.column),
            Direction::Right => Cell::new(self.row, self.column + 1),
            Direction::Down => Cell::new(self.row + 1, self.column),
            Direction::Left => Cell::new(self.row, self.column.checked_sub(1)?),
        };
        size.contains(next).then_some(next)
    }
}

/// The four grid neighbours, in the walk's canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// Dense row-major matrix
///
/// A grid may have zero rows or zero columns (the opening grids of a single
/// row or column maze); its declared width and height are kept regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(rows: usize, columns: usize, value: T) -> Self {
        Self {
            rows,
            columns,
            cells: vec![value; rows * columns],
        }
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Iterate `(row, column, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let columns = self.columns.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / columns, i % columns, v))
    }
}

impl<T: PartialEq> Grid<T> {
    /// Number of entries equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.cells.iter().filter(|v| *v == value).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "grid index ({row}, {column}) out of bounds for {}x{}",
            self.rows,
            self.columns
        );
        &self.cells[row * self.columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && column < self.columns,
            "grid index ({row}, {column}) out of bounds for {}x{}",
            self.rows,
            self.columns
        );
        &mut self.cells[row * self.columns + column]
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        &self[(cell.row, cell.column)]
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        &mut self[(cell.row, cell.column)]
    }
}
