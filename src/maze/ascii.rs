//! Plain-text rendering for terminals and logs
//!
//! ```text
//! +---+---+
//! | S     |
//! +---+   +
//! |     G |
//! +---+---+
//! ```

use std::collections::HashSet;
use std::fmt::Write;

use super::Maze;
use super::grid::Cell;

/// Render the maze with `S` on the ball's cell, `G` on the goal, and `.` on
/// any cell of `path`
pub fn render(maze: &Maze, path: Option<&[Cell]>) -> String {
    let rows = maze.size.rows();
    let columns = maze.size.columns();
    let on_path: HashSet<Cell> = path.unwrap_or_default().iter().copied().collect();
    let start = Cell::new(0, 0);
    let goal = maze.goal();

    let mut out = String::with_capacity((rows * 2 + 1) * (columns * 4 + 2));
    out.push('+');
    for _ in 0..columns {
        out.push_str("---+");
    }
    out.push('\n');

    for row in 0..rows {
        out.push('|');
        for column in 0..columns {
            let cell = Cell::new(row, column);
            let mark = if cell == goal {
                'G'
            } else if cell == start {
                'S'
            } else if on_path.contains(&cell) {
                '.'
            } else {
                ' '
            };
            let _ = write!(out, " {mark} ");
            let open = column + 1 < columns && maze.vertical[(row, column)];
            out.push(if open { ' ' } else { '|' });
        }
        out.push('\n');

        out.push('+');
        for column in 0..columns {
            let open = row + 1 < rows && maze.horizontal[(row, column)];
            out.push_str(if open { "   +" } else { "---+" });
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Direction, FixedOrder, GridSize, generate_from};

    fn golden() -> Maze {
        let size = GridSize::new(3, 3).unwrap();
        generate_from(size, Cell::new(0, 0), &mut FixedOrder(Direction::ALL)).unwrap()
    }

    #[test]
    fn test_render_golden() {
        let text = render(&golden(), None);
        let expected = "\
+---+---+---+
| S         |
+---+---+   +
|       |   |
+   +   +   +
|   |     G |
+---+---+---+
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_with_solution() {
        let maze = golden();
        let path = maze.solution().unwrap();
        let text = render(&maze, Some(&path));
        assert!(text.contains("| S   .   . |"));
        assert!(text.contains("|       | . |"));
    }

    #[test]
    fn test_render_single_cell() {
        let size = GridSize::new(1, 1).unwrap();
        let maze = generate_from(size, Cell::new(0, 0), &mut FixedOrder(Direction::ALL)).unwrap();
        assert_eq!(render(&maze, None), "+---+\n| G |\n+---+\n");
    }
}
