//! Dense rectangular grids parsed from puzzle text.

use std::ops::Index;

use thiserror::Error;

use super::geometry::Point;

/// Error type for grid parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input has no rows
    #[error("grid is empty")]
    Empty,
    /// A row's length differs from the first row
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The cell parser rejected a character
    #[error("invalid cell {found:?} at {x},{y}: {message}")]
    InvalidCell {
        x: usize,
        y: usize,
        found: char,
        message: String,
    },
}

/// A `width` × `height` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Parse one cell per character, one row per line.
    ///
    /// Blank lines before the first row and after the last one are ignored.
    /// Spaces inside rows are cells, so every remaining row must have the
    /// same width.
    pub fn parse_with<F, E>(input: &str, mut cell: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Result<T, E>,
        E: std::fmt::Display,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        let lines: Vec<&str> = input.lines().collect();
        let is_row = |line: &&str| !line.trim().is_empty();
        let rows = match (lines.iter().position(is_row), lines.iter().rposition(is_row)) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => &[][..],
        };

        for (y, line) in rows.iter().enumerate() {
            let row_width = line.chars().count();
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(GridError::Ragged {
                        row: y,
                        expected,
                        found: row_width,
                    });
                }
                Some(_) => {}
            }
            for (x, c) in line.chars().enumerate() {
                let value = cell(c).map_err(|e| GridError::InvalidCell {
                    x,
                    y,
                    found: c,
                    message: e.to_string(),
                })?;
                cells.push(value);
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                cells,
                width,
                height,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Build a grid by evaluating `f` at every position.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Point) -> T) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Point::new(x as i64, y as i64)))
            .map(&mut f)
            .collect();
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.offset(p).is_some()
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.offset(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.offset(p).map(|i| &mut self.cells[i])
    }

    /// The first position (row by row) whose cell matches `pred`.
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells
            .iter()
            .position(|c| pred(c))
            .map(|i| Point::new((i % self.width) as i64, (i / self.width) as i64))
    }

    /// In-bounds cardinal neighbors of `p`, in [`Point::neighbors4`] order.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors4().into_iter().filter(|n| self.contains(*n))
    }

    /// Bottom-right corner.
    pub fn last_point(&self) -> Point {
        Point::new(self.width as i64 - 1, self.height as i64 - 1)
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    /// Panics if `p` is outside the grid.
    fn index(&self, p: Point) -> &T {
        match self.get(p) {
            Some(cell) => cell,
            None => panic!("{p:?} is outside a {}x{} grid", self.width, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(input: &str) -> Result<Grid<u8>, GridError> {
        Grid::parse_with(input, |c| c.to_digit(10).map(|d| d as u8).ok_or("not a digit"))
    }

    #[test]
    fn test_parse_and_lookup() {
        let grid = digits("123\n456\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(Point::new(2, 1)), Some(&6));
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.get(Point::new(0, -1)), None);
        assert_eq!(grid.last_point(), Point::new(2, 1));
        assert_eq!(grid.position(|&d| d == 5), Some(Point::new(1, 1)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(digits("\n\n"), Err(GridError::Empty));
        assert_eq!(
            digits("12\n345"),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            digits("1x"),
            Err(GridError::InvalidCell { x: 1, y: 0, found: 'x', .. })
        ));
    }

    #[test]
    fn test_leading_spaces_are_cells() {
        let grid = Grid::parse_with("\n  #\n###\n\n", |c| Ok::<char, &str>(c)).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid[Point::new(0, 0)], ' ');
        assert_eq!(grid[Point::new(2, 0)], '#');
        assert_eq!(grid[Point::new(0, 1)], '#');
    }

    #[test]
    fn test_neighbors_stay_in_bounds() {
        let grid = Grid::from_fn(2, 2, |p| p.x + p.y);
        let corner: Vec<Point> = grid.neighbors4(Point::ORIGIN).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(grid.get(Point::new(1, 1)), Some(&2));
        assert_eq!(grid[Point::new(1, 0)], 1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::from_fn(2, 2, |_| 0u8);
        let _ = grid[Point::new(2, 0)];
    }

    #[test]
    fn test_get_mut() {
        let mut grid = digits("00\n00").unwrap();
        if let Some(cell) = grid.get_mut(Point::new(1, 0)) {
            *cell = 9;
        }
        assert_eq!(grid.position(|&d| d == 9), Some(Point::new(1, 0)));
    }
}
