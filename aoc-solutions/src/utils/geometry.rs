//! 2-D points, directions and rotations.
//!
//! Screen coordinates: `x` grows to the right, `y` grows downwards, so
//! [`Direction::Up`] is `(0, -1)`.

use std::ops::Add;

/// An integer position or offset on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance.
    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// The adjacent point in `direction`.
    pub fn step(self, direction: Direction) -> Point {
        self + direction.delta()
    }

    /// Cardinal neighbors in right, down, left, up order.
    pub fn neighbors4(self) -> [Point; 4] {
        [
            self.step(Direction::Right),
            self.step(Direction::Down),
            self.step(Direction::Left),
            self.step(Direction::Up),
        ]
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// A quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// One of the four cardinal headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    pub fn turn(self, rotation: Rotation) -> Direction {
        let index = self as usize;
        let next = match rotation {
            Rotation::Clockwise => (index + 1) % 4,
            Rotation::CounterClockwise => (index + 3) % 4,
        };
        Direction::ALL[next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distances() {
        let a = Point::new(1, -2);
        let b = Point::new(-3, 4);
        assert_eq!(a.manhattan(b), 10);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn test_neighbors4_order() {
        assert_eq!(
            Point::ORIGIN.neighbors4(),
            [
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(-1, 0),
                Point::new(0, -1)
            ]
        );
    }

    #[test]
    fn test_turns() {
        for d in Direction::ALL {
            assert_eq!(d.turn(Rotation::Clockwise).turn(Rotation::CounterClockwise), d);
            let back = d.turn(Rotation::Clockwise).turn(Rotation::Clockwise);
            assert_eq!(d.delta() + back.delta(), Point::ORIGIN);
        }
        assert_eq!(Direction::Up.turn(Rotation::Clockwise), Direction::Right);
        assert_eq!(Direction::Up.turn(Rotation::CounterClockwise), Direction::Left);
    }

    #[test]
    fn test_point_arithmetic() {
        assert_eq!(Point::new(2, 3) + Point::new(1, 1), Point::new(3, 4));
        assert_eq!(Point::from((7, 8)).step(Direction::Up), Point::new(7, 7));
        assert_eq!(Point::ORIGIN.step(Direction::Left), Point::new(-1, 0));
    }
}
