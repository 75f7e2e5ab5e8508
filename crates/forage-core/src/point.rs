//! Lattice points and the four unit moves of the square lattice.

use std::fmt;

/// An integer point on the 2D square lattice.
///
/// Points are plain values: equality and hashing are by coordinates,
/// so they are used directly as set and map keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The lattice origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one unit move away in `direction`.
    ///
    /// Coordinates wrap at the `i32` extremes, in debug and release
    /// builds alike.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// The four axis-aligned unit-distance neighbours, in [`Direction::ALL`] order.
    ///
    /// # Examples
    ///
    /// ```
    /// use forage_core::Point;
    ///
    /// let n = Point::new(0, 0).neighbours();
    /// assert!(n.contains(&Point::new(1, 0)));
    /// assert!(n.contains(&Point::new(0, -1)));
    /// assert!(!n.contains(&Point::new(1, 1)));
    /// ```
    pub fn neighbours(self) -> [Point; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Whether `other` is one of the four unit-distance neighbours.
    pub fn is_adjacent(self, other: Point) -> bool {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx.abs() + dy.abs() == 1
    }

    /// Step distance used by the boundary index: `|Δx + Δy|`.
    ///
    /// This is the absolute value of the *sum* of the coordinate
    /// differences, not the L1 norm `|Δx| + |Δy|`. The two agree along
    /// the diagonal `Δx·Δy ≥ 0` and differ elsewhere; the lower-bound
    /// estimator depends on this exact formula.
    ///
    /// ```
    /// use forage_core::Point;
    ///
    /// assert_eq!(Point::new(0, 0).step_distance(Point::new(2, 1)), 3);
    /// assert_eq!(Point::new(0, 0).step_distance(Point::new(2, -2)), 0);
    /// ```
    pub fn step_distance(self, other: Point) -> u64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        (dx + dy).unsigned_abs()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four unit moves on the square lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// `+x`.
    East = 0,
    /// `-x`.
    West = 1,
    /// `+y`.
    North = 2,
    /// `-y`.
    South = 3,
}

impl Direction {
    /// All four moves, indexable by a uniform draw from `0..4`.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Returns the `(dx, dy)` offset for this move.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }
}
