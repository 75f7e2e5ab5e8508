//! The boundary predicate capability.

use crate::point::Point;

/// A pure predicate deciding whether a lattice point is admissible.
///
/// `admits(p)` returns `true` iff `p` lies strictly inside the region
/// walkers may occupy. Implementations must be pure: the same point
/// always yields the same answer, since region discovery, the exact
/// solver, and the walker population all evaluate it independently.
///
/// Any `Fn(Point) -> bool` closure is a `Boundary`. Consumers take
/// `&B` with `B: Boundary + ?Sized`, so `&dyn Boundary` works too:
///
/// ```
/// use forage_core::{Boundary, Point};
///
/// let strip = |p: Point| p.y.abs() < 3;
/// assert!(strip.admits(Point::new(100, 2)));
/// assert!(!strip.admits(Point::new(0, 3)));
/// ```
pub trait Boundary {
    /// Returns `true` if `point` is strictly inside the admissible region.
    fn admits(&self, point: Point) -> bool;
}

impl<F> Boundary for F
where
    F: Fn(Point) -> bool,
{
    fn admits(&self, point: Point) -> bool {
        self(point)
    }
}
