//! Flood-fill region discovery.
//!
//! [`Region::explore`] expands a seed set through 4-connected neighbours
//! that satisfy a [`Boundary`] predicate. Admitted neighbours join the
//! interior; rejected neighbours are recorded as boundary points. The
//! result is immutable once built.

use forage_core::{Boundary, Point, RegionError};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// The interior and boundary of an admissible lattice region.
///
/// Invariants (established by [`Region::explore`]):
/// - `interior` is the predicate closure of the seeds under 4-connectivity;
/// - `boundary` is exactly the set of rejected neighbours of interior points;
/// - `interior ∩ boundary = ∅`.
///
/// Both sets keep insertion order, so iteration is deterministic for a
/// given predicate and seed set.
#[derive(Clone, Debug)]
pub struct Region {
    interior: IndexSet<Point>,
    boundary: IndexSet<Point>,
    iterations: usize,
}

impl Region {
    /// Flood-fill from `seeds` under `boundary`, spending at most
    /// `max_iter` frontier expansions.
    ///
    /// Seeds are trusted as interior and are not checked against the
    /// predicate. Each iteration pops one frontier point and classifies
    /// its neighbours that are not yet interior.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::RegionTooLarge`] if the frontier is still
    /// non-empty after `max_iter` iterations.
    ///
    /// # Examples
    ///
    /// ```
    /// use forage_core::Point;
    /// use forage_space::Region;
    ///
    /// let square = |p: Point| p.x.abs() < 2 && p.y.abs() < 2;
    /// let region = Region::explore(&square, [Point::ORIGIN], 100).unwrap();
    /// assert_eq!(region.interior().len(), 9);
    /// assert_eq!(region.boundary().len(), 12);
    /// ```
    pub fn explore<B, I>(boundary: &B, seeds: I, max_iter: usize) -> Result<Self, RegionError>
    where
        B: Boundary + ?Sized,
        I: IntoIterator<Item = Point>,
    {
        let mut interior: IndexSet<Point> = seeds.into_iter().collect();
        let mut frontier: Vec<Point> = interior.iter().copied().collect();
        let mut rejected_set: IndexSet<Point> = IndexSet::new();

        let mut iterations = 0;
        while iterations < max_iter {
            let Some(point) = frontier.pop() else {
                break;
            };
            iterations += 1;

            let (accepted, rejected): (SmallVec<[Point; 4]>, SmallVec<[Point; 4]>) = point
                .neighbours()
                .into_iter()
                .filter(|n| !interior.contains(n))
                .partition(|n| boundary.admits(*n));

            for n in accepted {
                if interior.insert(n) {
                    frontier.push(n);
                }
            }
            rejected_set.extend(rejected);
        }

        if !frontier.is_empty() {
            log::warn!(
                "region exploration hit budget: {} iterations, {} interior, {} unexplored",
                max_iter,
                interior.len(),
                frontier.len()
            );
            return Err(RegionError::RegionTooLarge {
                max_iter,
                unexplored: frontier.len(),
            });
        }

        log::debug!(
            "region explored in {} iterations: {} interior, {} boundary",
            iterations,
            interior.len(),
            rejected_set.len()
        );

        Ok(Self {
            interior,
            boundary: rejected_set,
            iterations,
        })
    }

    /// Interior points in discovery order.
    pub fn interior(&self) -> &IndexSet<Point> {
        &self.interior
    }

    /// Boundary points in discovery order.
    pub fn boundary(&self) -> &IndexSet<Point> {
        &self.boundary
    }

    /// Whether `point` is an interior point.
    pub fn contains(&self, point: Point) -> bool {
        self.interior.contains(&point)
    }

    /// Whether `point` is a boundary point.
    pub fn is_boundary(&self, point: Point) -> bool {
        self.boundary.contains(&point)
    }

    /// Number of frontier expansions the flood fill performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Position of `point` in the interior ordering.
    ///
    /// The exact solver uses this as the row/column index of its
    /// transition matrix.
    pub fn interior_rank(&self, point: Point) -> Option<usize> {
        self.interior.get_index_of(&point)
    }
}
