//! Nearest-boundary lookup for interior points.

use crate::region::Region;
use forage_core::{Point, RegionError};
use indexmap::IndexMap;

/// The boundary point nearest to an interior point, and its distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosestBoundary {
    /// A boundary point attaining the minimum distance.
    pub point: Point,
    /// [`Point::step_distance`] to `point`.
    pub distance: u64,
}

/// Maps every interior point of a [`Region`] to its closest boundary point.
///
/// Distances use [`Point::step_distance`] (`|Δx + Δy|`). Ties go to the
/// boundary point discovered first, so the index is deterministic for a
/// given region.
#[derive(Clone, Debug)]
pub struct ClosestBoundaryIndex {
    mapping: IndexMap<Point, ClosestBoundary>,
}

impl ClosestBoundaryIndex {
    /// Build the index by scanning every boundary point for every
    /// interior point. Cost is `O(|interior| × |boundary|)`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptyRegion`] if the region has no interior
    /// or no boundary points.
    pub fn build(region: &Region) -> Result<Self, RegionError> {
        let interior = region.interior();
        let boundary = region.boundary();
        if interior.is_empty() || boundary.is_empty() {
            return Err(RegionError::EmptyRegion {
                interior: interior.len(),
                boundary: boundary.len(),
            });
        }

        let mut mapping = IndexMap::with_capacity(interior.len());
        for &p in interior {
            let mut best = ClosestBoundary {
                point: boundary[0],
                distance: p.step_distance(boundary[0]),
            };
            for &q in boundary.iter().skip(1) {
                let d = p.step_distance(q);
                if d < best.distance {
                    best = ClosestBoundary {
                        point: q,
                        distance: d,
                    };
                }
            }
            mapping.insert(p, best);
        }

        Ok(Self { mapping })
    }

    /// Closest boundary entry for `point`, if it is interior.
    pub fn get(&self, point: Point) -> Option<&ClosestBoundary> {
        self.mapping.get(&point)
    }

    /// Distance from `point` to its closest boundary point, if interior.
    pub fn distance(&self, point: Point) -> Option<u64> {
        self.mapping.get(&point).map(|c| c.distance)
    }

    /// The full interior → closest-boundary mapping.
    pub fn mapping(&self) -> &IndexMap<Point, ClosestBoundary> {
        &self.mapping
    }

    /// Number of indexed interior points.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Always `false` for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
