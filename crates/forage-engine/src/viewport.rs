//! Raster data for heatmap rendering of a lattice window.

use crate::config::ConfigError;
use forage_core::{Boundary, Point};
use indexmap::IndexMap;

/// A `height × width` window of the lattice centered on the origin.
///
/// Rows run top to bottom (largest `y` first), columns left to right.
/// Row `r`, column `c` is the point
/// `(c - width/2, (height - 1 - r) - height/2)`. Every raster is
/// row-major with `height * width` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    height: usize,
    width: usize,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyViewport`] if either extent is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyViewport { height, width });
        }
        Ok(Self { height, width })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Lattice point under cell `(row, col)`, or `None` if the cell is
    /// outside the window.
    pub fn point_at(&self, row: usize, col: usize) -> Option<Point> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let x = col as i64 - (self.width / 2) as i64;
        let y = (self.height - 1 - row) as i64 - (self.height / 2) as i64;
        Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
    }

    /// Cell `(row, col)` showing `point`, if it is inside the window.
    pub fn cell_of(&self, point: Point) -> Option<(usize, usize)> {
        let col = i64::from(point.x) + (self.width / 2) as i64;
        let flipped = i64::from(point.y) + (self.height / 2) as i64;
        if col < 0 || col >= self.width as i64 || flipped < 0 || flipped >= self.height as i64 {
            return None;
        }
        Some((self.height - 1 - flipped as usize, col as usize))
    }

    /// Points of every cell in row-major order; `None` for cells whose
    /// coordinates do not fit in `i32`.
    fn cells(&self) -> impl Iterator<Item = Option<Point>> + '_ {
        (0..self.height).flat_map(move |r| (0..self.width).map(move |c| self.point_at(r, c)))
    }

    /// `true` for every cell whose point fails the predicate.
    pub fn mask<B: Boundary + ?Sized>(&self, boundary: &B) -> Vec<bool> {
        self.cells()
            .map(|p| p.is_none_or(|p| !boundary.admits(p)))
            .collect()
    }

    /// Walker count per cell, `None` where no walker stands.
    ///
    /// Positions outside the window are dropped.
    pub fn counts(&self, occupancy: &IndexMap<Point, usize>) -> Vec<Option<usize>> {
        let mut cells = vec![None; self.height * self.width];
        for (p, n) in occupancy {
            if let Some((r, c)) = self.cell_of(*p) {
                cells[r * self.width + c] = Some(*n);
            }
        }
        cells
    }
}
