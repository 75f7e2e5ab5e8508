//! Reusable boundary fixtures.
//!
//! - [`OpenSquare`]: `|x| < h && |y| < h`.
//! - [`Segment`]: a one-row strip `|x| < h && y == 0`.
//! - [`SinglePoint`]: admits exactly one point.
//! - [`CountingBoundary`]: wraps another boundary and counts evaluations.

use forage_core::{Boundary, Point};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Open square of half-width `h` centered on the origin.
pub struct OpenSquare {
    pub half_width: i32,
}

impl OpenSquare {
    pub fn new(half_width: i32) -> Self {
        Self { half_width }
    }

    /// Number of interior points: `(2h - 1)²`.
    pub fn interior_len(&self) -> usize {
        let side = (2 * self.half_width - 1) as usize;
        side * side
    }
}

impl Boundary for OpenSquare {
    fn admits(&self, p: Point) -> bool {
        p.x.abs() < self.half_width && p.y.abs() < self.half_width
    }
}

/// Horizontal strip of `2h - 1` points on the x-axis.
pub struct Segment {
    pub half_len: i32,
}

impl Segment {
    pub fn new(half_len: i32) -> Self {
        Self { half_len }
    }
}

impl Boundary for Segment {
    fn admits(&self, p: Point) -> bool {
        p.y == 0 && p.x.abs() < self.half_len
    }
}

/// Admits exactly one point.
pub struct SinglePoint(pub Point);

impl Boundary for SinglePoint {
    fn admits(&self, p: Point) -> bool {
        p == self.0
    }
}

/// Counts how many times the wrapped boundary is evaluated.
///
/// Uses `AtomicUsize` so the counter can be read through a shared
/// reference while the boundary is borrowed by code under test.
pub struct CountingBoundary<B> {
    pub inner: B,
    calls: AtomicUsize,
}

impl<B: Boundary> CountingBoundary<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `admits()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }
}

impl<B: Boundary> Boundary for CountingBoundary<B> {
    fn admits(&self, p: Point) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.admits(p)
    }
}
