//! Property tests: region discovery invariants over random bounded shapes.

use forage_core::{Boundary, Point, RegionError};
use forage_space::{ClosestBoundaryIndex, Ellipse, Region, Shape};
use forage_test_utils::{check_region, CountingBoundary, OpenSquare};
use proptest::prelude::*;

/// Axis-aligned open rectangle `x0 < x < x1 && y0 < y < y1`.
struct Rect {
    x0: i32,
    x1: i32,
    y0: i32,
    y1: i32,
}

impl Boundary for Rect {
    fn admits(&self, p: Point) -> bool {
        self.x0 < p.x && p.x < self.x1 && self.y0 < p.y && p.y < self.y1
    }
}

/// Open disk of squared radius `r2` around `(cx, cy)`.
struct Disk {
    cx: i32,
    cy: i32,
    r2: i32,
}

impl Boundary for Disk {
    fn admits(&self, p: Point) -> bool {
        let dx = p.x - self.cx;
        let dy = p.y - self.cy;
        dx * dx + dy * dy < self.r2
    }
}

fn explore_and_check<B: Boundary>(shape: &B, seed: Point) -> Result<Region, TestCaseError> {
    let region = Region::explore(shape, [seed], 10_000)
        .map_err(|e| TestCaseError::fail(format!("exploration failed: {e}")))?;
    let interior: Vec<Point> = region.interior().iter().copied().collect();
    let boundary: Vec<Point> = region.boundary().iter().copied().collect();
    check_region(shape, &interior, &boundary).map_err(TestCaseError::fail)?;
    Ok(region)
}

proptest! {
    #[test]
    fn rectangle_invariants(
        x0 in -20i32..0, x1 in 1i32..20,
        y0 in -20i32..0, y1 in 1i32..20,
    ) {
        let rect = Rect { x0, x1, y0, y1 };
        let region = explore_and_check(&rect, Point::ORIGIN)?;
        let expected = ((x1 - x0 - 1) * (y1 - y0 - 1)) as usize;
        prop_assert_eq!(region.interior().len(), expected);
        let perimeter = 2 * ((x1 - x0 - 1) + (y1 - y0 - 1)) as usize;
        prop_assert_eq!(region.boundary().len(), perimeter);
    }

    #[test]
    fn disk_invariants(cx in -3i32..3, cy in -3i32..3, r2 in 1i32..150) {
        let disk = Disk { cx, cy, r2 };
        let seed = Point::new(cx, cy);
        explore_and_check(&disk, seed)?;
    }

    #[test]
    fn ellipse_invariants(a in 1.0f64..8.0, b in 1.0f64..8.0) {
        let shape = Shape::Ellipse(Ellipse { center: (0.25, 0.25), semi_x: a, semi_y: b });
        explore_and_check(&shape, Point::ORIGIN)?;
    }

    #[test]
    fn closest_distance_is_exact_minimum(half in 2i32..8) {
        let square = OpenSquare::new(half);
        let region = explore_and_check(&square, Point::ORIGIN)?;
        let index = ClosestBoundaryIndex::build(&region)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        for p in region.interior() {
            let min = region.boundary().iter().map(|q| p.step_distance(*q)).min();
            prop_assert_eq!(index.distance(*p), min);
        }
    }

    #[test]
    fn exploration_order_independent_of_seed_choice(half in 2i32..7, sx in -5i32..5, sy in -5i32..5) {
        let square = OpenSquare::new(half);
        let seed = Point::new(sx.clamp(-(half - 1), half - 1), sy.clamp(-(half - 1), half - 1));
        let a = explore_and_check(&square, Point::ORIGIN)?;
        let b = explore_and_check(&square, seed)?;
        let mut ai: Vec<Point> = a.interior().iter().copied().collect();
        let mut bi: Vec<Point> = b.interior().iter().copied().collect();
        ai.sort();
        bi.sort();
        prop_assert_eq!(ai, bi);
        let mut ab: Vec<Point> = a.boundary().iter().copied().collect();
        let mut bb: Vec<Point> = b.boundary().iter().copied().collect();
        ab.sort();
        bb.sort();
        prop_assert_eq!(ab, bb);
    }
}

#[test]
fn open_square_interior_size() {
    for half in 1..6 {
        let square = OpenSquare::new(half);
        let region = Region::explore(&square, [Point::ORIGIN], 1000).unwrap();
        assert_eq!(region.interior().len(), square.interior_len());
    }
}

#[test]
fn each_expansion_evaluates_at_most_four_points() {
    let square = CountingBoundary::new(OpenSquare::new(3));
    let region = Region::explore(&square, [Point::ORIGIN], 1000).unwrap();
    assert!(square.calls() <= 4 * region.iterations());
    assert_eq!(region.iterations(), region.interior().len());
}

#[test]
fn too_small_budget_reports_unexplored() {
    let square = OpenSquare::new(10);
    match Region::explore(&square, [Point::ORIGIN], 5) {
        Err(RegionError::RegionTooLarge {
            max_iter,
            unexplored,
        }) => {
            assert_eq!(max_iter, 5);
            assert!(unexplored > 0);
        }
        other => panic!("expected RegionTooLarge, got {other:?}"),
    }
}
