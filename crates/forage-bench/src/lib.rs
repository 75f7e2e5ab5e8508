//! Benchmark profiles and utilities for the Forage workspace.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking and
//! examples:
//!
//! - [`reference_profile`]: 21x21 open square, 10K walkers
//! - [`stress_profile`]: 101x101 open square, 100K walkers
//! - [`lattice_disk`]: open disk predicate of a given radius

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use forage_core::Point;
use forage_engine::SimulationConfig;
use forage_space::{Shape, Square};

/// Build a reference benchmark profile: 21x21 interior, 10K walkers.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        walkers: 10_000,
        shape: Shape::Square(Square { half_width: 11 }),
        max_points: 1_000,
        max_steps: 10_000,
        seed,
        find_exact: false,
        track_interval: 100,
        ..Default::default()
    }
}

/// Build a stress benchmark profile: 101x101 interior, 100K walkers.
///
/// Same shape family as [`reference_profile`] at roughly 23x the area.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        walkers: 100_000,
        shape: Shape::Square(Square { half_width: 51 }),
        max_points: 20_000,
        max_steps: 100_000,
        seed,
        find_exact: false,
        track_interval: 1_000,
        ..Default::default()
    }
}

/// Open disk of radius `r` around the origin, as a boundary predicate.
pub fn lattice_disk(r: i32) -> impl Fn(Point) -> bool + Copy {
    let r2 = i64::from(r) * i64::from(r);
    move |p: Point| {
        let (x, y) = (i64::from(p.x), i64::from(p.y));
        x * x + y * y < r2
    }
}
