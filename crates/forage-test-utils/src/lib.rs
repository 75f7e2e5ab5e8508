//! Test utilities for Forage development.
//!
//! Provides boundary fixtures ([`OpenSquare`], [`Segment`],
//! [`SinglePoint`], [`CountingBoundary`]) and invariant checks shared by
//! the region, solver, and population test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingBoundary, OpenSquare, Segment, SinglePoint};

use forage_core::{Boundary, Point};
use std::collections::HashSet;

/// Check the structural invariants of a discovered region.
///
/// - interior and boundary are disjoint;
/// - every boundary point fails the predicate and touches the interior;
/// - no admitted neighbour of an interior point is missing from the interior;
/// - every rejected neighbour of an interior point is a boundary point.
///
/// Returns a description of the first violation.
pub fn check_region<B: Boundary + ?Sized>(
    boundary: &B,
    interior: &[Point],
    rejected: &[Point],
) -> Result<(), String> {
    let inside: HashSet<Point> = interior.iter().copied().collect();
    let outside: HashSet<Point> = rejected.iter().copied().collect();

    if let Some(p) = inside.intersection(&outside).next() {
        return Err(format!("{p} is both interior and boundary"));
    }
    for q in &outside {
        if boundary.admits(*q) {
            return Err(format!("boundary point {q} satisfies the predicate"));
        }
        if !q.neighbours().iter().any(|n| inside.contains(n)) {
            return Err(format!("boundary point {q} has no interior neighbour"));
        }
    }
    for p in &inside {
        for n in p.neighbours() {
            if inside.contains(&n) {
                continue;
            }
            if boundary.admits(n) {
                return Err(format!("{n} next to interior {p} is admitted but not interior"));
            }
            if !outside.contains(&n) {
                return Err(format!("{n} next to interior {p} is rejected but not boundary"));
            }
        }
    }
    Ok(())
}

/// Check the population conservation law over a history.
///
/// `alive[0] == total`, `alive` non-increasing, and
/// `Σ_{s≤t} dead[s] + alive[t] == total` for every `t`.
pub fn check_conservation(total: u64, alive: &[u64], dead: &[u64]) -> Result<(), String> {
    if alive.len() != dead.len() {
        return Err(format!(
            "history length mismatch: {} alive rows, {} dead rows",
            alive.len(),
            dead.len()
        ));
    }
    if alive.first() != Some(&total) {
        return Err(format!("alive[0] = {:?}, expected {total}", alive.first()));
    }
    let mut absorbed = 0u64;
    for t in 0..alive.len() {
        absorbed += dead[t];
        if t > 0 && alive[t] > alive[t - 1] {
            return Err(format!("alive increased at step {t}"));
        }
        if absorbed + alive[t] != total {
            return Err(format!(
                "conservation broken at step {t}: {absorbed} absorbed + {} alive != {total}",
                alive[t]
            ));
        }
    }
    Ok(())
}
