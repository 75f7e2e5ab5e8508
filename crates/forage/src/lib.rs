//! Forage: lattice random walks absorbed at the edge of a region.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Forage sub-crates. A region is any set of lattice points admitted
//! by a [`Boundary`](types::Boundary) predicate. Forage discovers it by
//! flood fill, solves the expected exit time exactly, and estimates it
//! from a simulated walker population.
//!
//! # Quick start
//!
//! ```rust
//! use forage::prelude::*;
//!
//! let square = |p: Point| p.x.abs() < 2 && p.y.abs() < 2;
//! let region = Region::explore(&square, [Point::ORIGIN], 100).unwrap();
//! let exact = forage::solver::solve(&region, Point::ORIGIN).unwrap();
//! assert!((exact - 4.5).abs() < 1e-9);
//!
//! let mut walkers = WalkerPopulation::builder()
//!     .walkers(500)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! while !walkers.is_absorbed() {
//!     walkers.advance(&square).unwrap();
//! }
//! assert_eq!(walkers.absorbed(), 500);
//! assert!(walkers.estimate().is_defined());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `forage-core` | Points, the boundary trait, errors |
//! | [`space`] | `forage-space` | Region discovery, boundary distances, shapes |
//! | [`solver`] | `forage-solver` | Exact expected hitting times |
//! | [`engine`] | `forage-engine` | Walker populations, estimator, simulation driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice points, the boundary predicate trait, and error types
/// (`forage-core`).
pub use forage_core as types;

/// Region discovery and boundary distances (`forage-space`).
///
/// [`space::Region::explore`] flood-fills a region;
/// [`space::ClosestBoundaryIndex`] maps interior points to their nearest
/// boundary point.
pub use forage_space as space;

/// Exact expected hitting times (`forage-solver`).
pub use forage_solver as solver;

/// Walker populations and the simulation driver (`forage-engine`).
///
/// [`engine::WalkerPopulation`] for step-by-step control,
/// [`engine::Simulation`] for a configured end-to-end run.
pub use forage_engine as engine;

/// Common imports for typical Forage usage.
///
/// ```rust
/// use forage::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use forage_core::{Boundary, Direction, Point};

    // Errors
    pub use forage_core::{RegionError, SolveError, WalkError};

    // Space
    pub use forage_space::{ClosestBoundaryIndex, Region, Shape};

    // Solver
    pub use forage_solver::HittingTimes;

    // Engine
    pub use forage_engine::{
        Estimate, RunSummary, Simulation, SimulationConfig, SimulationError, StepInfo,
        WalkerPopulation,
    };
}
