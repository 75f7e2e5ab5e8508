//! Core types and traits for the Forage random-walk workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by every other Forage crate:
//! lattice points, unit moves, the [`Boundary`] predicate capability,
//! and the error types for each subsystem.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod point;

pub use boundary::Boundary;
pub use error::{RegionError, SolveError, WalkError};
pub use point::{Direction, Point};
