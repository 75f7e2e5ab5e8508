//! Region discovery for Forage random walks.
//!
//! Given a [`Boundary`](forage_core::Boundary) predicate and seed points,
//! [`Region::explore`] flood-fills the admissible interior and records the
//! boundary points that surround it. [`ClosestBoundaryIndex`] then maps
//! every interior point to its nearest boundary point.
//!
//! # Shapes
//!
//! - [`Square`]: open square centered on the origin (bounded)
//! - [`HalfPlane`]: open half-plane (unbounded; exploration fails)
//! - [`Ellipse`]: open axis-aligned ellipse (bounded)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod closest;
pub mod region;
pub mod shape;

pub use closest::{ClosestBoundary, ClosestBoundaryIndex};
pub use region::Region;
pub use shape::{Ellipse, HalfPlane, Shape, Square};
