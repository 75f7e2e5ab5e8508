//! Exact expected hitting times for the symmetric lattice random walk.
//!
//! A walker on a region interior moves to each of its four neighbours
//! with probability 1/4 and is absorbed the moment it leaves the
//! interior. With `M` the interior-restricted transition matrix
//! ([`TransitionMatrix`]), the expected hitting times satisfy
//! `h = 1 + M·h`, i.e. `(I - M)·h = 1`.
//!
//! [`HittingTimes::solve`] solves the system once for every interior
//! point; [`solve`] answers a single starting point.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hitting;
pub mod transition;

pub use hitting::{fundamental_matrix, solve, HittingTimes};
pub use transition::{TransitionMatrix, MOVE_PROBABILITY};
