//! Error types for the Forage workspace.
//!
//! Organized by subsystem: region discovery, the exact solver, and the
//! walker population. Every failure is local and synchronous; nothing
//! is retried internally and no partially built value is returned.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Errors from region discovery and boundary indexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// The flood fill spent its whole iteration budget with points
    /// still waiting to be explored. The admissible region is unbounded
    /// or larger than the budget allows; retry with a larger budget.
    RegionTooLarge {
        /// The exhausted iteration budget.
        max_iter: usize,
        /// Number of frontier points left unexplored.
        unexplored: usize,
    },
    /// The region has no interior or no boundary points, so no closest
    /// boundary point is defined.
    EmptyRegion {
        /// Number of interior points.
        interior: usize,
        /// Number of boundary points.
        boundary: usize,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegionTooLarge {
                max_iter,
                unexplored,
            } => write!(
                f,
                "region exploration exhausted {max_iter} iterations with {unexplored} points unexplored"
            ),
            Self::EmptyRegion { interior, boundary } => write!(
                f,
                "region is degenerate: {interior} interior and {boundary} boundary points"
            ),
        }
    }
}

impl Error for RegionError {}

/// Errors from the exact hitting-time solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The requested start point is not in the region interior.
    PointNotInRegion {
        /// The offending start point.
        point: Point,
    },
    /// `I - M` could not be inverted.
    SingularMatrix {
        /// Dimension of the linear system.
        size: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointNotInRegion { point } => {
                write!(f, "start point {point} is not in the region interior")
            }
            Self::SingularMatrix { size } => {
                write!(f, "hitting-time system of size {size} is singular")
            }
        }
    }
}

impl Error for SolveError {}

/// Errors from the walker population and its history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// A construction parameter was rejected.
    InvalidArgument {
        /// What was wrong.
        reason: String,
    },
    /// `advance` was called after every walker had been absorbed.
    InvalidStep {
        /// The step at which the population terminated.
        step: u64,
    },
    /// A history query named a step that has not been simulated.
    StepOutOfRange {
        /// The requested step.
        step: u64,
        /// The most recent simulated step.
        current: u64,
    },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::InvalidStep { step } => {
                write!(f, "population fully absorbed at step {step}, cannot advance")
            }
            Self::StepOutOfRange { step, current } => {
                write!(f, "step {step} outside simulated range [0, {current}]")
            }
        }
    }
}

impl Error for WalkError {}
