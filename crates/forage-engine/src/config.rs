//! Simulation configuration and validation.

use forage_core::Point;
use forage_space::Shape;
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The population has no walkers.
    NoWalkers,
    /// The flood-fill iteration budget is zero.
    ZeroExplorationBudget,
    /// The progress logging interval is zero.
    ZeroTrackInterval,
    /// The boundary shape has invalid parameters.
    InvalidShape {
        /// Description of the invalid parameter.
        reason: String,
    },
    /// A viewport has zero rows or columns.
    EmptyViewport {
        /// Requested rows.
        height: usize,
        /// Requested columns.
        width: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWalkers => write!(f, "walkers must be at least 1"),
            Self::ZeroExplorationBudget => write!(f, "max_points must be at least 1"),
            Self::ZeroTrackInterval => write!(f, "track_interval must be at least 1"),
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
            Self::EmptyViewport { height, width } => {
                write!(f, "viewport {height}x{width} has no cells")
            }
        }
    }
}

impl Error for ConfigError {}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Population size `N`. Default: 1000.
    pub walkers: usize,
    /// Starting position of every walker, also the exploration seed.
    pub origin: Point,
    /// Boundary predicate. Default: [`Shape::Square`].
    pub shape: Shape,
    /// Flood-fill iteration budget. Default: 1000.
    pub max_points: usize,
    /// Maximum number of steps [`run`](crate::Simulation::run) advances.
    /// Default: 1000.
    pub max_steps: u64,
    /// RNG seed for deterministic walks.
    pub seed: u64,
    /// Whether to compute the exact hitting time. Default: true.
    pub find_exact: bool,
    /// Progress is logged every `track_interval` steps. Default: 10.
    pub track_interval: u64,
    /// Decimal places in logged summaries. Default: 3.
    pub precision: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            walkers: 1000,
            origin: Point::ORIGIN,
            shape: Shape::default(),
            max_points: 1000,
            max_steps: 1000,
            seed: 0,
            find_exact: true,
            track_interval: 10,
            precision: 3,
        }
    }
}

impl SimulationConfig {
    /// Check all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walkers == 0 {
            return Err(ConfigError::NoWalkers);
        }
        if self.max_points == 0 {
            return Err(ConfigError::ZeroExplorationBudget);
        }
        if self.track_interval == 0 {
            return Err(ConfigError::ZeroTrackInterval);
        }
        self.shape
            .validate()
            .map_err(|reason| ConfigError::InvalidShape { reason })
    }
}
