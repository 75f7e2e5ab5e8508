//! Walker population simulation for Forage.
//!
//! Provides [`WalkerPopulation`], which advances independent lattice
//! random walkers until they leave a region, the censored-data
//! [`Estimator`] of their mean absorption time, and the [`Simulation`]
//! driver that combines region discovery, the exact solver, and the
//! population into one run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod estimator;
pub mod history;
pub mod info;
pub mod population;
pub mod simulation;
pub mod viewport;

pub use config::{ConfigError, SimulationConfig};
pub use estimator::{Estimate, Estimator, MIN_ABSORBED};
pub use history::{History, StepRecord};
pub use info::{StepInfo, MAX_PRECISION};
pub use population::{Advance, PopulationBuilder, WalkerPopulation};
pub use simulation::{RunSummary, Simulation, SimulationError};
pub use viewport::Viewport;
