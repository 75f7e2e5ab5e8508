//! End-to-end simulation driver.
//!
//! [`Simulation`] wires the pieces together: it explores the region
//! around the configured origin, indexes boundary distances, optionally
//! solves for the exact hitting time, and advances a walker population
//! until it is absorbed or the step cap is reached.

use crate::config::{ConfigError, SimulationConfig};
use crate::info::StepInfo;
use crate::population::{Advance, WalkerPopulation};
use forage_core::{RegionError, SolveError, WalkError};
use forage_space::{ClosestBoundaryIndex, Region};
use std::error::Error;
use std::fmt;

// ── SimulationError ────────────────────────────────────────────────

/// Errors from constructing or running a [`Simulation`].
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// Region discovery failed.
    Region(RegionError),
    /// The exact solver failed.
    Solve(SolveError),
    /// The walker population rejected an operation.
    Walk(WalkError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Region(e) => write!(f, "region: {e}"),
            Self::Solve(e) => write!(f, "solver: {e}"),
            Self::Walk(e) => write!(f, "walk: {e}"),
        }
    }
}

impl Error for SimulationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Region(e) => Some(e),
            Self::Solve(e) => Some(e),
            Self::Walk(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RegionError> for SimulationError {
    fn from(e: RegionError) -> Self {
        Self::Region(e)
    }
}

impl From<SolveError> for SimulationError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

impl From<WalkError> for SimulationError {
    fn from(e: WalkError) -> Self {
        Self::Walk(e)
    }
}

// ── RunSummary ─────────────────────────────────────────────────────

/// Result of [`Simulation::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps simulated.
    pub steps: u64,
    /// Walkers absorbed by the last step.
    pub absorbed: u64,
    /// Exact expected hitting time from the origin, if requested.
    pub exact: Option<f64>,
    /// Rounded summary of the last step.
    pub final_info: StepInfo,
}

// ── Simulation ─────────────────────────────────────────────────────

/// A configured region plus the walker population moving in it.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    region: Region,
    population: WalkerPopulation,
    exact: Option<f64>,
}

impl Simulation {
    /// Validate `config`, explore the region from its origin, and place
    /// the population at step 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Config`] for an invalid configuration
    /// and [`SimulationError::Region`] if the region cannot be explored
    /// within `max_points` or has no interior.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        log::info!(
            "exploring {} region from {} (budget {})",
            config.shape.name(),
            config.origin,
            config.max_points
        );
        let region = Region::explore(&config.shape, [config.origin], config.max_points)?;
        let index = ClosestBoundaryIndex::build(&region)?;
        log::info!(
            "region has {} interior and {} boundary points",
            region.interior().len(),
            region.boundary().len()
        );
        let population = WalkerPopulation::builder()
            .walkers(config.walkers)
            .origin(config.origin)
            .seed(config.seed)
            .boundary_index(index)
            .build()?;
        Ok(Self {
            config,
            region,
            population,
            exact: None,
        })
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The explored region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The walker population.
    pub fn population(&self) -> &WalkerPopulation {
        &self.population
    }

    /// Exact expected hitting time from the origin, or `None` when
    /// `find_exact` is off. Solved once and cached.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Solve`] if the linear system fails.
    pub fn exact_solution(&mut self) -> Result<Option<f64>, SimulationError> {
        if !self.config.find_exact {
            return Ok(None);
        }
        if let Some(h) = self.exact {
            return Ok(Some(h));
        }
        let h = forage_solver::solve(&self.region, self.config.origin)?;
        log::info!("exact hitting time from {}: {h}", self.config.origin);
        self.exact = Some(h);
        Ok(Some(h))
    }

    /// Whether the population is absorbed or the step cap is reached.
    pub fn is_finished(&self) -> bool {
        self.population.is_absorbed() || self.population.step() >= self.config.max_steps
    }

    /// Advance the population by one step.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Walk`] if the population is already
    /// absorbed.
    pub fn step(&mut self) -> Result<Advance, SimulationError> {
        Ok(self.population.advance(&self.config.shape)?)
    }

    /// Advance until finished, logging a summary every
    /// `track_interval` steps and at the end.
    ///
    /// # Errors
    ///
    /// Propagates solver and population errors.
    pub fn run(&mut self) -> Result<RunSummary, SimulationError> {
        let exact = self.exact_solution()?;
        let precision = self.config.precision;
        log::info!("{}", StepInfo::header());
        while !self.is_finished() {
            self.step()?;
            let step = self.population.step();
            if step % self.config.track_interval == 0 || self.is_finished() {
                log::info!("{}", self.population.info(step, precision)?);
            }
        }

        let steps = self.population.step();
        if !self.population.is_absorbed() {
            log::warn!(
                "step cap {} reached with {} walkers alive",
                self.config.max_steps,
                self.population.alive()
            );
        }
        Ok(RunSummary {
            steps,
            absorbed: self.population.absorbed(),
            exact,
            final_info: self.population.info(steps, precision)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_space::{HalfPlane, Shape};

    #[test]
    fn default_run_absorbs_everyone() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        let summary = sim.run().unwrap();
        assert_eq!(summary.absorbed, 1000);
        assert_eq!(summary.final_info.alive, 0);
        assert_eq!(summary.steps, sim.population().step());
        let exact = summary.exact.unwrap();
        assert!((exact - 4.5).abs() < 1e-9);
        assert!((summary.final_info.mu - exact).abs() < 0.5);
    }

    #[test]
    fn exact_solution_is_cached_and_optional() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        let a = sim.exact_solution().unwrap();
        assert_eq!(sim.exact_solution().unwrap(), a);

        let mut off = Simulation::new(SimulationConfig {
            find_exact: false,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(off.exact_solution().unwrap(), None);
    }

    #[test]
    fn unbounded_shape_fails_exploration() {
        let err = Simulation::new(SimulationConfig {
            shape: Shape::HalfPlane(HalfPlane::default()),
            max_points: 200,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Region(RegionError::RegionTooLarge { max_iter: 200, .. })
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_config_rejected() {
        let err = Simulation::new(SimulationConfig {
            walkers: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, SimulationError::Config(ConfigError::NoWalkers));
    }

    #[test]
    fn step_cap_stops_run() {
        let mut sim = Simulation::new(SimulationConfig {
            max_steps: 1,
            ..Default::default()
        })
        .unwrap();
        let summary = sim.run().unwrap();
        assert_eq!(summary.steps, 1);
        assert_eq!(summary.final_info.step, 1);
        assert!(summary.final_info.alive > 0);
    }
}
