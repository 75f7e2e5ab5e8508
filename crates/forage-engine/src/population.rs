//! A population of independent lattice random walkers.
//!
//! Every walker starts at the same origin. Each [`advance`] moves every
//! alive walker one unit step in a uniformly random direction and
//! removes the walkers whose new position fails the boundary predicate.
//! The population records one [`StepRecord`] per step and feeds the
//! [`Estimator`].
//!
//! [`advance`]: WalkerPopulation::advance

use crate::estimator::{Estimate, Estimator};
use crate::history::{History, StepRecord};
use crate::info::{StepInfo, MAX_PRECISION};
use forage_core::{Boundary, Direction, Point, WalkError};
use forage_space::ClosestBoundaryIndex;
use indexmap::IndexMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Outcome of a single [`WalkerPopulation::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advance {
    /// Walkers absorbed during this step.
    pub dead: u64,
    /// Estimator output after this step.
    pub estimate: Estimate,
}

/// Builder for [`WalkerPopulation`].
#[derive(Debug, Default)]
pub struct PopulationBuilder {
    walkers: usize,
    origin: Point,
    seed: u64,
    index: Option<ClosestBoundaryIndex>,
}

impl PopulationBuilder {
    /// Number of walkers `N`. Must be positive.
    pub fn walkers(mut self, walkers: usize) -> Self {
        self.walkers = walkers;
        self
    }

    /// Starting position shared by every walker. Default: the origin.
    pub fn origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// RNG seed. Identical seeds reproduce identical histories.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Boundary distances used by the estimator's lower bound.
    pub fn boundary_index(mut self, index: ClosestBoundaryIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Build the population at step 0.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidArgument`] if no walkers were requested.
    pub fn build(self) -> Result<WalkerPopulation, WalkError> {
        if self.walkers == 0 {
            return Err(WalkError::InvalidArgument {
                reason: "population must contain at least one walker".into(),
            });
        }
        let population = self.walkers as u64;
        log::debug!(
            "population of {} walkers at {} (seed {})",
            self.walkers,
            self.origin,
            self.seed
        );
        Ok(WalkerPopulation {
            population,
            positions: vec![self.origin; self.walkers],
            step: 0,
            rng: ChaCha8Rng::seed_from_u64(self.seed),
            index: self.index,
            estimator: Estimator::new(),
            history: History::new(population),
        })
    }
}

/// Walkers moving in lockstep until absorbed.
#[derive(Debug)]
pub struct WalkerPopulation {
    population: u64,
    positions: Vec<Point>,
    step: u64,
    rng: ChaCha8Rng,
    index: Option<ClosestBoundaryIndex>,
    estimator: Estimator,
    history: History,
}

impl WalkerPopulation {
    /// Start building a population.
    pub fn builder() -> PopulationBuilder {
        PopulationBuilder::default()
    }

    /// Move every alive walker one step and absorb those that leave the
    /// interior.
    ///
    /// The predicate is evaluated once per alive walker, at its new
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidStep`] if every walker is already
    /// absorbed. The population is left unchanged.
    pub fn advance<B: Boundary + ?Sized>(&mut self, boundary: &B) -> Result<Advance, WalkError> {
        if self.positions.is_empty() {
            return Err(WalkError::InvalidStep { step: self.step });
        }
        self.step += 1;

        let before = self.positions.len();
        for position in &mut self.positions {
            let direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
            *position = position.step(direction);
        }
        self.positions.retain(|p| boundary.admits(*p));

        let alive = self.positions.len() as u64;
        let dead = (before - self.positions.len()) as u64;
        self.estimator.record(self.step, dead);
        let estimate =
            self.estimator
                .estimate(self.step, alive, self.population, self.mean_boundary_distance());

        let total = self.population as f64;
        self.history.push(StepRecord {
            step: self.step,
            alive,
            alive_perc: alive as f64 / total,
            dead,
            dead_perc: dead as f64 / total,
            estimate,
        });
        if alive == 0 {
            log::debug!("all {} walkers absorbed at step {}", self.population, self.step);
        }
        Ok(Advance { dead, estimate })
    }

    /// Mean boundary distance over alive walkers, each weighted once.
    ///
    /// Zero when nothing is alive or no index was supplied; positions
    /// missing from the index contribute zero.
    fn mean_boundary_distance(&self) -> f64 {
        let Some(index) = &self.index else {
            return 0.0;
        };
        if self.positions.is_empty() {
            return 0.0;
        }
        let sum: u64 = self
            .positions
            .iter()
            .filter_map(|p| index.distance(*p))
            .sum();
        sum as f64 / self.positions.len() as f64
    }

    /// Walker count per occupied position, in first-seen order.
    pub fn occupancy(&self) -> IndexMap<Point, usize> {
        let mut counts = IndexMap::new();
        for p in &self.positions {
            *counts.entry(*p).or_insert(0) += 1;
        }
        counts
    }

    /// Positions of the alive walkers.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Whether every walker has been absorbed.
    pub fn is_absorbed(&self) -> bool {
        self.positions.is_empty()
    }

    /// Walkers still alive.
    pub fn alive(&self) -> u64 {
        self.positions.len() as u64
    }

    /// Walkers absorbed so far.
    pub fn absorbed(&self) -> u64 {
        self.estimator.absorbed()
    }

    /// Current step index.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Population size `N`.
    pub fn population(&self) -> u64 {
        self.population
    }

    /// The boundary index, if one was supplied.
    pub fn boundary_index(&self) -> Option<&ClosestBoundaryIndex> {
        self.index.as_ref()
    }

    /// Estimator output after the current step.
    pub fn estimate(&self) -> Estimate {
        self.history.last().estimate
    }

    /// Full step history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Rounded summary of `step` with `precision` decimal places.
    ///
    /// Precision is capped at [`MAX_PRECISION`]; larger values round
    /// to that many places.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::StepOutOfRange`] if `step` has not been
    /// simulated yet.
    pub fn info(&self, step: u64, precision: u32) -> Result<StepInfo, WalkError> {
        let record = self.history.get(step).ok_or(WalkError::StepOutOfRange {
            step,
            current: self.step,
        })?;
        Ok(StepInfo::from_record(record, self.population, precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_space::Region;
    use forage_test_utils::{check_conservation, OpenSquare, SinglePoint};

    fn square() -> OpenSquare {
        OpenSquare::new(2)
    }

    fn population(walkers: usize, seed: u64) -> WalkerPopulation {
        WalkerPopulation::builder()
            .walkers(walkers)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn zero_walkers_rejected() {
        let err = WalkerPopulation::builder().build().unwrap_err();
        assert!(matches!(err, WalkError::InvalidArgument { .. }));
    }

    #[test]
    fn step_zero_is_recorded() {
        let pop = population(5, 0);
        assert_eq!(pop.step(), 0);
        assert_eq!(pop.alive(), 5);
        assert_eq!(pop.history().len(), 1);
        let info = pop.info(0, 3).unwrap();
        assert_eq!((info.alive, info.dead, info.total), (5, 0, 5));
        assert_eq!(pop.occupancy().get(&Point::ORIGIN), Some(&5));
    }

    #[test]
    fn square_population_is_fully_absorbed() {
        let sq = square();
        let mut pop = population(1000, 7);
        while !pop.is_absorbed() {
            pop.advance(&sq).unwrap();
            assert!(pop.step() < 10_000, "population never absorbed");
        }
        let h = pop.history();
        check_conservation(1000, &h.alive(), &h.dead()).unwrap();
        assert_eq!(pop.absorbed(), 1000);
        // Center of the 3x3 square exits in 4.5 steps on average.
        let mu = pop.estimate().mu;
        assert!((mu - 4.5).abs() < 0.5, "mu = {mu}");
        // Nothing alive: both bounds collapse onto the sample mean.
        assert_eq!(pop.estimate().upper_bound, mu);
        assert_eq!(pop.estimate().lower_bound, mu);
    }

    #[test]
    fn advancing_absorbed_population_fails() {
        let sp = SinglePoint(Point::ORIGIN);
        let mut pop = population(3, 0);
        let adv = pop.advance(&sp).unwrap();
        assert_eq!(adv.dead, 3);
        assert!(pop.is_absorbed());
        assert_eq!(pop.advance(&sp), Err(WalkError::InvalidStep { step: 1 }));
        assert_eq!(pop.step(), 1);
        assert_eq!(pop.history().len(), 2);
    }

    #[test]
    fn single_walker_dies_exactly_once() {
        let sq = square();
        let mut pop = population(1, 42);
        while !pop.is_absorbed() {
            pop.advance(&sq).unwrap();
        }
        let dead: u64 = pop.history().dead().iter().sum();
        assert_eq!(dead, 1);
        assert!(!pop.estimate().is_defined());
    }

    #[test]
    fn estimate_defined_from_ten_absorbed() {
        let sp = SinglePoint(Point::ORIGIN);
        let mut nine = population(9, 0);
        assert!(!nine.advance(&sp).unwrap().estimate.is_defined());
        let mut ten = population(10, 0);
        let est = ten.advance(&sp).unwrap().estimate;
        assert!(est.is_defined());
        assert_eq!(est.mu, 1.0);
        assert_eq!(est.sigma, 0.0);
    }

    #[test]
    fn same_seed_same_history() {
        let sq = OpenSquare::new(4);
        let run = |seed| {
            let mut pop = population(200, seed);
            while !pop.is_absorbed() {
                pop.advance(&sq).unwrap();
            }
            pop.history().dead()
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn info_beyond_current_step_fails() {
        let mut pop = population(10, 0);
        pop.advance(&OpenSquare::new(3)).unwrap();
        assert_eq!(
            pop.info(2, 3),
            Err(WalkError::StepOutOfRange {
                step: 2,
                current: 1
            })
        );
        assert!(pop.info(1, 3).is_ok());
    }

    #[test]
    fn info_precision_is_capped() {
        let sp = SinglePoint(Point::ORIGIN);
        let mut pop = population(30, 0);
        pop.advance(&sp).unwrap();
        let capped = pop.info(1, MAX_PRECISION).unwrap();
        assert!(capped.mu.is_finite());
        assert_eq!(pop.info(1, 99).unwrap(), capped);
    }

    #[test]
    fn occupancy_counts_alive_walkers() {
        let mut pop = population(50, 1);
        pop.advance(&OpenSquare::new(5)).unwrap();
        let occ = pop.occupancy();
        assert_eq!(occ.values().sum::<usize>() as u64, pop.alive());
        assert!(occ.keys().all(|p| p.is_adjacent(Point::ORIGIN)));
    }

    #[test]
    fn lower_bound_uses_boundary_distance() {
        let sq = OpenSquare::new(6);
        let region = Region::explore(&sq, [Point::ORIGIN], 1000).unwrap();
        let index = ClosestBoundaryIndex::build(&region).unwrap();
        let mut with = WalkerPopulation::builder()
            .walkers(400)
            .seed(9)
            .boundary_index(index)
            .build()
            .unwrap();
        let mut without = population(400, 9);
        let mut raised = 0;
        while !with.is_absorbed() {
            let a = with.advance(&sq).unwrap().estimate;
            let b = without.advance(&sq).unwrap().estimate;
            assert_eq!(with.positions(), without.positions());
            if !a.is_defined() {
                continue;
            }
            assert_eq!(a.mu, b.mu);
            assert_eq!(a.upper_bound, b.upper_bound);
            assert!(a.lower_bound >= b.lower_bound);
            if a.lower_bound > b.lower_bound {
                raised += 1;
            }
        }
        assert!(raised > 0);
    }
}
