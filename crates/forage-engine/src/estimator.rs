//! Censored-data estimator of the mean absorption time.
//!
//! After step `t` the absorption times of the `D` walkers already
//! absorbed are known exactly; the `A` walkers still alive are censored
//! at `t`. [`Estimator`] keeps the running sums needed to report the
//! sample mean, its standard error, and a bracket that accounts for the
//! censored walkers, without rescanning the history.

/// Statistics stay undefined (NaN) until this many walkers are absorbed.
pub const MIN_ABSORBED: u64 = 10;

/// Estimator output for one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// Mean absorption time of the absorbed walkers.
    pub mu: f64,
    /// Standard error of `mu`.
    pub sigma: f64,
    /// Lower bound on the population mean absorption time.
    pub lower_bound: f64,
    /// Upper bound on the population mean absorption time.
    pub upper_bound: f64,
}

impl Estimate {
    /// All four statistics NaN.
    pub const UNDEFINED: Estimate = Estimate {
        mu: f64::NAN,
        sigma: f64::NAN,
        lower_bound: f64::NAN,
        upper_bound: f64::NAN,
    };

    /// Whether enough walkers were absorbed for the statistics to exist.
    pub fn is_defined(&self) -> bool {
        !self.mu.is_nan()
    }
}

impl Default for Estimate {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

/// Running sums over `(step, dead)` observations.
///
/// Sums are kept as exact integers: `D = Σ d`, `S1 = Σ d·t`,
/// `S2 = Σ d·t²`. The spread `Σ d·(t - mu)²` is then `(D·S2 - S1²) / D`,
/// which is non-negative and free of cancellation.
#[derive(Clone, Debug, Default)]
pub struct Estimator {
    absorbed: u64,
    sum_t: u128,
    sum_t2: u128,
}

impl Estimator {
    /// A fresh estimator with no observations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `dead` absorptions at `step`.
    pub fn record(&mut self, step: u64, dead: u64) {
        if dead == 0 {
            return;
        }
        let t = u128::from(step);
        let d = u128::from(dead);
        self.absorbed += dead;
        self.sum_t += d * t;
        self.sum_t2 += d * t * t;
    }

    /// Total walkers absorbed so far (`D`).
    pub fn absorbed(&self) -> u64 {
        self.absorbed
    }

    /// Mean absorption time, or `None` below [`MIN_ABSORBED`].
    pub fn mean(&self) -> Option<f64> {
        (self.absorbed >= MIN_ABSORBED).then(|| self.sum_t as f64 / self.absorbed as f64)
    }

    /// Statistics after `step`, with `alive` walkers remaining out of
    /// `population`.
    ///
    /// `avg_distance` is the mean boundary distance of the alive walkers;
    /// it only enters the lower bound.
    ///
    /// - `mu = S1 / D`
    /// - `sigma = sqrt(Σ d·(t - mu)² / (D·(D - 1)))`
    /// - `upper = mu + step·(A / D)`
    /// - `lower = mu + (step + avg_distance - mu)·(A / N)`
    pub fn estimate(&self, step: u64, alive: u64, population: u64, avg_distance: f64) -> Estimate {
        let Some(mu) = self.mean() else {
            return Estimate::UNDEFINED;
        };
        let d = u128::from(self.absorbed);
        // Cauchy-Schwarz: D·S2 >= S1², so this cannot underflow.
        let spread = d * self.sum_t2 - self.sum_t * self.sum_t;
        let n = self.absorbed as f64;
        let sum_sq = spread as f64 / n;
        let sigma = (sum_sq / (n * (n - 1.0))).sqrt();

        let step = step as f64;
        let alive = alive as f64;
        let upper_bound = mu + step * (alive / n);
        let lower_bound = mu + (step + avg_distance - mu) * (alive / population as f64);

        Estimate {
            mu,
            sigma,
            lower_bound,
            upper_bound,
        }
    }
}
