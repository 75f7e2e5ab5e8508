//! Rounded per-step summaries for reporting.

use crate::history::StepRecord;
use std::fmt;

/// Largest supported rounding precision. `f64` carries about 15
/// significant decimal digits, so larger requests round to this.
pub const MAX_PRECISION: u32 = 15;

/// Summary of one simulated step, with ratios and statistics rounded to
/// a fixed number of decimal places (at most [`MAX_PRECISION`]).
///
/// Undefined statistics stay NaN after rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepInfo {
    /// Step index.
    pub step: u64,
    /// Population size `N`.
    pub total: u64,
    /// Walkers alive after the step.
    pub alive: u64,
    /// `alive / N`, rounded.
    pub alive_perc: f64,
    /// Walkers absorbed during the step.
    pub dead: u64,
    /// `dead / N`, rounded.
    pub dead_perc: f64,
    /// Mean absorption time, rounded.
    pub mu: f64,
    /// Standard error of `mu`, rounded.
    pub sigma: f64,
    /// Lower bound, rounded.
    pub lower_bound: f64,
    /// Upper bound, rounded.
    pub upper_bound: f64,
}

impl StepInfo {
    pub(crate) fn from_record(record: &StepRecord, total: u64, precision: u32) -> Self {
        let r = |v: f64| round_to(v, precision);
        Self {
            step: record.step,
            total,
            alive: record.alive,
            alive_perc: r(record.alive_perc),
            dead: record.dead,
            dead_perc: r(record.dead_perc),
            mu: r(record.estimate.mu),
            sigma: r(record.estimate.sigma),
            lower_bound: r(record.estimate.lower_bound),
            upper_bound: r(record.estimate.upper_bound),
        }
    }

    /// Tab-separated column names matching the [`Display`](fmt::Display)
    /// output.
    pub fn header() -> &'static str {
        "step\ttotal\talive\talive_perc\tdead\tdead_perc\tmu\tsigma\tlower_bound\tupper_bound"
    }
}

impl fmt::Display for StepInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.step,
            self.total,
            self.alive,
            self.alive_perc,
            self.dead,
            self.dead_perc,
            self.mu,
            self.sigma,
            self.lower_bound,
            self.upper_bound
        )
    }
}

/// Round half away from zero to `digits` decimal places, capped at
/// [`MAX_PRECISION`].
fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits.min(MAX_PRECISION) as i32);
    (value * scale).round() / scale
}
