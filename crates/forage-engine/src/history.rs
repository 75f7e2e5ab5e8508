//! Per-step population history.
//!
//! [`History`] is an append-only sequence of [`StepRecord`]s indexed by
//! step: `records()[t]` describes step `t`, starting with step 0 (the
//! untouched initial population). Rows are never rewritten.

use crate::estimator::Estimate;

/// Rows reserved up front, and the minimum growth increment.
const HISTORY_CHUNK: usize = 256;

/// One row of the history table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    /// Step index `t`.
    pub step: u64,
    /// Walkers still alive after step `t`.
    pub alive: u64,
    /// `alive / N`.
    pub alive_perc: f64,
    /// Walkers absorbed during step `t` (0 for step 0).
    pub dead: u64,
    /// `dead / N`.
    pub dead_perc: f64,
    /// Running estimator output after step `t`.
    pub estimate: Estimate,
}

impl StepRecord {
    /// Values in [`History::COLUMNS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.alive as f64,
            self.alive_perc,
            self.dead as f64,
            self.dead_perc,
            self.estimate.mu,
            self.estimate.sigma,
            self.estimate.lower_bound,
            self.estimate.upper_bound,
        ]
    }
}

/// Append-only step history of a walker population.
#[derive(Clone, Debug)]
pub struct History {
    records: Vec<StepRecord>,
}

impl History {
    /// Column names of the history table, in export order. The step
    /// index is the row key and is not a column.
    pub const COLUMNS: [&'static str; 8] = [
        "alive",
        "alive_perc",
        "dead",
        "dead_perc",
        "mu",
        "sigma",
        "lower_bound",
        "upper_bound",
    ];

    /// A history holding only the step-0 row for a population of `total`.
    pub(crate) fn new(total: u64) -> Self {
        let mut records = Vec::with_capacity(HISTORY_CHUNK);
        records.push(StepRecord {
            step: 0,
            alive: total,
            alive_perc: 1.0,
            dead: 0,
            dead_perc: 0.0,
            estimate: Estimate::UNDEFINED,
        });
        Self { records }
    }

    /// Append the row for the next step.
    pub(crate) fn push(&mut self, record: StepRecord) {
        debug_assert_eq!(record.step, self.records.len() as u64);
        if self.records.len() == self.records.capacity() {
            self.records.reserve(self.records.len().max(HISTORY_CHUNK));
        }
        self.records.push(record);
    }

    /// The row for `step`, if simulated.
    pub fn get(&self, step: u64) -> Option<&StepRecord> {
        usize::try_from(step).ok().and_then(|i| self.records.get(i))
    }

    /// The most recent row.
    pub fn last(&self) -> &StepRecord {
        // Never empty: the step-0 row is pushed at construction.
        &self.records[self.records.len() - 1]
    }

    /// All rows, indexed by step.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Iterate rows in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }

    /// Number of rows (`current_step + 1`).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: the step-0 row exists from construction.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `alive` column.
    pub fn alive(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.alive).collect()
    }

    /// The `dead` column.
    pub fn dead(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.dead).collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
