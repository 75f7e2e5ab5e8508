//! Absorbing-chain transition matrix over a region interior.

use forage_space::Region;
use nalgebra::DMatrix;

/// Probability of each of the four unit moves.
pub const MOVE_PROBABILITY: f64 = 0.25;

/// Sub-stochastic transition matrix of the symmetric 4-neighbour walk,
/// restricted to a region interior.
///
/// Rows and columns follow [`Region::interior_rank`]. `M[p][q] = 0.25`
/// when `q` is an interior neighbour of `p`, else `0`. Mass toward
/// non-interior neighbours is left out rather than renormalized; that
/// missing mass is the per-step absorption probability.
#[derive(Clone, Debug)]
pub struct TransitionMatrix {
    m: DMatrix<f64>,
}

impl TransitionMatrix {
    /// Build `M` for `region`.
    pub fn build(region: &Region) -> Self {
        let n = region.interior().len();
        let mut m = DMatrix::<f64>::zeros(n, n);
        for (row, p) in region.interior().iter().enumerate() {
            for q in p.neighbours() {
                if let Some(col) = region.interior_rank(q) {
                    m[(row, col)] = MOVE_PROBABILITY;
                }
            }
        }
        Self { m }
    }

    /// Dimension of the matrix (number of interior points).
    pub fn size(&self) -> usize {
        self.m.nrows()
    }

    /// Transition probability from interior rank `from` to rank `to`.
    pub fn probability(&self, from: usize, to: usize) -> f64 {
        self.m[(from, to)]
    }

    /// One-step absorption probability from interior rank `from`.
    pub fn exit_probability(&self, from: usize) -> f64 {
        1.0 - self.m.row(from).sum()
    }

    /// The system matrix `I - M`.
    pub fn system(&self) -> DMatrix<f64> {
        let n = self.size();
        DMatrix::<f64>::identity(n, n) - &self.m
    }

    /// The raw matrix `M`.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.m
    }
}
