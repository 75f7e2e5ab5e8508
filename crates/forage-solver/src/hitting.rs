//! Expected hitting times from the linear system `(I - M)·h = 1`.

use crate::transition::TransitionMatrix;
use forage_core::{Point, SolveError};
use forage_space::Region;
use indexmap::IndexSet;
use nalgebra::{DMatrix, DVector};

/// Expected number of steps to leave the interior, for every interior
/// starting point.
///
/// `h[p]` counts the step that exits, so a point whose four neighbours
/// are all outside has `h = 1`.
#[derive(Clone, Debug)]
pub struct HittingTimes {
    points: IndexSet<Point>,
    times: DVector<f64>,
}

impl HittingTimes {
    /// Solve `(I - M)·h = 1` for `region` by LU decomposition.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::SingularMatrix`] if the system cannot be
    /// solved or the solution is not finite.
    pub fn solve(region: &Region) -> Result<Self, SolveError> {
        let transition = TransitionMatrix::build(region);
        let n = transition.size();
        log::debug!("solving hitting-time system of size {n}");
        if n == 0 {
            return Ok(Self {
                points: IndexSet::new(),
                times: DVector::zeros(0),
            });
        }

        let times = solve_system(transition.system())?;
        Ok(Self {
            points: region.interior().clone(),
            times,
        })
    }

    /// Expected hitting time from `start`, or `None` if `start` is not
    /// an interior point.
    pub fn get(&self, start: Point) -> Option<f64> {
        self.points.get_index_of(&start).map(|i| self.times[i])
    }

    /// `(point, expected hitting time)` pairs in interior order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.points.iter().copied().zip(self.times.iter().copied())
    }

    /// Number of interior points solved for.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the region had no interior points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Expected number of steps for a walk started at `start` to leave
/// the interior of `region`.
///
/// # Errors
///
/// Returns [`SolveError::PointNotInRegion`] if `start` is not interior,
/// or [`SolveError::SingularMatrix`] if the system cannot be solved.
///
/// # Examples
///
/// ```
/// use forage_core::Point;
/// use forage_space::Region;
///
/// let square = |p: Point| p.x.abs() < 2 && p.y.abs() < 2;
/// let region = Region::explore(&square, [Point::ORIGIN], 100).unwrap();
/// let h = forage_solver::solve(&region, Point::ORIGIN).unwrap();
/// assert!((h - 4.5).abs() < 1e-9);
/// ```
pub fn solve(region: &Region, start: Point) -> Result<f64, SolveError> {
    if !region.contains(start) {
        return Err(SolveError::PointNotInRegion { point: start });
    }
    let times = HittingTimes::solve(region)?;
    times
        .get(start)
        .ok_or(SolveError::PointNotInRegion { point: start })
}

/// The fundamental matrix `N = (I - M)⁻¹` of the absorbing chain.
///
/// `N[p][q]` is the expected number of visits to `q` before absorption
/// for a walk started at `p`; the row sum of `N` at `p` equals the
/// expected hitting time from `p`.
///
/// # Errors
///
/// Returns [`SolveError::SingularMatrix`] if `I - M` is not invertible.
pub fn fundamental_matrix(region: &Region) -> Result<DMatrix<f64>, SolveError> {
    invert_system(TransitionMatrix::build(region).system())
}

/// Solve `system·h = 1`, rejecting singular or non-finite results.
fn solve_system(system: DMatrix<f64>) -> Result<DVector<f64>, SolveError> {
    let n = system.nrows();
    let ones = DVector::<f64>::from_element(n, 1.0);
    system
        .lu()
        .solve(&ones)
        .filter(|h| h.iter().all(|v| v.is_finite()))
        .ok_or(SolveError::SingularMatrix { size: n })
}

fn invert_system(system: DMatrix<f64>) -> Result<DMatrix<f64>, SolveError> {
    let n = system.nrows();
    system
        .try_inverse()
        .ok_or(SolveError::SingularMatrix { size: n })
}
