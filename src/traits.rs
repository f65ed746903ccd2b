//! The seam every routing strategy plugs into.
//!
//! A strategy implements [`RouteSolver`] for a (usually stateless) solver
//! struct. The harness, the cross-validation tests and the probe binary only
//! ever talk to solvers through this trait, so any two implementations can be
//! run against the same matrix and compared.
//!
//! Contract shared by all implementations:
//! - The matrix is borrowed read-only; a solve never mutates shared state.
//! - Routes move strictly forward, start with the `(0, 0, 0)` marker and end
//!   with a hop into port N-1.
//! - N = 0 and N = 1 are trivial successes with cost 0.
//! - A destination no forward route can reach is reported as
//!   [`SolveError::Infeasible`], never as a numeric cost.

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::route::{HopConvention, Solution};

/// A strategy for the minimum-cost forward route from port 0 to port N-1.
pub trait RouteSolver {
    /// Short identifier used in reports (e.g. `"dynamic_programming"`).
    fn name(&self) -> &'static str;

    /// How hop costs in this solver's routes are to be read.
    fn convention(&self) -> HopConvention;

    /// Whether running time grows exponentially with the number of ports.
    ///
    /// The harness refuses to run exponential solvers above its configured
    /// size limit.
    fn is_exponential(&self) -> bool {
        false
    }

    /// Solve one matrix.
    fn solve(&self, matrix: &CostMatrix) -> Result<Solution, SolveError>;
}

impl<S: RouteSolver + ?Sized> RouteSolver for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn convention(&self) -> HopConvention {
        (**self).convention()
    }

    fn is_exponential(&self) -> bool {
        (**self).is_exponential()
    }

    fn solve(&self, matrix: &CostMatrix) -> Result<Solution, SolveError> {
        (**self).solve(matrix)
    }
}
