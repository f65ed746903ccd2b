//! Benchmark harness: run solvers on identical matrices, time them and
//! cross-check their answers.
//!
//! Timing is best-effort wall clock plus the process RSS delta around the
//! call. Neither affects correctness; the only side effect of a measurement
//! is a structured log event (with the `tracing` feature).

use std::time::{Duration, Instant};

use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

use crate::builder::HarnessBuilder;
use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::route::Solution;
use crate::solvers::DynamicProgramming;
use crate::traits::RouteSolver;

/// Largest matrix cross-checked against the tabulated baseline by default.
pub const DEFAULT_VERIFY_LIMIT: usize = 512;

/// Largest matrix an exponential solver is run on by default.
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 25;

/// One timed solve.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub solution: Solution,
    pub elapsed: Duration,
}

impl SolveResult {
    #[inline]
    pub fn minimum_cost(&self) -> u64 {
        self.solution.cost
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved {
        cost: u64,
        route_len: usize,
        evaluations: u64,
    },
    Failed {
        error: String,
    },
    /// Not run: an exponential solver above the size limit.
    Skipped,
}

impl Outcome {
    pub fn cost(&self) -> Option<u64> {
        match self {
            Outcome::Solved { cost, .. } => Some(*cost),
            _ => None,
        }
    }
}

/// Result of comparing a solver's cost against the tabulated baseline.
///
/// Costs are compared as `Option<u64>`, with `None` meaning no route was
/// reported. The error kind behind a `None` is kept in [`Outcome::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    NotChecked,
    Passed,
    Failed {
        expected: Option<u64>,
        found: Option<u64>,
    },
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed { .. } => "failed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, VerificationStatus::Failed { .. })
    }

    /// Human-readable mismatch, for failed checks only.
    pub fn detail(&self) -> Option<String> {
        let VerificationStatus::Failed { expected, found } = self else {
            return None;
        };
        let show = |cost: &Option<u64>| {
            cost.map_or_else(|| "no route".to_string(), |c| c.to_string())
        };
        Some(format!("expected {}, got {}", show(expected), show(found)))
    }
}

/// Report row for one solver on one matrix.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub solver: &'static str,
    pub case: String,
    pub ports: usize,
    pub wall_s: f64,
    pub rss_delta_kib: u64,
    pub outcome: Outcome,
    pub verification: VerificationStatus,
}

/// Runs and times solvers. Build one with [`HarnessBuilder`] or [`Harness::new`].
pub struct Harness {
    verify_limit: usize,
    exhaustive_limit: usize,
    sys: System,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        HarnessBuilder::new().build()
    }

    pub(crate) fn with_limits(verify_limit: usize, exhaustive_limit: usize) -> Self {
        Self {
            verify_limit,
            exhaustive_limit,
            sys: System::new(),
        }
    }

    pub fn verify_limit(&self) -> usize {
        self.verify_limit
    }

    pub fn exhaustive_limit(&self) -> usize {
        self.exhaustive_limit
    }

    /// Whether `solver` is allowed to run on a matrix of `ports` ports.
    pub fn admits<S: RouteSolver + ?Sized>(&self, solver: &S, ports: usize) -> bool {
        !solver.is_exponential() || ports <= self.exhaustive_limit
    }

    /// Time a single solve.
    pub fn time<S: RouteSolver + ?Sized>(
        &self,
        solver: &S,
        matrix: &CostMatrix,
    ) -> Result<SolveResult, SolveError> {
        let start = Instant::now();
        let solution = solver.solve(matrix)?;
        Ok(SolveResult {
            solution,
            elapsed: start.elapsed(),
        })
    }

    /// Time `solver` on `matrix` and compare against `baseline` when given.
    ///
    /// `Some(None)` is a baseline that found no route.
    pub fn measure<S: RouteSolver + ?Sized>(
        &mut self,
        solver: &S,
        case: &str,
        matrix: &CostMatrix,
        baseline: Option<Option<u64>>,
    ) -> Measurement {
        let before = rss_kib(&mut self.sys);
        let start = Instant::now();
        let result = solver.solve(matrix);
        let elapsed = start.elapsed();
        let after = rss_kib(&mut self.sys);

        let verification = match baseline {
            None => VerificationStatus::NotChecked,
            Some(expected) => verify(expected, result.as_ref().ok().map(|s| s.cost)),
        };
        let outcome = match result {
            Ok(solution) => Outcome::Solved {
                cost: solution.cost,
                route_len: solution.route.len(),
                evaluations: solution.evaluations,
            },
            Err(err) => Outcome::Failed {
                error: err.to_string(),
            },
        };

        #[cfg(feature = "tracing")]
        tracing::info!(
            solver = solver.name(),
            case,
            ports = matrix.size(),
            wall_s = elapsed.as_secs_f64(),
            cost = ?outcome.cost(),
            verification = verification.label(),
            "solve measured"
        );

        Measurement {
            solver: solver.name(),
            case: case.to_string(),
            ports: matrix.size(),
            wall_s: elapsed.as_secs_f64(),
            rss_delta_kib: after.saturating_sub(before),
            outcome,
            verification,
        }
    }

    /// Run every admitted solver on one matrix.
    ///
    /// Matrices up to the verify limit are first solved by the tabulated
    /// solver (untimed) and every measurement is checked against that cost.
    pub fn run_case(
        &mut self,
        case: &str,
        matrix: &CostMatrix,
        solvers: &[Box<dyn RouteSolver>],
    ) -> Vec<Measurement> {
        let baseline = (matrix.size() <= self.verify_limit)
            .then(|| DynamicProgramming.solve(matrix).ok().map(|s| s.cost));

        solvers
            .iter()
            .map(|solver| {
                if self.admits(&**solver, matrix.size()) {
                    self.measure(&**solver, case, matrix, baseline)
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        solver = solver.name(),
                        ports = matrix.size(),
                        limit = self.exhaustive_limit,
                        "skipping exponential solver"
                    );
                    Measurement {
                        solver: solver.name(),
                        case: case.to_string(),
                        ports: matrix.size(),
                        wall_s: 0.0,
                        rss_delta_kib: 0,
                        outcome: Outcome::Skipped,
                        verification: VerificationStatus::NotChecked,
                    }
                }
            })
            .collect()
    }
}

fn verify(expected: Option<u64>, found: Option<u64>) -> VerificationStatus {
    if expected == found {
        VerificationStatus::Passed
    } else {
        VerificationStatus::Failed { expected, found }
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
