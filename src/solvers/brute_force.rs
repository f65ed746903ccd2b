//! Exhaustive enumeration of forward routes.
//!
//! Every strictly increasing port sequence from 0 to N-1 is a candidate; there
//! are 2^(N-2) of them. A sequence containing an unreachable move is not a
//! candidate, so enumeration never extends a prefix across a missing edge.
//! Neither is a prefix whose cost overflows a `u64`.
//! This is the baseline the other strategies are measured against and is only
//! practical for a few dozen ports.

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::route::{Hop, HopConvention, Route, Solution};
use crate::traits::RouteSolver;
use crate::utils::{trivial_solution, unreached_destination};

/// Brute-force solver. Routes use [`HopConvention::Incremental`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl RouteSolver for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn convention(&self) -> HopConvention {
        HopConvention::Incremental
    }

    fn is_exponential(&self) -> bool {
        true
    }

    fn solve(&self, matrix: &CostMatrix) -> Result<Solution, SolveError> {
        let n = matrix.size();
        if let Some(trivial) = trivial_solution(n, self.convention()) {
            return Ok(trivial);
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("brute_force_enumerate", ports = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut search = Enumeration {
            matrix,
            destination: n - 1,
            prefix: Vec::with_capacity(n),
            best: None,
            candidates: 0,
        };
        search.extend(0, 0);

        let (cost, hops) = search
            .best
            .ok_or_else(|| unreached_destination(matrix))?;
        let mut route = Vec::with_capacity(hops.len() + 1);
        route.push(Hop::start());
        route.extend(hops);

        Ok(Solution {
            cost,
            route: Route::new(route, self.convention()),
            evaluations: search.candidates,
        })
    }
}

/// Depth-first walk over all forward sequences.
///
/// Next ports are tried in ascending order and the incumbent is replaced only
/// by a strictly cheaper candidate, so among equal-cost sequences the
/// lexicographically smallest one is kept.
struct Enumeration<'a> {
    matrix: &'a CostMatrix,
    destination: usize,
    prefix: Vec<Hop>,
    best: Option<(u64, Vec<Hop>)>,
    candidates: u64,
}

impl Enumeration<'_> {
    fn extend(&mut self, at: usize, total: u64) {
        if at == self.destination {
            self.candidates += 1;
            if self.best.as_ref().map_or(true, |(best, _)| total < *best) {
                self.best = Some((total, self.prefix.clone()));
            }
            return;
        }
        for next in at + 1..=self.destination {
            let Some(step) = self.matrix.get(at, next) else {
                continue;
            };
            let Some(reached) = total.checked_add(step) else {
                continue;
            };
            self.prefix.push(Hop::new(at, next, step));
            self.extend(next, reached);
            self.prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_subsequence_of_a_complete_matrix() {
        let mut m = CostMatrix::unreachable(6);
        for i in 0..6 {
            for j in i + 1..6 {
                m = m.with_cost(i, j, (j - i) as u64);
            }
        }
        let s = BruteForce.solve(&m).unwrap();
        assert_eq!(s.evaluations, 1 << 4);
        assert_eq!(s.cost, 5);
    }

    #[test]
    fn ties_keep_lexicographically_smallest_sequence() {
        // 0->1->3 and 0->2->3 and 0->3 all cost 4.
        let m = CostMatrix::unreachable(4)
            .with_cost(0, 1, 2)
            .with_cost(1, 3, 2)
            .with_cost(0, 2, 1)
            .with_cost(2, 3, 3)
            .with_cost(0, 3, 4);
        let s = BruteForce.solve(&m).unwrap();
        assert_eq!(s.cost, 4);
        assert_eq!(s.route.ports(), vec![0, 1, 3]);
    }

    #[test]
    fn incremental_hop_costs() {
        let m = CostMatrix::unreachable(3)
            .with_cost(0, 1, 3)
            .with_cost(0, 2, 10)
            .with_cost(1, 2, 4);
        let s = BruteForce.solve(&m).unwrap();
        assert_eq!(
            s.route.hops,
            vec![Hop::start(), Hop::new(0, 1, 3), Hop::new(1, 2, 4)]
        );
        assert_eq!(s.route.total_cost(), s.cost);
    }

    #[test]
    fn overflowing_sequence_is_not_a_candidate() {
        let m = CostMatrix::unreachable(3)
            .with_cost(0, 1, u64::MAX - 1)
            .with_cost(1, 2, 5)
            .with_cost(0, 2, 3);
        let s = BruteForce.solve(&m).unwrap();
        assert_eq!(s.cost, 3);
        assert_eq!(s.route.ports(), vec![0, 2]);
        assert_eq!(s.evaluations, 1);
    }

    #[test]
    fn missing_edges_leave_no_candidate() {
        let m = CostMatrix::unreachable(3).with_cost(0, 1, 1);
        assert_eq!(
            BruteForce.solve(&m),
            Err(SolveError::Infeasible { destination: 2 })
        );
    }
}
