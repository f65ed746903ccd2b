//! Divide-and-conquer on the cheapest arrival cost, without memoisation.
//!
//! `min_cost_to(0) = 0` and
//! `min_cost_to(j) = min over reachable i < j of min_cost_to(i) + cost(i, j)`.
//!
//! Each call recomputes its whole ancestry from scratch, so the number of
//! calls doubles with every added port. That recomputation is the point: it
//! is the contrast against the tabulated version in [`super::dynamic`].
//! Recursion depth is bounded by the number of ports.

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::route::{Hop, HopConvention, Route, Solution};
use crate::traits::RouteSolver;
use crate::utils::{trivial_solution, unreached_destination};

/// Recursive solver. Routes use [`HopConvention::Cumulative`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideAndConquer;

impl RouteSolver for DivideAndConquer {
    fn name(&self) -> &'static str {
        "divide_and_conquer"
    }

    fn convention(&self) -> HopConvention {
        HopConvention::Cumulative
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
        let span = tracing::trace_span!("divide_conquer_recurse", ports = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let destination = n - 1;
        let mut recursion = Recursion {
            matrix,
            choices: vec![None; n],
            calls: 0,
        };
        let cost = recursion
            .min_cost_to(destination)
            .ok_or_else(|| unreached_destination(matrix))?;

        // Walk the recorded predecessors back from the destination.
        let mut hops = Vec::new();
        let mut port = destination;
        while port != 0 {
            let (origin, arrival) = recursion.choices[port].ok_or(SolveError::Infeasible {
                destination: port,
            })?;
            hops.push(Hop::new(origin, port, arrival));
            port = origin;
        }
        hops.push(Hop::start());
        hops.reverse();

        Ok(Solution {
            cost,
            route: Route::new(hops, self.convention()),
            evaluations: recursion.calls,
        })
    }
}

struct Recursion<'a> {
    matrix: &'a CostMatrix,
    /// `(predecessor, arrival cost)` chosen by the latest call for each port.
    choices: Vec<Option<(usize, u64)>>,
    calls: u64,
}

impl Recursion<'_> {
    /// Cheapest cost of reaching `port` from port 0, or `None` if no route
    /// reaches it without overflowing.
    ///
    /// Predecessors are scanned from 0 upward and only a strictly cheaper one
    /// replaces the current choice, so the smallest index wins ties.
    fn min_cost_to(&mut self, port: usize) -> Option<u64> {
        self.calls += 1;
        if port == 0 {
            return Some(0);
        }

        let mut best: Option<(usize, u64)> = None;
        for origin in 0..port {
            let Some(step) = self.matrix.get(origin, port) else {
                continue;
            };
            let Some(reach) = self.min_cost_to(origin) else {
                continue;
            };
            let Some(cost) = reach.checked_add(step) else {
                continue;
            };
            if best.map_or(true, |(_, current)| cost < current) {
                best = Some((origin, cost));
            }
        }

        self.choices[port] = best;
        best.map(|(_, cost)| cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(n: usize) -> CostMatrix {
        let mut m = CostMatrix::unreachable(n);
        for i in 0..n {
            for j in i + 1..n {
                m = m.with_cost(i, j, 1);
            }
        }
        m
    }

    #[test]
    fn call_count_doubles_per_port() {
        // calls(j) = 1 + sum_{i<j} calls(i)  =>  calls(j) = 2^j
        for n in 2..10 {
            let s = DivideAndConquer.solve(&complete(n)).unwrap();
            assert_eq!(s.evaluations, 1 << (n - 1), "n={n}");
            assert_eq!(s.cost, 1);
        }
    }

    #[test]
    fn cumulative_route() {
        let m = CostMatrix::unreachable(4)
            .with_cost(0, 1, 2)
            .with_cost(1, 2, 2)
            .with_cost(2, 3, 2)
            .with_cost(0, 3, 10)
            .with_cost(1, 3, 7);
        let s = DivideAndConquer.solve(&m).unwrap();
        assert_eq!(s.cost, 6);
        assert_eq!(
            s.route.hops,
            vec![
                Hop::start(),
                Hop::new(0, 1, 2),
                Hop::new(1, 2, 4),
                Hop::new(2, 3, 6)
            ]
        );
    }

    #[test]
    fn ties_prefer_smallest_predecessor() {
        let m = CostMatrix::unreachable(3)
            .with_cost(0, 1, 2)
            .with_cost(1, 2, 2)
            .with_cost(0, 2, 4);
        let s = DivideAndConquer.solve(&m).unwrap();
        assert_eq!(s.route.ports(), vec![0, 2]);
    }

    #[test]
    fn overflowing_predecessor_is_passed_over() {
        let m = CostMatrix::unreachable(3)
            .with_cost(0, 1, u64::MAX - 1)
            .with_cost(1, 2, 5)
            .with_cost(0, 2, 3);
        let s = DivideAndConquer.solve(&m).unwrap();
        assert_eq!(s.cost, 3);
        assert_eq!(s.route.hops, vec![Hop::start(), Hop::new(0, 2, 3)]);
    }

    #[test]
    fn unreachable_destination() {
        let m = CostMatrix::unreachable(4)
            .with_cost(0, 1, 1)
            .with_cost(1, 2, 1);
        assert_eq!(
            DivideAndConquer.solve(&m),
            Err(SolveError::Infeasible { destination: 3 })
        );
    }
}
