//! Assorted helpers shared by the solvers.

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::route::{Hop, HopConvention, Route, Solution};

/// The error to report when no route to the last port has a cost that fits in a `u64`.
///
/// Solvers drop a candidate whose sum overflows, so an empty result means
/// either that no forward path exists or that every path overflowed. This
/// reruns the forward relaxation with saturating sums to tell the two apart.
/// The overflow names the final move of the cheapest saturated route, with
/// the smallest predecessor winning ties.
pub fn unreached_destination(matrix: &CostMatrix) -> SolveError {
    let n = matrix.size();
    let destination = n.saturating_sub(1);
    let mut arrival: Vec<Option<u64>> = vec![None; n];
    let mut last_move = None;
    if n > 0 {
        arrival[0] = Some(0);
    }
    for port in 1..n {
        let mut best: Option<(usize, u64)> = None;
        for origin in 0..port {
            if let (Some(reach), Some(step)) = (arrival[origin], matrix.get(origin, port)) {
                let cost = reach.saturating_add(step);
                if best.map_or(true, |(_, current)| cost < current) {
                    best = Some((origin, cost));
                }
            }
        }
        arrival[port] = best.map(|(_, cost)| cost);
        last_move = best;
    }
    match last_move {
        Some((origin, _)) => SolveError::CostOverflow {
            origin,
            destination,
        },
        None => SolveError::Infeasible { destination },
    }
}

/// The answer for matrices with fewer than two ports, if `size` is one of them.
///
/// No ports yields an empty route; a single port yields just the start marker.
pub fn trivial_solution(size: usize, convention: HopConvention) -> Option<Solution> {
    let hops = match size {
        0 => Vec::new(),
        1 => vec![Hop::start()],
        _ => return None,
    };
    Some(Solution {
        cost: 0,
        route: Route::new(hops, convention),
        evaluations: 0,
    })
}
