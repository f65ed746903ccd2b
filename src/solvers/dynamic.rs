//! Bottom-up dynamic programming over the port table.
//!
//! Two phases:
//! 1. **Table fill.** The table starts as a copy of the matrix's upper
//!    triangle. Row by row, the best cost of arriving at port `i` is computed
//!    once from column `i` of the rows above and added to every cell of row
//!    `i`. Afterwards `table[i][j]` is the cheapest cost of reaching `j` with
//!    `i` as the last stop before it, and `table[i][i]` is the cost accrued on
//!    stopping at `i`. A travel cell whose sum overflows a `u64` is left
//!    unreachable. The stop cell saturates instead, since it never feeds a
//!    route's cost.
//! 2. **Reconstruction.** Starting at the destination column, repeatedly pick
//!    the row with the cheapest entry in the current column and jump to it,
//!    recording a stop hop at every intermediate port.
//!
//! Both phases together run in O(N²) time and space.

use std::fmt;

use crate::error::SolveError;
use crate::matrix::{Cell, CostMatrix};
use crate::route::{Hop, HopConvention, Route, Solution};
use crate::traits::RouteSolver;
use crate::utils::{trivial_solution, unreached_destination};

/// Filled cost table.
///
/// Only the upper triangle is populated. A port with no reachable
/// predecessor has its whole row unreachable, so it can never be used as a
/// stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    cells: Vec<Cell>,
    size: usize,
    filled: u64,
}

impl CostTable {
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cumulative cost of reaching `destination` with `origin` as the last stop.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, origin: usize, destination: usize) -> Cell {
        assert!(origin < self.size && destination < self.size);
        if origin > destination {
            return None;
        }
        self.cells[origin * self.size + destination]
    }

    /// Cheapest `(origin, cost)` entry in column `port`, above the diagonal.
    ///
    /// Rows are scanned from 0 upward and only a strictly cheaper row
    /// replaces the current pick, so the smallest predecessor index wins ties.
    pub fn best_predecessor(&self, port: usize) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for origin in 0..port {
            if let Some(cost) = self.get(origin, port) {
                if best.map_or(true, |(_, current)| cost < current) {
                    best = Some((origin, cost));
                }
            }
        }
        best
    }

    /// Cheapest cost of arriving at `port` from port 0.
    pub fn best_arrival(&self, port: usize) -> Option<u64> {
        if port == 0 {
            return Some(0);
        }
        self.best_predecessor(port).map(|(_, cost)| cost)
    }

    /// Number of cells written during the fill.
    #[inline]
    pub fn cells_filled(&self) -> u64 {
        self.filled
    }
}

impl fmt::Display for CostTable {
    /// One bracketed row per line, unreachable cells shown as `X`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "[ ")?;
            for col in 0..self.size {
                match self.get(row, col) {
                    Some(cost) => write!(f, "{cost}")?,
                    None => write!(f, "X")?,
                }
                if col + 1 < self.size {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

/// Tabulating solver. Routes use [`HopConvention::Cumulative`] and include a
/// stop hop at every intermediate port.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl DynamicProgramming {
    /// Phase 1: fill the cost table.
    pub fn fill_table(&self, matrix: &CostMatrix) -> CostTable {
        let n = matrix.size();

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("dp_fill_table", ports = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cells = vec![None; n * n];
        for row in 0..n {
            for col in row..n {
                cells[row * n + col] = matrix.get(row, col);
            }
        }
        let mut table = CostTable {
            cells,
            size: n,
            filled: 0,
        };

        // The last row has nowhere left to go; its diagonal stays as given.
        for row in 0..n.saturating_sub(1) {
            let arrival = table.best_arrival(row);
            for col in row..n {
                let idx = row * n + col;
                table.cells[idx] = match (table.cells[idx], arrival) {
                    (Some(offset), Some(arrival)) if col == row => {
                        Some(arrival.saturating_add(offset))
                    }
                    (Some(step), Some(arrival)) => arrival.checked_add(step),
                    _ => None,
                };
                table.filled += 1;
            }
        }

        table
    }

    /// Phase 2: walk the filled table back from the destination.
    pub fn reconstruct(&self, table: &CostTable) -> Result<Route, SolveError> {
        let n = table.size();
        if n == 0 {
            return Ok(Route::new(Vec::new(), HopConvention::Cumulative));
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("dp_reconstruct", ports = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let destination = n - 1;
        let mut hops = Vec::new();
        let mut column = destination;
        while column != 0 {
            if column != destination {
                let stopped = table
                    .get(column, column)
                    .ok_or(SolveError::Infeasible { destination: column })?;
                hops.push(Hop::new(column, column, stopped));
            }
            let (origin, cost) = table
                .best_predecessor(column)
                .ok_or(SolveError::Infeasible { destination: column })?;
            hops.push(Hop::new(origin, column, cost));
            column = origin;
        }
        hops.push(Hop::start());
        hops.reverse();

        Ok(Route::new(hops, HopConvention::Cumulative))
    }
}

impl RouteSolver for DynamicProgramming {
    fn name(&self) -> &'static str {
        "dynamic_programming"
    }

    fn convention(&self) -> HopConvention {
        HopConvention::Cumulative
    }

    fn solve(&self, matrix: &CostMatrix) -> Result<Solution, SolveError> {
        if let Some(trivial) = trivial_solution(matrix.size(), self.convention()) {
            return Ok(trivial);
        }
        let table = self.fill_table(matrix);
        if table.best_arrival(matrix.size() - 1).is_none() {
            return Err(unreached_destination(matrix));
        }
        let route = self.reconstruct(&table)?;
        // The last hop is the move into the destination and carries the total.
        let cost = route.hops.last().map_or(0, |hop| hop.cost);
        Ok(Solution {
            cost,
            route,
            evaluations: table.cells_filled(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_two() -> CostMatrix {
        CostMatrix::unreachable(3)
            .with_cost(0, 1, 3)
            .with_cost(0, 2, 10)
            .with_cost(1, 2, 4)
    }

    #[test]
    fn fill_adds_arrival_across_row() {
        let table = DynamicProgramming.fill_table(&scenario_two());
        assert_eq!(table.get(0, 1), Some(3));
        assert_eq!(table.get(0, 2), Some(10));
        assert_eq!(table.get(1, 1), Some(3));
        assert_eq!(table.get(1, 2), Some(7));
        assert_eq!(table.best_arrival(2), Some(7));
        assert_eq!(table.cells_filled(), 3 + 2);
    }

    #[test]
    fn reconstruct_records_stops() {
        let s = DynamicProgramming.solve(&scenario_two()).unwrap();
        assert_eq!(s.cost, 7);
        assert_eq!(
            s.route.hops,
            vec![
                Hop::start(),
                Hop::new(0, 1, 3),
                Hop::new(1, 1, 3),
                Hop::new(1, 2, 7)
            ]
        );
    }

    #[test]
    fn stop_offset_shows_in_stop_hop_only() {
        let m = CostMatrix::new(vec![
            vec![Some(0), Some(3), Some(10)],
            vec![None, Some(5), Some(4)],
            vec![None, None, Some(0)],
        ])
        .unwrap();
        let s = DynamicProgramming.solve(&m).unwrap();
        assert_eq!(s.cost, 7);
        assert_eq!(s.route.hops[2], Hop::new(1, 1, 8));
        assert_eq!(s.route.increments(), vec![3, 4]);
    }

    #[test]
    fn unreachable_port_cannot_be_a_stop() {
        let m = CostMatrix::unreachable(3)
            .with_cost(0, 2, 8)
            .with_cost(1, 2, 1);
        let table = DynamicProgramming.fill_table(&m);
        assert_eq!(table.get(1, 2), None);
        assert_eq!(table.get(1, 1), None);
        let s = DynamicProgramming.solve(&m).unwrap();
        assert_eq!(s.cost, 8);
        assert_eq!(s.route.ports(), vec![0, 2]);
    }

    #[test]
    fn huge_stop_offset_saturates_without_failing() {
        let m = CostMatrix::new(vec![
            vec![Some(0), Some(10), Some(100)],
            vec![None, Some(u64::MAX - 5), Some(1)],
            vec![None, None, Some(0)],
        ])
        .unwrap();
        let s = DynamicProgramming.solve(&m).unwrap();
        assert_eq!(s.cost, 11);
        assert_eq!(s.route.hops[2], Hop::new(1, 1, u64::MAX));
        assert_eq!(s.route.increments(), vec![10, 1]);
    }

    #[test]
    fn overflowing_cell_is_left_unreachable() {
        let m = CostMatrix::unreachable(3)
            .with_cost(0, 1, u64::MAX - 1)
            .with_cost(1, 2, 5)
            .with_cost(0, 2, 3);
        let table = DynamicProgramming.fill_table(&m);
        assert_eq!(table.get(1, 2), None);
        let s = DynamicProgramming.solve(&m).unwrap();
        assert_eq!(s.cost, 3);
        assert_eq!(s.route.ports(), vec![0, 2]);
    }

    #[test]
    fn infeasible_destination() {
        let m = CostMatrix::unreachable(3).with_cost(0, 1, 1);
        assert_eq!(
            DynamicProgramming.solve(&m),
            Err(SolveError::Infeasible { destination: 2 })
        );
    }

    #[test]
    fn display_marks_unreachable_cells() {
        let table = DynamicProgramming.fill_table(&scenario_two());
        let printed = table.to_string();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[0], "[ 0, 3, 10 ]");
        assert_eq!(lines[1], "[ X, 3, 7 ]");
        assert_eq!(lines[2], "[ X, X, 0 ]");
    }
}
