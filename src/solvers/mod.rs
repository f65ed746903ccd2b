//! Routing strategies.
//!
//! Each module implements [`RouteSolver`](crate::traits::RouteSolver) for one
//! way of finding the cheapest forward route:
//! - [`brute_force`]    : enumerate every forward subsequence of ports.
//! - [`divide_conquer`] : recurse on the cheapest predecessor, no memoisation.
//! - [`dynamic`]        : fill a cost table bottom-up, then walk it backwards.
//!
//! Ties only change which route is reported, never the cost. The recursive
//! and tabulated solvers both keep the smallest-index predecessor of each
//! port, so they report identical routes; brute force keeps the
//! lexicographically smallest port sequence.

pub mod brute_force;
pub mod divide_conquer;
pub mod dynamic;

pub use brute_force::BruteForce;
pub use divide_conquer::DivideAndConquer;
pub use dynamic::{CostTable, DynamicProgramming};

use crate::traits::RouteSolver;

/// Every strategy, cheapest-to-run last.
pub fn all_solvers() -> Vec<Box<dyn RouteSolver>> {
    vec![
        Box::new(BruteForce),
        Box::new(DivideAndConquer),
        Box::new(DynamicProgramming),
    ]
}
