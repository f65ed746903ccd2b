//! Trading Post: cheapest forward-only route through a chain of ports.
//!
//! Ports are numbered `0..N`. Moving directly from port `i` to a later port
//! `j` costs `matrix[i][j]`, or is impossible. A traveller starts at port 0,
//! may stop at any intermediate ports, and must end at port N-1. This crate
//! finds the cheapest such route three ways so they can be compared:
//!
//! 1. [`BruteForce`]: enumerate every forward port sequence, O(2^N).
//! 2. [`DivideAndConquer`]: recurse on the cheapest predecessor of each port
//!    without caching, also exponential.
//! 3. [`DynamicProgramming`]: fill a cost table bottom-up and walk it back,
//!    O(N²).
//!
//! ## Quick start
//! ```
//! use trading_post::{CostMatrix, DynamicProgramming, RouteSolver};
//!
//! let matrix = CostMatrix::unreachable(3)
//!     .with_cost(0, 1, 3)
//!     .with_cost(0, 2, 10)
//!     .with_cost(1, 2, 4);
//! let solution = DynamicProgramming.solve(&matrix).unwrap();
//! assert_eq!(solution.cost, 7);
//! assert_eq!(solution.route.ports(), vec![0, 1, 2]);
//! ```
//!
//! ## Comparing strategies
//! [`Harness`] runs any set of [`RouteSolver`]s on the same matrix, times
//! them, and checks every answer against the tabulated baseline. The
//! `port_probe` binary drives it over generated or file-based inputs.

pub mod builder;
pub mod error;
pub mod generate;
pub mod harness;
pub mod io;
pub mod matrix;
pub mod route;
pub mod solvers;
pub mod traits;
pub mod utils;

pub use crate::builder::HarnessBuilder;
pub use crate::error::{MatrixError, SolveError};
pub use crate::harness::{Harness, Measurement, SolveResult};
pub use crate::matrix::CostMatrix;
pub use crate::route::{Hop, HopConvention, Route, Solution};
pub use crate::solvers::{BruteForce, DivideAndConquer, DynamicProgramming};
pub use crate::traits::RouteSolver;
