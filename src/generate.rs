//! Synthetic port matrices.
//!
//! Row `i` is unreachable left of the diagonal, zero on it, and to the right
//! climbs by a randomly chosen step per column, so going further always costs
//! more than stopping short. Every port is reachable from every earlier port.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::matrix::CostMatrix;

/// Matrix sizes used for the sample input files.
pub const SAMPLE_SIZES: &[usize] = &[10, 15, 17, 20, 25, 50, 100, 200, 400, 600, 800];

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Candidate increments between neighbouring cells of a row.
    pub steps: Vec<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            steps: vec![1, 2, 3],
        }
    }
}

/// Generate a `size`×`size` matrix.
///
/// # Panics
/// Panics if `config.steps` is empty.
pub fn generate<R: Rng + ?Sized>(size: usize, config: &GeneratorConfig, rng: &mut R) -> CostMatrix {
    assert!(!config.steps.is_empty(), "generator needs at least one step");
    let mut matrix = CostMatrix::unreachable(size);
    for origin in 0..size {
        let mut cost = 0u64;
        for destination in origin + 1..size {
            // `choose` only fails on an empty slice, ruled out above.
            let step = config.steps.choose(rng).copied().unwrap_or(1);
            cost += step;
            matrix = matrix.with_cost(origin, destination, cost);
        }
    }
    matrix
}

/// File name used for the sample of a given size.
pub fn sample_file_name(size: usize) -> String {
    format!("sample_input_size{size}.txt")
}
