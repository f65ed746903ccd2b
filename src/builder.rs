use crate::harness::{Harness, DEFAULT_EXHAUSTIVE_LIMIT, DEFAULT_VERIFY_LIMIT};

pub struct HarnessBuilder {
    verify_limit: Option<usize>,
    exhaustive_limit: Option<usize>,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            verify_limit: None,
            exhaustive_limit: None,
        }
    }
    /// Largest matrix cross-checked against the tabulated baseline.
    pub fn with_verify_limit(mut self, ports: usize) -> Self {
        self.verify_limit = Some(ports);
        self
    }
    /// Largest matrix exponential solvers are run on.
    pub fn with_exhaustive_limit(mut self, ports: usize) -> Self {
        self.exhaustive_limit = Some(ports);
        self
    }
    pub fn build(self) -> Harness {
        Harness::with_limits(
            self.verify_limit.unwrap_or(DEFAULT_VERIFY_LIMIT),
            self.exhaustive_limit.unwrap_or(DEFAULT_EXHAUSTIVE_LIMIT),
        )
    }
}
