//! Corpus generation, timed classifier passes and result verification.
//!
//! Purpose
//! - Generate one seeded corpus of random non-degenerate triangles and query
//!   points, run each classifier over all of it, and compare the outputs.
//!
//! Model
//! - The corpus is allocated to its final size, filled once, then only read.
//! - Passes run back to back on the calling thread; each pass is timed around
//!   its loop alone so generation and verification never enter the numbers.
//! - Determinism: the whole corpus is a function of `HarnessCfg::seed`.

mod corpus;
mod pass;

pub use corpus::Corpus;
pub use pass::{run_pass, verify, Algorithm, Pass, Report, Verdict};

use crate::cfg::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TESTS};
use std::fmt;

/// Error type for corpus generation and harness runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl HarnessError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid harness params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for HarnessError {}

/// Harness configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarnessCfg {
    /// Number of (triangle, point) test cases.
    pub tests: usize,
    /// Seed for the corpus RNG.
    pub seed: u64,
    /// Collinear redraws allowed per case; `None` redraws forever.
    pub max_attempts: Option<u32>,
}

impl Default for HarnessCfg {
    fn default() -> Self {
        Self {
            tests: DEFAULT_TESTS,
            seed: 0,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl HarnessCfg {
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.tests == 0 {
            return Err(HarnessError::invalid("tests must be > 0"));
        }
        if self.max_attempts == Some(0) {
            return Err(HarnessError::invalid("max_attempts must be > 0"));
        }
        Ok(())
    }
}
