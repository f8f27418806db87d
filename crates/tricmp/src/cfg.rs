//! Compile-time defaults shared by the classifiers and the harness.
//!
//! Policy
//! - One tolerance for every near-zero test (orientation, determinant, vertex
//!   coincidence). Changing it changes both classifiers at once.

/// Near-zero threshold for cross products, determinants and coordinate deltas.
pub const EPSILON: f64 = 1e-6;

/// Corpus size used when the caller does not pick one.
pub const DEFAULT_TESTS: usize = 10_000_000;

/// Generated coordinates are integers in `[0, COORD_RANGE)`.
pub const COORD_RANGE: i32 = 1000;

/// Collinear redraws allowed per test case before generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;
