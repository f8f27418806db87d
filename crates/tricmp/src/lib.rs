//! Point-in-triangle classifiers and the harness that compares them.
//!
//! Layout
//! - `geom`: point/triangle types and the orientation primitive.
//! - `classify`: barycentric and orientation-based membership tests.
//! - `harness`: seeded corpus generation, timed passes, verification.
//! - `cfg`: the shared tolerance and corpus-size constants.
//!
//! All arithmetic is `f64`; one tolerance (`cfg::EPSILON`) is used throughout.

pub mod cfg;
pub mod classify;
pub mod geom;
pub mod harness;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{COORD_RANGE, DEFAULT_TESTS, EPSILON};
    pub use crate::classify::{point_in_triangle_barycentric, point_in_triangle_orientation};
    pub use crate::geom::{orientation, Orientation, Point, Triangle};
    pub use crate::harness::{Algorithm, Corpus, HarnessCfg, HarnessError, Report, Verdict};
}
