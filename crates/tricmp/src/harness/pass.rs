//! Timed classifier passes, result verification and the printed report.

use std::fmt;
use std::time::{Duration, Instant};

use super::Corpus;
use crate::classify::{point_in_triangle_barycentric, point_in_triangle_orientation};
use crate::geom::{Point, Triangle};

/// The classifiers under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Barycentric,
    Orientation,
}

impl Algorithm {
    /// Execution order of a harness run.
    pub const ALL: [Algorithm; 2] = [Algorithm::Barycentric, Algorithm::Orientation];

    #[inline]
    pub fn classify(self, tri: &Triangle, p: &Point) -> bool {
        match self {
            Algorithm::Barycentric => point_in_triangle_barycentric(tri, p),
            Algorithm::Orientation => point_in_triangle_orientation(tri, p),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Barycentric => "barycentric",
            Algorithm::Orientation => "orientation",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of one classifier over a whole corpus.
#[derive(Clone, Debug)]
pub struct Pass {
    pub algorithm: Algorithm,
    pub results: Vec<bool>,
    pub elapsed: Duration,
}

/// Classify every case in `corpus` with `algorithm`; only the loop is timed.
pub fn run_pass(corpus: &Corpus, algorithm: Algorithm) -> Pass {
    let mut results = Vec::with_capacity(corpus.len());
    let start = Instant::now();
    for (tri, p) in corpus.cases() {
        results.push(algorithm.classify(tri, p));
    }
    let elapsed = start.elapsed();
    Pass {
        algorithm,
        results,
        elapsed,
    }
}

/// Outcome of comparing two result sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Success,
    /// Index of the first disagreement (or the shorter length).
    Failure { first_mismatch: usize },
}

impl Verdict {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => f.write_str("SUCCESS"),
            Verdict::Failure { .. } => f.write_str("FAILURE"),
        }
    }
}

/// Element-wise comparison that stops at the first mismatch.
pub fn verify(lhs: &[bool], rhs: &[bool]) -> Verdict {
    match lhs.iter().zip(rhs).position(|(a, b)| a != b) {
        Some(first_mismatch) => Verdict::Failure { first_mismatch },
        None if lhs.len() != rhs.len() => Verdict::Failure {
            first_mismatch: lhs.len().min(rhs.len()),
        },
        None => Verdict::Success,
    }
}

/// Verdict plus per-classifier timings of one harness run.
#[derive(Clone, Debug)]
pub struct Report {
    pub tests: usize,
    pub verdict: Verdict,
    pub barycentric: Duration,
    pub orientation: Duration,
}

impl Report {
    /// Barycentric pass, then orientation pass, then verification.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let bary = run_pass(corpus, Algorithm::Barycentric);
        let orient = run_pass(corpus, Algorithm::Orientation);
        Self::from_passes(&bary, &orient)
    }

    pub fn from_passes(barycentric: &Pass, orientation: &Pass) -> Self {
        Self {
            tests: barycentric.results.len(),
            verdict: verify(&barycentric.results, &orientation.results),
            barycentric: barycentric.elapsed,
            orientation: orientation.elapsed,
        }
    }

    /// Elapsed time of `algorithm`'s pass.
    pub fn elapsed(&self, algorithm: Algorithm) -> Duration {
        match algorithm {
            Algorithm::Barycentric => self.barycentric,
            Algorithm::Orientation => self.orientation,
        }
    }
}

/// Three lines: verdict, then one timing line per algorithm in milliseconds.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OVERALL: {}", self.verdict)?;
        for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
            let ms = self.elapsed(algorithm).as_secs_f64() * 1e3;
            write!(f, "{algorithm} time: {ms:.3} ms")?;
            if i + 1 < Algorithm::ALL.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
