//! Seeded test corpus: random non-degenerate triangles paired with query points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{HarnessCfg, HarnessError};
use crate::cfg::COORD_RANGE;
use crate::geom::{Point, Triangle};

/// Fixed test corpus: `triangles[i]` is paired with `points[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Corpus {
    triangles: Vec<Triangle>,
    points: Vec<Point>,
}

impl Corpus {
    /// Draw `cfg.tests` cases from a `StdRng` seeded with `cfg.seed`.
    ///
    /// Per case: six coordinates in the order x1, x2, x3, y1, y2, y3, all six
    /// redrawn while the triangle is collinear, then the query x, y.
    pub fn generate(cfg: &HarnessCfg) -> Result<Self, HarnessError> {
        cfg.validate()?;
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let mut triangles = Vec::with_capacity(cfg.tests);
        let mut points = Vec::with_capacity(cfg.tests);
        for index in 0..cfg.tests {
            triangles.push(sample_triangle(&mut rng, cfg.max_attempts, index)?);
            points.push(Point::new(coord(&mut rng), coord(&mut rng)));
        }
        Ok(Self { triangles, points })
    }

    /// Wrap pre-built cases. Both slices must have the same length.
    pub fn from_parts(triangles: Vec<Triangle>, points: Vec<Point>) -> Result<Self, HarnessError> {
        if triangles.len() != points.len() {
            return Err(HarnessError::invalid(format!(
                "{} triangles but {} points",
                triangles.len(),
                points.len()
            )));
        }
        Ok(Self { triangles, points })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate test cases in corpus order.
    pub fn cases(&self) -> impl Iterator<Item = (&Triangle, &Point)> + '_ {
        self.triangles.iter().zip(self.points.iter())
    }
}

#[inline]
fn coord<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..COORD_RANGE))
}

/// Draw one non-collinear triangle, giving up after `max_attempts` collinear draws.
pub(super) fn sample_triangle<R: Rng>(
    rng: &mut R,
    max_attempts: Option<u32>,
    index: usize,
) -> Result<Triangle, HarnessError> {
    let mut collinear_draws: u32 = 0;
    loop {
        let (x1, x2, x3) = (coord(rng), coord(rng), coord(rng));
        let (y1, y2, y3) = (coord(rng), coord(rng), coord(rng));
        let tri = Triangle::from_coords(x1, y1, x2, y2, x3, y3);
        if !tri.is_degenerate() {
            return Ok(tri);
        }
        collinear_draws = collinear_draws.saturating_add(1);
        if let Some(limit) = max_attempts {
            if collinear_draws >= limit {
                return Err(HarnessError::degenerate(format!(
                    "case {index}: {collinear_draws} collinear draws in a row"
                )));
            }
        }
    }
}
