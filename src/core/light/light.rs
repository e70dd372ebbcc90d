use crate::core::pbrt::*;
use crate::core::shape::Shape;

/// A direction toward a light together with its solid-angle density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSample {
    /// Direction from the query origin. Not necessarily normalized: area
    /// samplers return the full vector to the sampled point.
    pub wi: Vector3f,
    pub pdf: Float,
}

impl LightSample {
    pub fn new(wi: &Vector3f, pdf: Float) -> Self {
        LightSample { wi: *wi, pdf }
    }
}

/// Shapes that can be importance sampled from a reference point.
///
/// `pdf` depends only on the geometry and its arguments. It never relies on
/// state left behind by an earlier `sample` call.
pub trait LightSampler: Shape {
    /// Draws a direction from `o` toward the shape. `None` when the shape
    /// subtends no solid angle from `o`.
    fn sample(&self, o: &Point3f, rng: &mut RNG) -> Option<LightSample>;

    /// Solid-angle density of `wi` at `o`; zero when the ray misses.
    fn pdf(&self, o: &Point3f, wi: &Vector3f) -> Float;
}
