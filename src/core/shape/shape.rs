use crate::core::interaction::HitRecord;
use crate::core::pbrt::*;

/// Geometry that can be intersected by rays. Shapes are shared read-only
/// between render threads.
pub trait Shape: Send + Sync {
    fn world_bound(&self) -> Bounds3f;

    /// Closest hit with parametric distance in `[t_min, t_max]`.
    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>>;

    fn intersect_p(&self, r: &Ray, t_min: Float, t_max: Float) -> bool {
        return self.intersect(r, t_min, t_max).is_some();
    }

    /// Monte Carlo estimate of the solid angle subtended at `p`, by counting
    /// uniformly distributed directions that hit the shape.
    fn solid_angle(&self, p: &Point3f, n_samples: u32) -> Float {
        let mut hits = 0;
        for i in 0..n_samples {
            let u = Point2f::new(radical_inverse(0, i as u64), radical_inverse(1, i as u64));
            let w = uniform_sample_sphere(&u);
            let r = Ray::new(p, &w, 0.0);
            if self.intersect_p(&r, 0.0, Float::INFINITY) {
                hits += 1;
            }
        }
        return 4.0 * PI * hits as Float / n_samples as Float;
    }
}
