use crate::core::interaction::HitRecord;
use crate::core::light::*;
use crate::core::material::Material;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

/// Coordinate plane a rectangle lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectPlane {
    XY,
    XZ,
    YZ,
}

impl RectPlane {
    /// In-plane axes and the normal axis.
    #[inline]
    pub fn axes(&self) -> (usize, usize, usize) {
        match self {
            RectPlane::XY => (0, 1, 2),
            RectPlane::XZ => (0, 2, 1),
            RectPlane::YZ => (1, 2, 0),
        }
    }
}

/// Axis-aligned rectangle `[a0, a1] x [b0, b1]` at offset `k` along the
/// plane normal.
#[derive(Clone)]
pub struct AaRect {
    pub plane: RectPlane,
    pub a0: Float,
    pub a1: Float,
    pub b0: Float,
    pub b1: Float,
    pub k: Float,
    pub flip: bool,
    pub material: Option<Arc<dyn Material>>,
}

impl AaRect {
    pub fn new(
        plane: RectPlane,
        a0: Float,
        a1: Float,
        b0: Float,
        b1: Float,
        k: Float,
        material: Option<Arc<dyn Material>>,
    ) -> Self {
        AaRect {
            plane,
            a0: Float::min(a0, a1),
            a1: Float::max(a0, a1),
            b0: Float::min(b0, b1),
            b1: Float::max(b0, b1),
            k,
            flip: false,
            material,
        }
    }

    pub fn xy(x0: Float, x1: Float, y0: Float, y1: Float, k: Float, m: &Arc<dyn Material>) -> Self {
        Self::new(RectPlane::XY, x0, x1, y0, y1, k, Some(m.clone()))
    }

    pub fn xz(x0: Float, x1: Float, z0: Float, z1: Float, k: Float, m: &Arc<dyn Material>) -> Self {
        Self::new(RectPlane::XZ, x0, x1, z0, z1, k, Some(m.clone()))
    }

    pub fn yz(y0: Float, y1: Float, z0: Float, z1: Float, k: Float, m: &Arc<dyn Material>) -> Self {
        Self::new(RectPlane::YZ, y0, y1, z0, z1, k, Some(m.clone()))
    }

    /// Makes the normal point toward the negative axis.
    pub fn flip_normal(mut self) -> Self {
        self.flip = !self.flip;
        return self;
    }

    pub fn normal(&self) -> Normal3f {
        let (_, _, n) = self.plane.axes();
        let mut v = Normal3f::zero();
        v[n] = if self.flip { -1.0 } else { 1.0 };
        return v;
    }

    pub fn area(&self) -> Float {
        return (self.a1 - self.a0) * (self.b1 - self.b0);
    }

    /// Corner at `(a0, b0)` and the two edge vectors leaving it.
    pub fn corner_and_edges(&self) -> (Point3f, Vector3f, Vector3f) {
        let (a, b, n) = self.plane.axes();
        let mut corner = Point3f::zero();
        corner[a] = self.a0;
        corner[b] = self.b0;
        corner[n] = self.k;
        let mut ea = Vector3f::zero();
        ea[a] = self.a1 - self.a0;
        let mut eb = Vector3f::zero();
        eb[b] = self.b1 - self.b0;
        return (corner, ea, eb);
    }
}

impl Shape for AaRect {
    fn world_bound(&self) -> Bounds3f {
        let (corner, ea, eb) = self.corner_and_edges();
        let b = Bounds3f::new(&corner, &(corner + ea + eb));
        return b.expand(&(self.normal().abs() * PLANE_THICKNESS));
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let (a, b, n) = self.plane.axes();
        let t = (self.k - r.o[n]) / r.d[n];
        if t.is_nan() || t < t_min || t > t_max {
            return None;
        }
        let pa = r.o[a] + t * r.d[a];
        let pb = r.o[b] + t * r.d[b];
        if pa < self.a0 || pa > self.a1 || pb < self.b0 || pb > self.b1 {
            return None;
        }
        let u = (pa - self.a0) / (self.a1 - self.a0);
        let v = (pb - self.b0) / (self.b1 - self.b0);
        return Some(HitRecord::new(
            t,
            &r.position(t),
            &self.normal(),
            u,
            v,
            self.material.as_deref(),
        ));
    }
}

/// Area-uniform sampling, converted to a solid-angle density.
impl LightSampler for AaRect {
    fn sample(&self, o: &Point3f, rng: &mut RNG) -> Option<LightSample> {
        let (corner, ea, eb) = self.corner_and_edges();
        let u = rng.uniform_point2();
        let p = corner + ea * u.x + eb * u.y;
        let wi = p - *o;
        let dist_squared = wi.length_squared();
        let cosine = Float::abs(Vector3f::dot(&wi, &self.normal())) / Float::sqrt(dist_squared);
        if dist_squared == 0.0 || cosine <= 0.0 {
            return None;
        }
        return Some(LightSample::new(&wi, dist_squared / (cosine * self.area())));
    }

    fn pdf(&self, o: &Point3f, wi: &Vector3f) -> Float {
        let r = Ray::new(o, wi, 0.0);
        if let Some(rec) = self.intersect(&r, RAY_EPSILON, Float::INFINITY) {
            let len_squared = wi.length_squared();
            let dist_squared = rec.t * rec.t * len_squared;
            let cosine = Float::abs(Vector3f::dot(wi, &rec.normal)) / Float::sqrt(len_squared);
            return dist_squared / (cosine * self.area());
        }
        return 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_rect() -> AaRect {
        AaRect::new(RectPlane::XZ, 213.0, 343.0, 227.0, 332.0, 554.0, None).flip_normal()
    }

    #[test]
    fn test_001() {
        let rect = light_rect();
        assert_eq!(rect.normal(), Normal3f::new(0.0, -1.0, 0.0));
        let r = Ray::new(
            &Point3f::new(278.0, 0.0, 280.0),
            &Vector3f::new(0.0, 1.0, 0.0),
            0.0,
        );
        let rec = rect.intersect(&r, 0.001, Float::INFINITY).unwrap();
        assert_eq!(rec.t, 554.0);
        assert!(rec.front_face(&r));
        let r = Ray::new(
            &Point3f::new(100.0, 0.0, 280.0),
            &Vector3f::new(0.0, 1.0, 0.0),
            0.0,
        );
        assert!(rect.intersect(&r, 0.001, Float::INFINITY).is_none());
    }

    #[test]
    fn test_002() {
        let rect = light_rect();
        let o = Point3f::new(278.0, 100.0, 280.0);
        let mut rng = RNG::new_sequence(11);
        for _ in 0..100 {
            let s = rect.sample(&o, &mut rng).unwrap();
            let pdf = rect.pdf(&o, &s.wi);
            assert!((s.pdf - pdf).abs() <= 1e-3 * pdf);
        }
    }

    #[test]
    fn test_003() {
        let rect = light_rect();
        let b = rect.world_bound();
        assert!(b.inside(&Point3f::new(213.0, 554.0, 227.0)));
        assert!(b.max.y > 554.0 && b.min.y < 554.0);
    }
}
