use crate::core::interaction::HitRecord;
use crate::core::light::*;
use crate::core::material::Material;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

/// Planar elliptical disk `center + x * axis1 + y * axis2`, `x^2 + y^2 <= 1`.
#[derive(Clone)]
pub struct EllipseGeometry {
    pub center: Point3f,
    pub axis1: Vector3f,
    pub axis2: Vector3f,
    /// `normalize(axis1 x axis2)`.
    pub normal: Normal3f,
    bound: Bounds3f,
}

impl EllipseGeometry {
    pub fn new(center: &Point3f, axis1: &Vector3f, axis2: &Vector3f) -> Self {
        let normal = Vector3f::cross(axis1, axis2).normalize();
        let extent = axis1.abs() + axis2.abs() + normal.abs() * PLANE_THICKNESS;
        let bound = Bounds3f::new(&(*center - extent), &(*center + extent));
        EllipseGeometry {
            center: *center,
            axis1: *axis1,
            axis2: *axis2,
            normal,
            bound,
        }
    }

    pub fn area(&self) -> Float {
        return PI * Vector3f::cross(&self.axis1, &self.axis2).length();
    }

    /// Coordinates of the in-plane offset `q` in the (possibly oblique)
    /// basis `axis1, axis2`.
    #[inline]
    pub fn disk_coordinates(&self, q: &Vector3f) -> (Float, Float) {
        let g11 = self.axis1.length_squared();
        let g22 = self.axis2.length_squared();
        let g12 = Vector3f::dot(&self.axis1, &self.axis2);
        let r1 = Vector3f::dot(q, &self.axis1);
        let r2 = Vector3f::dot(q, &self.axis2);
        let det = g11 * g22 - g12 * g12;
        let x = (g22 * r1 - g12 * r2) / det;
        let y = (g11 * r2 - g12 * r1) / det;
        return (x, y);
    }

    /// Ray/disk intersection. Returns `(t, p, u, v)` where `u` is the polar
    /// angle of the disk-local offset mapped to `[0, 1]` and `v` its radius.
    pub fn intersect(
        &self,
        r: &Ray,
        t_min: Float,
        t_max: Float,
    ) -> Option<(Float, Point3f, Float, Float)> {
        let denom = Vector3f::dot(&r.d, &self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = Vector3f::dot(&(self.center - r.o), &self.normal) / denom;
        if t.is_nan() || t < t_min || t > t_max {
            return None;
        }
        let p = r.position(t);
        let (qx, qy) = self.disk_coordinates(&(p - self.center));
        let r_e = qx * qx + qy * qy;
        if r_e.is_nan() || r_e > 1.0 {
            return None;
        }
        let u = (Float::atan2(qx, qy) + PI) * INV_2_PI;
        let v = Float::sqrt(r_e);
        return Some((t, p, u, v));
    }

    pub fn world_bound(&self) -> Bounds3f {
        return self.bound;
    }
}

/// Elliptical light sampled uniformly by area.
#[derive(Clone)]
pub struct Ellipse {
    pub geometry: EllipseGeometry,
    pub material: Option<Arc<dyn Material>>,
}

impl Ellipse {
    pub fn new(
        center: &Point3f,
        axis1: &Vector3f,
        axis2: &Vector3f,
        material: Option<Arc<dyn Material>>,
    ) -> Self {
        Ellipse {
            geometry: EllipseGeometry::new(center, axis1, axis2),
            material,
        }
    }

    /// Point on the disk for a sample in `[0,1)^2`.
    pub fn sample_point(&self, u: &Point2f) -> Point3f {
        let g = &self.geometry;
        let d = uniform_sample_disk_polar(u);
        return g.center + g.axis1 * d.x + g.axis2 * d.y;
    }

    /// Solid-angle density of a direction that hits the disk at parameter
    /// `t`: `t^2 |wi|^2 / (|cos| * area)`.
    fn density(&self, wi: &Vector3f, t: Float) -> Float {
        let len_squared = wi.length_squared();
        let cosine = Float::abs(Vector3f::dot(wi, &self.geometry.normal)) / Float::sqrt(len_squared);
        return t * t * len_squared / (cosine * self.geometry.area());
    }
}

impl Shape for Ellipse {
    fn world_bound(&self) -> Bounds3f {
        return self.geometry.world_bound();
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let (t, p, u, v) = self.geometry.intersect(r, t_min, t_max)?;
        return Some(HitRecord::new(
            t,
            &p,
            &self.geometry.normal,
            u,
            v,
            self.material.as_deref(),
        ));
    }
}

impl LightSampler for Ellipse {
    fn sample(&self, o: &Point3f, rng: &mut RNG) -> Option<LightSample> {
        let p = self.sample_point(&rng.uniform_point2());
        let wi = p - *o;
        // the sampled point sits at t = 1 along wi
        let pdf = self.density(&wi, 1.0);
        if !pdf.is_finite() || pdf <= 0.0 {
            return None;
        }
        return Some(LightSample::new(&wi, pdf));
    }

    fn pdf(&self, o: &Point3f, wi: &Vector3f) -> Float {
        let r = Ray::new(o, wi, 0.0);
        if let Some((t, _, _, _)) = self.geometry.intersect(&r, RAY_EPSILON, Float::INFINITY) {
            return self.density(wi, t);
        }
        return 0.0;
    }
}
