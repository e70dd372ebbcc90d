use crate::core::interaction::HitRecord;
use crate::core::light::*;
use crate::core::material::Material;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

#[derive(Clone)]
pub struct Sphere {
    pub center: Point3f,
    pub radius: Float,
    pub material: Option<Arc<dyn Material>>,
}

impl Sphere {
    pub fn new(center: &Point3f, radius: Float, material: Option<Arc<dyn Material>>) -> Self {
        Sphere {
            center: *center,
            radius,
            material,
        }
    }

    /// Spherical coordinates of a point on the unit sphere, in `[0,1]^2`.
    fn get_uv(p: &Vector3f) -> (Float, Float) {
        let theta = Float::acos(Float::clamp(-p.y, -1.0, 1.0));
        let phi = Float::atan2(-p.z, p.x) + PI;
        return (phi * INV_2_PI, theta * INV_PI);
    }

    /// Cosine of the half-angle of the cone the sphere subtends at `o`.
    /// `None` when `o` is inside the sphere.
    fn cos_theta_max(&self, o: &Point3f) -> Option<Float> {
        let dist_squared = Vector3f::distance_squared(&self.center, o);
        let r2 = self.radius * self.radius;
        if dist_squared <= r2 {
            return None;
        }
        return Some(Float::sqrt(1.0 - r2 / dist_squared));
    }
}

impl Shape for Sphere {
    fn world_bound(&self) -> Bounds3f {
        let r = Vector3f::new(self.radius, self.radius, self.radius);
        return Bounds3f::new(&(self.center - r), &(self.center + r));
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let oc = r.o - self.center;
        let a = r.d.length_squared();
        let half_b = Vector3f::dot(&oc, &r.d);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = Float::sqrt(discriminant);
        let mut root = (-half_b - sqrtd) / a;
        if root < t_min || root > t_max {
            root = (-half_b + sqrtd) / a;
            if root < t_min || root > t_max {
                return None;
            }
        }
        let p = r.position(root);
        let n = (p - self.center) / self.radius;
        let (u, v) = Self::get_uv(&n);
        return Some(HitRecord::new(
            root,
            &p,
            &n,
            u,
            v,
            self.material.as_deref(),
        ));
    }
}

/// Uniform sampling of the cone of directions subtended by the sphere.
impl LightSampler for Sphere {
    fn sample(&self, o: &Point3f, rng: &mut RNG) -> Option<LightSample> {
        let cos_theta_max = self.cos_theta_max(o)?;
        let frame = Frame::from_z(&(self.center - *o).normalize());
        let d = uniform_sample_cone(&rng.uniform_point2(), cos_theta_max);
        return Some(LightSample::new(
            &frame.to_world(&d),
            uniform_cone_pdf(cos_theta_max),
        ));
    }

    fn pdf(&self, o: &Point3f, wi: &Vector3f) -> Float {
        let r = Ray::new(o, wi, 0.0);
        if !self.intersect_p(&r, RAY_EPSILON, Float::INFINITY) {
            return 0.0;
        }
        match self.cos_theta_max(o) {
            Some(cos_theta_max) => uniform_cone_pdf(cos_theta_max),
            None => 0.0,
        }
    }
}
