use super::rect::*;
use crate::core::interaction::HitRecord;
use crate::core::light::*;
use crate::core::material::Material;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

/// Rectangle as seen from one reference point, set up for solid-angle
/// uniform sampling (Ureña et al. 2013). Only valid for that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphQuad {
    pub o: Point3f,
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f,
    pub z0: Float,
    pub x0: Float,
    pub y0: Float,
    pub x1: Float,
    pub y1: Float,
    pub b0: Float,
    pub b1: Float,
    pub k: Float,
    /// Solid angle subtended by the rectangle (spherical excess).
    pub solid_angle: Float,
}

#[inline]
fn gamma_angle(a: &Vector3f, b: &Vector3f) -> Float {
    return Float::acos(Float::clamp(-Vector3f::dot(a, b), -1.0, 1.0));
}

impl SphQuad {
    /// `s` is a corner, `ex` and `ey` the two orthogonal edges leaving it.
    pub fn new(s: &Point3f, ex: &Vector3f, ey: &Vector3f, o: &Point3f) -> Self {
        let exl = ex.length();
        let eyl = ey.length();
        let x = *ex / exl;
        let y = *ey / eyl;
        let mut z = Vector3f::cross(&x, &y);

        let d = *s - *o;
        let mut z0 = Vector3f::dot(&d, &z);
        // keep the rectangle on the negative side of the local frame
        if z0 > 0.0 {
            z = -z;
            z0 = -z0;
        }
        let x0 = Vector3f::dot(&d, &x);
        let y0 = Vector3f::dot(&d, &y);
        let x1 = x0 + exl;
        let y1 = y0 + eyl;

        let v00 = Vector3f::new(x0, y0, z0);
        let v01 = Vector3f::new(x0, y1, z0);
        let v10 = Vector3f::new(x1, y0, z0);
        let v11 = Vector3f::new(x1, y1, z0);

        // normals of the planes through o and each edge
        let n0 = Vector3f::cross(&v00, &v10).normalize();
        let n1 = Vector3f::cross(&v10, &v11).normalize();
        let n2 = Vector3f::cross(&v11, &v01).normalize();
        let n3 = Vector3f::cross(&v01, &v00).normalize();

        let g0 = gamma_angle(&n0, &n1);
        let g1 = gamma_angle(&n1, &n2);
        let g2 = gamma_angle(&n2, &n3);
        let g3 = gamma_angle(&n3, &n0);

        let k = 2.0 * PI - g2 - g3;
        let solid_angle = g0 + g1 - k;
        SphQuad {
            o: *o,
            x,
            y,
            z,
            z0,
            x0,
            y0,
            x1,
            y1,
            b0: n0.z,
            b1: n2.z,
            k,
            solid_angle,
        }
    }

    /// Point on the rectangle for `(u, v)` in `[0,1)^2`. Equal areas in
    /// `(u, v)` map to equal solid angles.
    pub fn sample(&self, u: Float, v: Float) -> Point3f {
        // azimuth through the cumulative solid angle
        let au = u * self.solid_angle + self.k;
        let fu = (Float::cos(au) * self.b0 - self.b1) / Float::sin(au);
        let sign = if fu > 0.0 { 1.0 } else { -1.0 };
        let cu = sign / Float::sqrt(fu * fu + self.b0 * self.b0);
        let cu = Float::clamp(cu, -1.0, 1.0);
        let xu = if cu * cu < 1.0 {
            -(cu * self.z0) / Float::sqrt(1.0 - cu * cu)
        } else if -cu * self.z0 > 0.0 {
            self.x1
        } else {
            self.x0
        };
        let xu = Float::clamp(xu, self.x0, self.x1);

        // elevation between the two slant heights at xu
        let d = Float::sqrt(xu * xu + self.z0 * self.z0);
        let h0 = self.y0 / Float::sqrt(d * d + self.y0 * self.y0);
        let h1 = self.y1 / Float::sqrt(d * d + self.y1 * self.y1);
        let hv = h0 + v * (h1 - h0);
        let hv2 = hv * hv;
        let yv = if hv2 < 1.0 - 0.0001 {
            (hv * d) / Float::sqrt(1.0 - hv2)
        } else {
            self.y1
        };
        let yv = Float::clamp(yv, self.y0, self.y1);
        return self.o + self.x * xu + self.y * yv + self.z * self.z0;
    }
}

/// Axis-aligned rectangular light sampled uniformly by solid angle.
#[derive(Clone)]
pub struct SolidAngleRect {
    pub rect: AaRect,
}

impl SolidAngleRect {
    pub fn new(rect: AaRect) -> Self {
        SolidAngleRect { rect }
    }

    pub fn xz(
        x0: Float,
        x1: Float,
        z0: Float,
        z1: Float,
        k: Float,
        material: Option<Arc<dyn Material>>,
    ) -> Self {
        Self::new(AaRect::new(RectPlane::XZ, x0, x1, z0, z1, k, material))
    }

    pub fn flip_normal(self) -> Self {
        Self::new(self.rect.flip_normal())
    }

    pub fn sph_quad(&self, o: &Point3f) -> SphQuad {
        let (corner, ea, eb) = self.rect.corner_and_edges();
        return SphQuad::new(&corner, &ea, &eb, o);
    }
}

impl Shape for SolidAngleRect {
    fn world_bound(&self) -> Bounds3f {
        return self.rect.world_bound();
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        return self.rect.intersect(r, t_min, t_max);
    }
}

impl LightSampler for SolidAngleRect {
    fn sample(&self, o: &Point3f, rng: &mut RNG) -> Option<LightSample> {
        let squad = self.sph_quad(o);
        if !squad.solid_angle.is_finite() || squad.solid_angle <= 0.0 {
            return None;
        }
        stats::SPHERICAL_QUAD_SAMPLES.add(1);
        let u = rng.uniform_float();
        let v = rng.uniform_float();
        let p = squad.sample(u, v);
        return Some(LightSample::new(&(p - *o), 1.0 / squad.solid_angle));
    }

    fn pdf(&self, o: &Point3f, wi: &Vector3f) -> Float {
        let r = Ray::new(o, wi, 0.0);
        if !self.rect.intersect_p(&r, RAY_EPSILON, Float::INFINITY) {
            return 0.0;
        }
        let squad = self.sph_quad(o);
        if squad.solid_angle > 0.0 {
            return 1.0 / squad.solid_angle;
        }
        return 0.0;
    }
}
