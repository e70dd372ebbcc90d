use super::ray::Ray;
use crate::core::pbrt::types::*;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Bounds3f {
    pub min: Point3f,
    pub max: Point3f,
}

impl Bounds3f {
    pub fn new(p1: &Point3f, p2: &Point3f) -> Self {
        Bounds3f {
            min: Point3f::min(p1, p2),
            max: Point3f::max(p1, p2),
        }
    }

    pub fn from_point(p: &Point3f) -> Self {
        Bounds3f { min: *p, max: *p }
    }

    pub fn union(b1: &Self, b2: &Self) -> Self {
        Bounds3f {
            min: Point3f::min(&b1.min, &b2.min),
            max: Point3f::max(&b1.max, &b2.max),
        }
    }

    pub fn union_p(b: &Self, p: &Point3f) -> Self {
        Bounds3f {
            min: Point3f::min(&b.min, p),
            max: Point3f::max(&b.max, p),
        }
    }

    pub fn expand(&self, delta: &Vector3f) -> Self {
        Bounds3f {
            min: self.min - *delta,
            max: self.max + *delta,
        }
    }

    pub fn diagonal(&self) -> Vector3f {
        return self.max - self.min;
    }

    pub fn center(&self) -> Point3f {
        return (self.min + self.max) * 0.5;
    }

    pub fn inside(&self, p: &Point3f) -> bool {
        return p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z;
    }

    /// Slab test. Returns the parametric overlap of the ray with the box
    /// clipped to `[t_min, t_max]`.
    pub fn intersect_p(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<(Float, Float)> {
        let mut t0 = t_min;
        let mut t1 = t_max;
        for i in 0..3 {
            let inv_d = 1.0 / r.d[i];
            let mut t_near = (self.min[i] - r.o[i]) * inv_d;
            let mut t_far = (self.max[i] - r.o[i]) * inv_d;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            // NaN from 0 * inf keeps the old bound
            t0 = if t_near > t0 { t_near } else { t0 };
            t1 = if t_far < t1 { t_far } else { t1 };
            if t0 > t1 {
                return None;
            }
        }
        return Some((t0, t1));
    }
}
