use crate::core::interaction::HitRecord;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

/// Moves the wrapped shape by a constant offset.
pub struct Translate {
    pub shape: Arc<dyn Shape>,
    pub offset: Vector3f,
}

impl Translate {
    pub fn new(shape: &Arc<dyn Shape>, offset: &Vector3f) -> Self {
        Translate {
            shape: shape.clone(),
            offset: *offset,
        }
    }
}

impl Shape for Translate {
    fn world_bound(&self) -> Bounds3f {
        let b = self.shape.world_bound();
        return Bounds3f::new(&(b.min + self.offset), &(b.max + self.offset));
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let moved = Ray::new(&(r.o - self.offset), &r.d, r.time);
        let mut rec = self.shape.intersect(&moved, t_min, t_max)?;
        rec.p += self.offset;
        return Some(rec);
    }
}

/// Rotates the wrapped shape about the y axis.
pub struct RotateY {
    pub shape: Arc<dyn Shape>,
    pub sin_theta: Float,
    pub cos_theta: Float,
    pub bound: Bounds3f,
}

impl RotateY {
    /// `angle` in degrees.
    pub fn new(shape: &Arc<dyn Shape>, angle: Float) -> Self {
        let radians = angle * (PI / 180.0);
        let sin_theta = Float::sin(radians);
        let cos_theta = Float::cos(radians);
        let b = shape.world_bound();
        let mut bound: Option<Bounds3f> = None;
        for i in 0..8 {
            let x = if i & 1 == 0 { b.min.x } else { b.max.x };
            let y = if i & 2 == 0 { b.min.y } else { b.max.y };
            let z = if i & 4 == 0 { b.min.z } else { b.max.z };
            let p = Point3f::new(cos_theta * x + sin_theta * z, y, -sin_theta * x + cos_theta * z);
            bound = match bound {
                Some(bound) => Some(Bounds3f::union_p(&bound, &p)),
                None => Some(Bounds3f::from_point(&p)),
            };
        }
        RotateY {
            shape: shape.clone(),
            sin_theta,
            cos_theta,
            bound: bound.unwrap_or(b),
        }
    }

    #[inline]
    fn to_object(&self, v: &Vector3f) -> Vector3f {
        return Vector3f::new(
            self.cos_theta * v.x - self.sin_theta * v.z,
            v.y,
            self.sin_theta * v.x + self.cos_theta * v.z,
        );
    }

    #[inline]
    fn to_world(&self, v: &Vector3f) -> Vector3f {
        return Vector3f::new(
            self.cos_theta * v.x + self.sin_theta * v.z,
            v.y,
            -self.sin_theta * v.x + self.cos_theta * v.z,
        );
    }
}

impl Shape for RotateY {
    fn world_bound(&self) -> Bounds3f {
        return self.bound;
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let rotated = Ray::new(&self.to_object(&r.o), &self.to_object(&r.d), r.time);
        let mut rec = self.shape.intersect(&rotated, t_min, t_max)?;
        rec.p = self.to_world(&rec.p);
        rec.normal = self.to_world(&rec.normal);
        return Some(rec);
    }
}
