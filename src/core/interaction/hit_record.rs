use crate::core::material::Material;
use crate::core::pbrt::types::*;

/// Result of a ray/shape intersection. Every test produces a fresh record.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: Float,
    pub p: Point3f,
    /// Geometric normal of the surface, not flipped toward the ray.
    pub normal: Normal3f,
    pub u: Float,
    pub v: Float,
    pub material: Option<&'a dyn Material>,
}

impl<'a> HitRecord<'a> {
    pub fn new(
        t: Float,
        p: &Point3f,
        normal: &Normal3f,
        u: Float,
        v: Float,
        material: Option<&'a dyn Material>,
    ) -> Self {
        HitRecord {
            t,
            p: *p,
            normal: *normal,
            u,
            v,
            material,
        }
    }

    pub fn front_face(&self, r: &Ray) -> bool {
        return Vector3f::dot(&r.d, &self.normal) < 0.0;
    }
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("t", &self.t)
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("u", &self.u)
            .field("v", &self.v)
            .field("material", &self.material.is_some())
            .finish()
    }
}
