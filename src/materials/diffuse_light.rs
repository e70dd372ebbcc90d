use crate::core::interaction::HitRecord;
use crate::core::material::*;
use crate::core::pbrt::*;

/// One-sided emitter. Radiates only from the side the geometric normal
/// points to and never scatters.
pub struct DiffuseLight {
    pub emit: Spectrum,
}

impl DiffuseLight {
    pub fn new(emit: &Spectrum) -> Self {
        DiffuseLight { emit: *emit }
    }
}

impl Material for DiffuseLight {
    fn emitted(&self, r: &Ray, rec: &HitRecord, _u: Float, _v: Float, _p: &Point3f) -> Spectrum {
        if rec.front_face(r) {
            return self.emit;
        }
        return Spectrum::zero();
    }
}
