use crate::core::interaction::HitRecord;
use crate::core::material::*;
use crate::core::pbrt::*;

/// Mirror reflection perturbed inside a ball of radius `fuzz`.
pub struct Metal {
    pub albedo: Spectrum,
    pub fuzz: Float,
}

impl Metal {
    pub fn new(albedo: &Spectrum, fuzz: Float) -> Self {
        Metal {
            albedo: *albedo,
            fuzz: Float::min(fuzz, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, r: &Ray, rec: &HitRecord, rng: &mut RNG) -> Option<ScatterRecord> {
        let reflected = reflect(&r.d.normalize(), &rec.normal);
        let u = rng.uniform_point2();
        let fuzz = uniform_sample_ball(&u, rng.uniform_float()) * self.fuzz;
        let scattered = Ray::new(&rec.p, &(reflected + fuzz), r.time);
        return Some(ScatterRecord::specular(&self.albedo, &scattered));
    }
}
