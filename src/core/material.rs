use crate::core::interaction::HitRecord;
use crate::core::pbrt::*;
use crate::core::pdf::Pdf;

/// How a material continues a path after a hit.
#[derive(Clone, Copy)]
pub enum Scatter {
    /// Perfectly specular continuation; no density is involved.
    Specular(Ray),
    /// Diffuse-like continuation sampled from the given density.
    Pdf(Pdf<'static>),
}

#[derive(Clone, Copy)]
pub struct ScatterRecord {
    pub attenuation: Spectrum,
    pub scatter: Scatter,
}

impl ScatterRecord {
    pub fn specular(attenuation: &Spectrum, ray: &Ray) -> Self {
        ScatterRecord {
            attenuation: *attenuation,
            scatter: Scatter::Specular(*ray),
        }
    }

    pub fn diffuse(attenuation: &Spectrum, pdf: Pdf<'static>) -> Self {
        ScatterRecord {
            attenuation: *attenuation,
            scatter: Scatter::Pdf(pdf),
        }
    }

    pub fn is_specular(&self) -> bool {
        return matches!(self.scatter, Scatter::Specular(_));
    }
}

pub trait Material: Send + Sync {
    /// Radiance emitted at the hit, independent of scattering.
    fn emitted(&self, _r: &Ray, _rec: &HitRecord, _u: Float, _v: Float, _p: &Point3f) -> Spectrum {
        return Spectrum::zero();
    }

    /// `None` when the path is absorbed.
    fn scatter(&self, _r: &Ray, _rec: &HitRecord, _rng: &mut RNG) -> Option<ScatterRecord> {
        return None;
    }

    /// Density of the material's own scattering lobe for `scattered`.
    fn scattering_pdf(&self, _r: &Ray, _rec: &HitRecord, _scattered: &Ray) -> Float {
        return 0.0;
    }
}
