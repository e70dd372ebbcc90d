use crate::core::light::LightSampler;
use crate::core::pbrt::*;

/// Cosine-weighted hemisphere around a surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosinePdf {
    pub frame: Frame,
}

impl CosinePdf {
    pub fn new(n: &Normal3f) -> Self {
        CosinePdf {
            frame: Frame::from_z(&n.normalize()),
        }
    }

    pub fn value(&self, direction: &Vector3f) -> Float {
        let cosine = Vector3f::dot(&direction.normalize(), &self.frame.z);
        if cosine > 0.0 {
            return cosine_hemisphere_pdf(cosine);
        } else {
            return 0.0;
        }
    }

    pub fn generate(&self, rng: &mut RNG) -> Vector3f {
        let d = cosine_sample_hemisphere(&rng.uniform_point2());
        return self.frame.to_world(&d);
    }
}

/// Samples directions toward a light shape from a fixed origin.
#[derive(Clone, Copy)]
pub struct LightPdf<'a> {
    pub shape: &'a dyn LightSampler,
    pub origin: Point3f,
}

impl<'a> LightPdf<'a> {
    pub fn new(shape: &'a dyn LightSampler, origin: &Point3f) -> Self {
        LightPdf {
            shape,
            origin: *origin,
        }
    }

    pub fn value(&self, direction: &Vector3f) -> Float {
        return self.shape.pdf(&self.origin, direction);
    }

    pub fn generate(&self, rng: &mut RNG) -> Option<Vector3f> {
        return self.shape.sample(&self.origin, rng).map(|s| s.wi);
    }
}

/// Equal-weight mixture of two densities.
#[derive(Clone, Copy)]
pub struct MixturePdf<'a> {
    pub p: [&'a Pdf<'a>; 2],
}

impl<'a> MixturePdf<'a> {
    pub fn new(p0: &'a Pdf<'a>, p1: &'a Pdf<'a>) -> Self {
        MixturePdf { p: [p0, p1] }
    }

    pub fn value(&self, direction: &Vector3f) -> Float {
        return 0.5 * self.p[0].value(direction) + 0.5 * self.p[1].value(direction);
    }

    pub fn generate(&self, rng: &mut RNG) -> Option<Vector3f> {
        if rng.uniform_float() < 0.5 {
            return self.p[0].generate(rng);
        } else {
            return self.p[1].generate(rng);
        }
    }
}

/// Direction distributions used by the integrator. Materials hand out a
/// `Pdf` by value, so nothing needs to be released by the caller.
#[derive(Clone, Copy)]
pub enum Pdf<'a> {
    Cosine(CosinePdf),
    Light(LightPdf<'a>),
    Mixture(MixturePdf<'a>),
}

impl<'a> Pdf<'a> {
    pub fn value(&self, direction: &Vector3f) -> Float {
        match self {
            Pdf::Cosine(p) => p.value(direction),
            Pdf::Light(p) => p.value(direction),
            Pdf::Mixture(p) => p.value(direction),
        }
    }

    /// `None` only when a light shape cannot be sampled from the origin.
    pub fn generate(&self, rng: &mut RNG) -> Option<Vector3f> {
        match self {
            Pdf::Cosine(p) => Some(p.generate(rng)),
            Pdf::Light(p) => p.generate(rng),
            Pdf::Mixture(p) => p.generate(rng),
        }
    }
}

impl From<CosinePdf> for Pdf<'_> {
    fn from(p: CosinePdf) -> Self {
        Pdf::Cosine(p)
    }
}

impl<'a> From<LightPdf<'a>> for Pdf<'a> {
    fn from(p: LightPdf<'a>) -> Self {
        Pdf::Light(p)
    }
}

impl<'a> From<MixturePdf<'a>> for Pdf<'a> {
    fn from(p: MixturePdf<'a>) -> Self {
        Pdf::Mixture(p)
    }
}
