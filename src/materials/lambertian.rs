use crate::core::interaction::HitRecord;
use crate::core::material::*;
use crate::core::pbrt::*;
use crate::core::pdf::*;

/// Ideal diffuse reflector. Directions are drawn from a cosine lobe around
/// the normal facing the incoming ray.
pub struct Lambertian {
    pub albedo: Spectrum,
}

impl Lambertian {
    pub fn new(albedo: &Spectrum) -> Self {
        Lambertian { albedo: *albedo }
    }

    fn shading_normal(r: &Ray, rec: &HitRecord) -> Normal3f {
        return face_forward(&rec.normal, &(-r.d));
    }
}

impl Material for Lambertian {
    fn scatter(&self, r: &Ray, rec: &HitRecord, _rng: &mut RNG) -> Option<ScatterRecord> {
        let n = Self::shading_normal(r, rec);
        let pdf = Pdf::from(CosinePdf::new(&n));
        return Some(ScatterRecord::diffuse(&self.albedo, pdf));
    }

    fn scattering_pdf(&self, r: &Ray, rec: &HitRecord, scattered: &Ray) -> Float {
        let n = Self::shading_normal(r, rec);
        let cosine = Vector3f::dot(&n, &scattered.d.normalize());
        if cosine < 0.0 {
            return 0.0;
        }
        return cosine * INV_PI;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let m = Lambertian::new(&Spectrum::from_value(0.5));
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let rec = HitRecord::new(1.0, &Point3f::zero(), &n, 0.0, 0.0, None);
        // arriving from below, the lobe faces down
        let r = Ray::new(&Point3f::new(0.0, -1.0, 0.0), &Vector3f::new(0.0, 1.0, 0.0), 0.0);
        let mut rng = RNG::new_sequence(4);
        let srec = m.scatter(&r, &rec, &mut rng).unwrap();
        assert!(!srec.is_specular());
        let down = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, -2.0, 0.0), 0.0);
        assert!((m.scattering_pdf(&r, &rec, &down) - INV_PI).abs() < 1e-6);
        let up = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 1.0, 0.0), 0.0);
        assert_eq!(m.scattering_pdf(&r, &rec, &up), 0.0);
        match srec.scatter {
            Scatter::Pdf(pdf) => {
                for _ in 0..100 {
                    let d = pdf.generate(&mut rng).unwrap();
                    assert!(d.y <= 1e-6);
                    let v = pdf.value(&d);
                    let s = Ray::new(&Point3f::zero(), &d, 0.0);
                    assert!((v - m.scattering_pdf(&r, &rec, &s)).abs() < 1e-4);
                }
            }
            Scatter::Specular(_) => panic!("lambertian scatter must not be specular"),
        }
    }
}
