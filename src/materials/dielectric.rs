use crate::core::interaction::HitRecord;
use crate::core::material::*;
use crate::core::pbrt::*;

/// Clear dielectric. Chooses reflection or refraction stochastically with the
/// Schlick approximation of the Fresnel reflectance.
pub struct Dielectric {
    pub ref_idx: Float,
}

impl Dielectric {
    pub fn new(ref_idx: Float) -> Self {
        Dielectric { ref_idx }
    }
}

impl Material for Dielectric {
    fn scatter(&self, r: &Ray, rec: &HitRecord, rng: &mut RNG) -> Option<ScatterRecord> {
        let d = r.d.normalize();
        let d_dot_n = Vector3f::dot(&d, &rec.normal);
        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            let cosine = d_dot_n;
            let cosine = Float::sqrt(Float::max(
                0.0,
                1.0 - self.ref_idx * self.ref_idx * (1.0 - cosine * cosine),
            ));
            (-rec.normal, self.ref_idx, cosine)
        } else {
            (rec.normal, 1.0 / self.ref_idx, -d_dot_n)
        };

        let attenuation = Spectrum::one();
        let reflected = reflect(&d, &rec.normal);
        let direction = match refract(&d, &outward_normal, ni_over_nt) {
            Some(refracted) => {
                if rng.uniform_float() < schlick(cosine, self.ref_idx) {
                    reflected
                } else {
                    refracted
                }
            }
            None => reflected,
        };
        let scattered = Ray::new(&rec.p, &direction, r.time);
        return Some(ScatterRecord::specular(&attenuation, &scattered));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let m = Dielectric::new(1.5);
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let rec = HitRecord::new(1.0, &Point3f::zero(), &n, 0.0, 0.0, None);
        // head-on from outside: refracts straight through most of the time
        let r = Ray::new(&Point3f::new(0.0, 1.0, 0.0), &Vector3f::new(0.0, -1.0, 0.0), 0.0);
        let mut rng = RNG::new_sequence(6);
        let mut through = 0;
        for _ in 0..1000 {
            let srec = m.scatter(&r, &rec, &mut rng).unwrap();
            assert!(srec.is_specular());
            assert_eq!(srec.attenuation, Spectrum::one());
            if let Scatter::Specular(s) = srec.scatter {
                if s.d.y < 0.0 {
                    through += 1;
                }
            }
        }
        // Schlick reflectance at normal incidence is 0.04
        assert!(through > 920 && through < 990);
    }

    #[test]
    fn test_002() {
        let m = Dielectric::new(1.5);
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let rec = HitRecord::new(1.0, &Point3f::zero(), &n, 0.0, 0.0, None);
        // grazing from inside: total internal reflection
        let r = Ray::new(
            &Point3f::new(-1.0, -0.1, 0.0),
            &Vector3f::new(1.0, 0.1, 0.0),
            0.0,
        );
        let srec = m.scatter(&r, &rec, &mut RNG::new()).unwrap();
        if let Scatter::Specular(s) = srec.scatter {
            assert!(s.d.y < 0.0);
        }
    }
}
