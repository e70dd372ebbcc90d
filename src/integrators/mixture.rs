use crate::core::integrator::*;
use crate::core::light::LightSampler;
use crate::core::material::*;
use crate::core::pbrt::*;
use crate::core::pdf::*;
use crate::core::scene::Scene;
use crate::core::shape::Shape;

/// Recursive path tracer that samples every diffuse bounce from an equal
/// mixture of the light-shape density and the material's own density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureIntegrator {
    pub max_depth: u32,
    /// Lower bound of the hit interval, keeps secondary rays off their origin.
    pub t_min: Float,
}

impl Default for MixtureIntegrator {
    fn default() -> Self {
        MixtureIntegrator {
            max_depth: 50,
            t_min: RAY_EPSILON,
        }
    }
}

impl MixtureIntegrator {
    pub fn new(max_depth: u32) -> Self {
        MixtureIntegrator {
            max_depth,
            ..Default::default()
        }
    }

    /// Radiance arriving along `ray` after `depth` bounces. Misses are black.
    ///
    /// A zero mixture density is not guarded against here; the caller
    /// scrubs the resulting NaN with `sanitize_radiance`.
    pub fn radiance(
        &self,
        ray: &Ray,
        world: &dyn Shape,
        light_shape: &dyn LightSampler,
        depth: u32,
        rng: &mut RNG,
    ) -> Spectrum {
        let rec = match world.intersect(ray, self.t_min, Float::INFINITY) {
            Some(rec) => rec,
            None => return Spectrum::zero(),
        };
        let material = match rec.material {
            Some(m) => m,
            None => return Spectrum::zero(),
        };
        let emitted = material.emitted(ray, &rec, rec.u, rec.v, &rec.p);
        if depth >= self.max_depth {
            return emitted;
        }
        let srec = match material.scatter(ray, &rec, rng) {
            Some(srec) => srec,
            None => return emitted,
        };
        match srec.scatter {
            Scatter::Specular(specular) => {
                return srec.attenuation * self.radiance(&specular, world, light_shape, depth + 1, rng);
            }
            Scatter::Pdf(surface_pdf) => {
                let light_pdf = Pdf::from(LightPdf::new(light_shape, &rec.p));
                let p = Pdf::from(MixturePdf::new(&light_pdf, &surface_pdf));
                let direction = match p.generate(rng) {
                    Some(d) => d,
                    None => {
                        stats::FAILED_LIGHT_SAMPLES.add(1);
                        return emitted;
                    }
                };
                let scattered = Ray::new(&rec.p, &direction, ray.time);
                let pdf_val = p.value(&direction);
                stats::ZERO_DENSITY_SAMPLES.add_denom(1);
                if pdf_val == 0.0 {
                    stats::ZERO_DENSITY_SAMPLES.add_num(1);
                }
                let li = self.radiance(&scattered, world, light_shape, depth + 1, rng);
                return emitted
                    + srec.attenuation * material.scattering_pdf(ray, &rec, &scattered) * li
                        / pdf_val;
            }
        }
    }
}

impl Integrator for MixtureIntegrator {
    fn li(&self, ray: &Ray, scene: &Scene, rng: &mut RNG) -> Spectrum {
        return self.radiance(
            ray,
            scene.world.as_ref(),
            scene.light_shape.as_ref(),
            0,
            rng,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interaction::HitRecord;
    use crate::lights::LightShape;
    use crate::materials::*;
    use crate::shapes::rect::{AaRect, RectPlane};
    use crate::shapes::sphere::Sphere;

    use std::sync::Arc;

    #[test]
    fn test_001() {
        // a bare emitter seen head-on returns its emission
        let light: Arc<dyn Material> =
            Arc::new(DiffuseLight::new(&Spectrum::from_value(15.0)));
        let world = AaRect::xz(-1.0, 1.0, -1.0, 1.0, 5.0, &light).flip_normal();
        let light_shape = LightShape::from(AaRect::new(
            RectPlane::XZ,
            -1.0,
            1.0,
            -1.0,
            1.0,
            5.0,
            None,
        ));
        let integrator = MixtureIntegrator::default();
        let r = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 1.0, 0.0), 0.0);
        let l = integrator.radiance(&r, &world, &light_shape, 0, &mut RNG::new());
        assert_eq!(l, Spectrum::from_value(15.0));
        // the back face is dark
        let r = Ray::new(&Point3f::new(0.0, 10.0, 0.0), &Vector3f::new(0.0, -1.0, 0.0), 0.0);
        let l = integrator.radiance(&r, &world, &light_shape, 0, &mut RNG::new());
        assert!(l.is_black());
        let miss = Ray::new(&Point3f::zero(), &Vector3f::new(1.0, 0.0, 0.0), 0.0);
        assert!(integrator.radiance(&miss, &world, &light_shape, 0, &mut RNG::new()).is_black());
    }

    #[test]
    fn test_002() {
        // past the depth limit only emission is returned
        let white: Arc<dyn Material> =
            Arc::new(Lambertian::new(&Spectrum::from_value(0.73)));
        let world = Sphere::new(&Point3f::new(0.0, 0.0, -5.0), 1.0, Some(white));
        let light_shape = LightShape::from(Sphere::new(&Point3f::new(0.0, 5.0, -5.0), 1.0, None));
        let integrator = MixtureIntegrator::new(0);
        let r = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, -1.0), 0.0);
        let l = integrator.radiance(&r, &world, &light_shape, 0, &mut RNG::new());
        assert!(l.is_black());
    }

    #[test]
    fn test_003() {
        // a hit without a material is black
        struct Bare;
        impl Shape for Bare {
            fn world_bound(&self) -> Bounds3f {
                return Bounds3f::new(&Point3f::new(-1.0, -1.0, -1.0), &Point3f::new(1.0, 1.0, 1.0));
            }
            fn intersect(&self, r: &Ray, _t_min: Float, _t_max: Float) -> Option<HitRecord<'_>> {
                let p = r.position(1.0);
                return Some(HitRecord::new(1.0, &p, &Normal3f::new(0.0, 0.0, 1.0), 0.0, 0.0, None));
            }
        }
        let light_shape = LightShape::List(vec![]);
        let integrator = MixtureIntegrator::default();
        let r = Ray::new(&Point3f::zero(), &Vector3f::new(0.0, 0.0, -1.0), 0.0);
        assert!(integrator.radiance(&r, &Bare, &light_shape, 0, &mut RNG::new()).is_black());
    }

    // emits and scatters, so the cutoff is visible in the result
    struct GlowingWall {
        surface: Lambertian,
    }

    impl Material for GlowingWall {
        fn emitted(&self, _r: &Ray, _rec: &HitRecord, _u: Float, _v: Float, _p: &Point3f) -> Spectrum {
            return Spectrum::from_value(3.0);
        }

        fn scatter(&self, r: &Ray, rec: &HitRecord, rng: &mut RNG) -> Option<ScatterRecord> {
            return self.surface.scatter(r, rec, rng);
        }

        fn scattering_pdf(&self, r: &Ray, rec: &HitRecord, scattered: &Ray) -> Float {
            return self.surface.scattering_pdf(r, rec, scattered);
        }
    }

    #[test]
    fn test_004() {
        let wall: Arc<dyn Material> = Arc::new(GlowingWall {
            surface: Lambertian::new(&Spectrum::from_value(0.5)),
        });
        // seen from inside the sphere every bounce hits the wall again
        let world = Sphere::new(&Point3f::zero(), 5.0, Some(wall));
        let light_shape = LightShape::from(Sphere::new(&Point3f::zero(), 0.5, None));
        let integrator = MixtureIntegrator::default();
        assert_eq!(integrator.max_depth, 50);
        let r = Ray::new(&Point3f::new(0.0, 0.0, 3.0), &Vector3f::new(0.0, 0.0, 1.0), 0.0);

        let mut rng = RNG::new_sequence(4);
        for _ in 0..16 {
            let l = integrator.radiance(&r, &world, &light_shape, 50, &mut rng);
            assert_eq!(l, Spectrum::from_value(3.0));
        }

        // one bounce earlier the scattered term is added on top
        let l = integrator.radiance(&r, &world, &light_shape, 49, &mut rng);
        assert!(l[0] > 3.0, "{:?}", l);
    }
}
