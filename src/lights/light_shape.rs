use crate::core::interaction::HitRecord;
use crate::core::light::*;
use crate::core::pbrt::*;
use crate::core::shape::*;
use crate::shapes::ellipse::Ellipse;
use crate::shapes::ellipse_solid_angle::SolidAngleEllipse;
use crate::shapes::rect::AaRect;
use crate::shapes::rect_solid_angle::SolidAngleRect;
use crate::shapes::sphere::Sphere;

/// The closed set of shapes the integrator can importance sample.
#[derive(Clone)]
pub enum LightShape {
    Ellipse(Ellipse),
    SolidAngleEllipse(SolidAngleEllipse),
    Rect(AaRect),
    SolidAngleRect(SolidAngleRect),
    Sphere(Sphere),
    /// Picks one member uniformly; the density is the mean of the members'.
    List(Vec<LightShape>),
}

impl LightShape {
    pub fn name(&self) -> &'static str {
        match self {
            LightShape::Ellipse(_) => "ellipse",
            LightShape::SolidAngleEllipse(_) => "ellipse (solid angle)",
            LightShape::Rect(_) => "rect",
            LightShape::SolidAngleRect(_) => "rect (spherical quad)",
            LightShape::Sphere(_) => "sphere",
            LightShape::List(_) => "list",
        }
    }
}

impl Shape for LightShape {
    fn world_bound(&self) -> Bounds3f {
        match self {
            LightShape::Ellipse(s) => s.world_bound(),
            LightShape::SolidAngleEllipse(s) => s.world_bound(),
            LightShape::Rect(s) => s.world_bound(),
            LightShape::SolidAngleRect(s) => s.world_bound(),
            LightShape::Sphere(s) => s.world_bound(),
            LightShape::List(v) => {
                let mut bound: Option<Bounds3f> = None;
                for s in v.iter() {
                    let b = s.world_bound();
                    bound = match bound {
                        Some(bound) => Some(Bounds3f::union(&bound, &b)),
                        None => Some(b),
                    };
                }
                bound.unwrap_or_default()
            }
        }
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        match self {
            LightShape::Ellipse(s) => s.intersect(r, t_min, t_max),
            LightShape::SolidAngleEllipse(s) => s.intersect(r, t_min, t_max),
            LightShape::Rect(s) => s.intersect(r, t_min, t_max),
            LightShape::SolidAngleRect(s) => s.intersect(r, t_min, t_max),
            LightShape::Sphere(s) => s.intersect(r, t_min, t_max),
            LightShape::List(v) => {
                let mut closest = t_max;
                let mut result = None;
                for s in v.iter() {
                    if let Some(rec) = s.intersect(r, t_min, closest) {
                        closest = rec.t;
                        result = Some(rec);
                    }
                }
                result
            }
        }
    }
}

impl LightSampler for LightShape {
    fn sample(&self, o: &Point3f, rng: &mut RNG) -> Option<LightSample> {
        match self {
            LightShape::Ellipse(s) => s.sample(o, rng),
            LightShape::SolidAngleEllipse(s) => s.sample(o, rng),
            LightShape::Rect(s) => s.sample(o, rng),
            LightShape::SolidAngleRect(s) => s.sample(o, rng),
            LightShape::Sphere(s) => s.sample(o, rng),
            LightShape::List(v) => {
                if v.is_empty() {
                    return None;
                }
                let index = rng.uniform_uint32_threshold(v.len() as u32) as usize;
                let s = v[index].sample(o, rng)?;
                Some(LightSample::new(&s.wi, self.pdf(o, &s.wi)))
            }
        }
    }

    fn pdf(&self, o: &Point3f, wi: &Vector3f) -> Float {
        match self {
            LightShape::Ellipse(s) => s.pdf(o, wi),
            LightShape::SolidAngleEllipse(s) => s.pdf(o, wi),
            LightShape::Rect(s) => s.pdf(o, wi),
            LightShape::SolidAngleRect(s) => s.pdf(o, wi),
            LightShape::Sphere(s) => s.pdf(o, wi),
            LightShape::List(v) => {
                if v.is_empty() {
                    return 0.0;
                }
                let sum: Float = v.iter().map(|s| s.pdf(o, wi)).sum();
                sum / v.len() as Float
            }
        }
    }
}

impl From<Ellipse> for LightShape {
    fn from(s: Ellipse) -> Self {
        LightShape::Ellipse(s)
    }
}

impl From<SolidAngleEllipse> for LightShape {
    fn from(s: SolidAngleEllipse) -> Self {
        LightShape::SolidAngleEllipse(s)
    }
}

impl From<AaRect> for LightShape {
    fn from(s: AaRect) -> Self {
        LightShape::Rect(s)
    }
}

impl From<SolidAngleRect> for LightShape {
    fn from(s: SolidAngleRect) -> Self {
        LightShape::SolidAngleRect(s)
    }
}

impl From<Sphere> for LightShape {
    fn from(s: Sphere) -> Self {
        LightShape::Sphere(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_list() -> LightShape {
        let rect = SolidAngleRect::xz(213.0, 343.0, 227.0, 332.0, 554.0, None).flip_normal();
        let sphere = Sphere::new(&Point3f::new(190.0, 90.0, 190.0), 90.0, None);
        return LightShape::List(vec![rect.into(), sphere.into()]);
    }

    #[test]
    fn test_001() {
        let l = light_list();
        let o = Point3f::new(400.0, 300.0, 400.0);
        let mut rng = RNG::new_sequence(3);
        for _ in 0..100 {
            let s = l.sample(&o, &mut rng).unwrap();
            assert!(s.pdf > 0.0);
            assert!((l.pdf(&o, &s.wi) - s.pdf).abs() <= 1e-4 * s.pdf);
        }
    }

    #[test]
    fn test_002() {
        let l = light_list();
        let b = l.world_bound();
        assert!(b.inside(&Point3f::new(190.0, 0.0, 190.0)));
        assert!(b.inside(&Point3f::new(343.0, 554.0, 332.0)));
        assert_eq!(l.name(), "list");
        assert!(LightShape::List(vec![])
            .sample(&Point3f::zero(), &mut RNG::new())
            .is_none());
    }
}
