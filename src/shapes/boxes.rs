use super::flip_face::FlipFace;
use super::rect::AaRect;
use crate::core::interaction::HitRecord;
use crate::core::material::Material;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

/// Closed axis-aligned box made of six outward-facing rectangles.
pub struct AxisBox {
    pub p_min: Point3f,
    pub p_max: Point3f,
    pub sides: ShapeList,
}

impl AxisBox {
    pub fn new(p0: &Point3f, p1: &Point3f, m: &Arc<dyn Material>) -> Self {
        let lo = Point3f::min(p0, p1);
        let hi = Point3f::max(p0, p1);
        let flipped = |s: AaRect| -> Arc<dyn Shape> {
            let s: Arc<dyn Shape> = Arc::new(s);
            Arc::new(FlipFace::new(&s))
        };
        let sides: Vec<Arc<dyn Shape>> = vec![
            Arc::new(AaRect::xy(lo.x, hi.x, lo.y, hi.y, hi.z, m)),
            flipped(AaRect::xy(lo.x, hi.x, lo.y, hi.y, lo.z, m)),
            Arc::new(AaRect::xz(lo.x, hi.x, lo.z, hi.z, hi.y, m)),
            flipped(AaRect::xz(lo.x, hi.x, lo.z, hi.z, lo.y, m)),
            Arc::new(AaRect::yz(lo.y, hi.y, lo.z, hi.z, hi.x, m)),
            flipped(AaRect::yz(lo.y, hi.y, lo.z, hi.z, lo.x, m)),
        ];
        AxisBox {
            p_min: lo,
            p_max: hi,
            sides: ShapeList::new(&sides),
        }
    }
}

impl Shape for AxisBox {
    fn world_bound(&self) -> Bounds3f {
        return Bounds3f::new(&self.p_min, &self.p_max);
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        return self.sides.intersect(r, t_min, t_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gray;
    impl Material for Gray {}

    #[test]
    fn test_001() {
        let m: Arc<dyn Material> = Arc::new(Gray);
        let b = AxisBox::new(&Point3f::new(0.0, 0.0, 0.0), &Point3f::new(1.0, 2.0, 3.0), &m);
        let r = Ray::new(&Point3f::new(0.5, 1.0, -5.0), &Vector3f::new(0.0, 0.0, 1.0), 0.0);
        let rec = b.intersect(&r, 0.001, Float::INFINITY).unwrap();
        assert!((rec.t - 5.0).abs() < 1e-5);
        // the near face points out of the box, toward the ray origin
        assert!(rec.normal.z < 0.0);
        assert!(rec.material.is_some());
        let r = Ray::new(&Point3f::new(0.5, 1.0, 1.0), &Vector3f::new(1.0, 0.0, 0.0), 0.0);
        let rec = b.intersect(&r, 0.001, Float::INFINITY).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-5);
        assert!(rec.normal.x > 0.0);
    }
}
