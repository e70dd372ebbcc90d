use super::shape::Shape;
use crate::core::interaction::HitRecord;
use crate::core::pbrt::*;
use std::sync::Arc;

/// Linear list of shapes; reports the closest hit among its members.
#[derive(Default, Clone)]
pub struct ShapeList {
    pub shapes: Vec<Arc<dyn Shape>>,
    bound: Option<Bounds3f>,
}

impl ShapeList {
    pub fn new(shapes: &[Arc<dyn Shape>]) -> Self {
        let mut list = ShapeList::default();
        for s in shapes {
            list.add(s.clone());
        }
        return list;
    }

    pub fn add(&mut self, shape: Arc<dyn Shape>) {
        let b = shape.world_bound();
        self.bound = match self.bound {
            Some(bound) => Some(Bounds3f::union(&bound, &b)),
            None => Some(b),
        };
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        return self.shapes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.shapes.is_empty();
    }
}

impl Shape for ShapeList {
    fn world_bound(&self) -> Bounds3f {
        return self.bound.unwrap_or_default();
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let mut closest = t_max;
        let mut result = None;
        for shape in self.shapes.iter() {
            if let Some(rec) = shape.intersect(r, t_min, closest) {
                closest = rec.t;
                result = Some(rec);
            }
        }
        return result;
    }

    fn intersect_p(&self, r: &Ray, t_min: Float, t_max: Float) -> bool {
        return self.shapes.iter().any(|s| s.intersect_p(r, t_min, t_max));
    }
}
