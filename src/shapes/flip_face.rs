use crate::core::interaction::HitRecord;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

/// Reverses the geometric normal of the wrapped shape.
pub struct FlipFace {
    pub shape: Arc<dyn Shape>,
}

impl FlipFace {
    pub fn new(shape: &Arc<dyn Shape>) -> Self {
        FlipFace {
            shape: shape.clone(),
        }
    }
}

impl Shape for FlipFace {
    fn world_bound(&self) -> Bounds3f {
        return self.shape.world_bound();
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let mut rec = self.shape.intersect(r, t_min, t_max)?;
        rec.normal = -rec.normal;
        return Some(rec);
    }

    fn intersect_p(&self, r: &Ray, t_min: Float, t_max: Float) -> bool {
        return self.shape.intersect_p(r, t_min, t_max);
    }
}
