use crate::core::camera::Camera;
use crate::core::interaction::HitRecord;
use crate::core::light::LightSampler;
use crate::core::pbrt::*;
use crate::core::shape::Shape;

use std::sync::Arc;

/// Read-only data shared by every render thread.
pub struct Scene {
    pub world: Arc<dyn Shape>,
    /// Shape used for next-event estimation. It is usually the emitter
    /// itself plus any glass objects worth steering rays toward.
    pub light_shape: Arc<dyn LightSampler>,
    pub camera: Arc<dyn Camera>,
    pub world_bound: Bounds3f,
}

impl Scene {
    pub fn new(
        world: &Arc<dyn Shape>,
        light_shape: &Arc<dyn LightSampler>,
        camera: &Arc<dyn Camera>,
    ) -> Self {
        let world_bound = world.world_bound();
        Scene {
            world: world.clone(),
            light_shape: light_shape.clone(),
            camera: camera.clone(),
            world_bound,
        }
    }

    pub fn world_bound(&self) -> Bounds3f {
        return self.world_bound;
    }

    pub fn intersect(&self, ray: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        return self.world.intersect(ray, t_min, t_max);
    }

    pub fn intersect_p(&self, ray: &Ray, t_min: Float, t_max: Float) -> bool {
        return self.world.intersect_p(ray, t_min, t_max);
    }
}
