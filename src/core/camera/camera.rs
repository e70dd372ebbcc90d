use crate::core::pbrt::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct CameraSample {
    /// Normalized film position, `(0, 0)` at the lower-left corner.
    pub p_film: Point2f,
    pub p_lens: Point2f,
    pub time: Float,
}

pub trait Camera: Sync + Send {
    fn generate_ray(&self, sample: &CameraSample) -> Ray;

    fn get_shutter(&self) -> (Float, Float);
}
