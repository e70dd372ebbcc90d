pub mod boxes;
pub mod ellipse;
pub mod ellipse_solid_angle;
pub mod flip_face;
pub mod rect;
pub mod rect_solid_angle;
pub mod sphere;
pub mod transform;
