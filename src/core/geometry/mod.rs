pub mod bounds3;
pub mod frame;
pub mod misc;
pub mod ray;
pub mod vector2;
pub mod vector3;

pub use bounds3::*;
pub use frame::*;
pub use misc::*;
pub use ray::*;
pub use vector2::*;
pub use vector3::*;
