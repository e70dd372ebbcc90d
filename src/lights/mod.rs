pub mod light_shape;

pub use light_shape::*;
