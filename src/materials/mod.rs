pub mod dielectric;
pub mod diffuse_light;
pub mod lambertian;
pub mod metal;

pub use dielectric::*;
pub use diffuse_light::*;
pub use lambertian::*;
pub use metal::*;
