pub use crate::core::camera::*;
pub use crate::core::film::*;
pub use crate::core::imageio::*;
pub use crate::core::integrator::*;
pub use crate::core::light::*;
pub use crate::core::material::*;
pub use crate::core::options::*;
pub use crate::core::pbrt::*;
pub use crate::core::pdf::*;
pub use crate::core::scene::*;
pub use crate::core::shape::*;
