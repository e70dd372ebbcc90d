pub mod read_image;
pub mod rmse;
pub mod write_image;

pub use read_image::*;
pub use rmse::*;
pub use write_image::*;
