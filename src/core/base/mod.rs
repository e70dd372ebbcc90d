pub mod constants;

pub use crate::core::error::{RenderError, RenderErrorKind};
pub use crate::core::geometry::frame::Frame;
pub use crate::core::geometry::misc::*;
pub use crate::core::misc::misc::*;
pub use constants::*;
