pub mod types;

pub use crate::core::base::*;
pub use crate::core::interaction::*;
pub use crate::core::numeric::*;
pub use crate::core::rng::*;
pub use crate::core::sampling::*;
pub use crate::core::spectrum::*;
pub use crate::core::stats;
pub use types::*;
