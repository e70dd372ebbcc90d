pub mod mixture;

pub use mixture::*;
