pub mod perspective;

pub use perspective::*;
