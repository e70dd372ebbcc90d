pub mod pdf;

pub use pdf::*;
