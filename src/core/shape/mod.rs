pub mod shape;
pub mod shape_list;

pub use shape::*;
pub use shape_list::*;
