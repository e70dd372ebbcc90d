pub mod hit_record;

pub use hit_record::*;
