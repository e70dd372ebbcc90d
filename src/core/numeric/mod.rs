pub mod options;
pub mod quadrature;
pub mod root_finding;

pub use options::*;
pub use quadrature::*;
pub use root_finding::*;
