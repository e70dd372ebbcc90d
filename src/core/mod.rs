pub mod base;
pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod imageio;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod material;
pub mod misc;
pub mod numeric;
pub mod options;
pub mod pbrt;
pub mod pdf;
pub mod prelude;
pub mod rng;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod spectrum;
pub mod stats;
