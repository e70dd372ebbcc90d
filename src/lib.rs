//! Light-sampling core of a Monte Carlo path tracer.
//!
//! Area- and solid-angle-uniform sampling for elliptical and rectangular
//! lights, the PDF mixture used for next-event estimation, and a recursive
//! radiance integrator that consumes them.

pub mod cameras;
pub mod core;
pub mod integrators;
pub mod lights;
pub mod materials;
pub mod scenes;
pub mod shapes;
