pub mod stat_counter;
pub mod stats_accumulator;

pub use stat_counter::*;
pub use stats_accumulator::*;

/// Camera rays traced by the renderer.
pub static CAMERA_RAYS: StatCounter = StatCounter::new("Integrator/Camera rays traced");
/// Radiance samples whose NaN channels were replaced by zero.
pub static SANITIZED_SAMPLES: StatPercent =
    StatPercent::new("Integrator/Samples with NaN radiance");
/// Mixture-sampled directions whose density evaluated to zero.
pub static ZERO_DENSITY_SAMPLES: StatPercent =
    StatPercent::new("Integrator/Zero mixture density samples");
/// Light samples that could not be drawn from the shading point.
pub static FAILED_LIGHT_SAMPLES: StatCounter =
    StatCounter::new("Lights/Light samples with no solid angle");
pub static SOLID_ANGLE_ELLIPSE_SAMPLES: StatCounter =
    StatCounter::new("Lights/Solid angle ellipse samples");
pub static SPHERICAL_QUAD_SAMPLES: StatCounter =
    StatCounter::new("Lights/Spherical quad samples");

fn report_stats(accum: &mut StatsAccumulator) {
    for c in [
        &CAMERA_RAYS,
        &FAILED_LIGHT_SAMPLES,
        &SOLID_ANGLE_ELLIPSE_SAMPLES,
        &SPHERICAL_QUAD_SAMPLES,
    ] {
        accum.report_counter(c.name(), c.get());
    }
    for p in [&SANITIZED_SAMPLES, &ZERO_DENSITY_SAMPLES] {
        let (num, denom) = p.get();
        accum.report_percentage(p.name(), num, denom);
    }
}

pub fn print_stats() {
    let mut accum = StatsAccumulator::new();
    report_stats(&mut accum);
    println!("{}", accum);
}

pub fn clear_stats() {
    for c in [
        &CAMERA_RAYS,
        &FAILED_LIGHT_SAMPLES,
        &SOLID_ANGLE_ELLIPSE_SAMPLES,
        &SPHERICAL_QUAD_SAMPLES,
    ] {
        c.clear();
    }
    SANITIZED_SAMPLES.clear();
    ZERO_DENSITY_SAMPLES.clear();
}
