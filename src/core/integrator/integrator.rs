use crate::core::camera::CameraSample;
use crate::core::film::Film;
use crate::core::misc::ProgressReporter;
use crate::core::options::RenderOptions;
use crate::core::pbrt::*;
use crate::core::scene::Scene;

use log::*;
use rayon::prelude::*;
use std::time::Instant;

pub trait Integrator: Send + Sync {
    /// Radiance arriving along `ray`.
    fn li(&self, ray: &Ray, scene: &Scene, rng: &mut RNG) -> Spectrum;
}

/// NaN channels are zeroed here, after the estimate is complete, and the
/// event is counted so the instability stays visible in the statistics.
pub fn sanitize_radiance(l: &Spectrum) -> Spectrum {
    stats::SANITIZED_SAMPLES.add_denom(1);
    if l.has_nans() {
        stats::SANITIZED_SAMPLES.add_num(1);
        return l.sanitized();
    }
    return *l;
}

fn render_row(
    integrator: &dyn Integrator,
    scene: &Scene,
    opts: &RenderOptions,
    row: usize,
) -> Vec<Spectrum> {
    let nx = opts.width;
    let ny = opts.height;
    let mut rng = RNG::with_seed(opts.seed, row as u64);
    let (t0, t1) = scene.camera.get_shutter();
    // rows are stored top first, film coordinates grow upward
    let j = (ny - 1 - row) as Float;
    let mut pixels = Vec::with_capacity(nx);
    for i in 0..nx {
        let mut col = Spectrum::zero();
        for _ in 0..opts.spp {
            let u = (i as Float + rng.uniform_float()) / nx as Float;
            let v = (j + rng.uniform_float()) / ny as Float;
            let sample = CameraSample {
                p_film: Point2f::new(u, v),
                p_lens: rng.uniform_point2(),
                time: rng.uniform_float_range(t0, t1),
            };
            let ray = scene.camera.generate_ray(&sample);
            stats::CAMERA_RAYS.add(1);
            let l = integrator.li(&ray, scene, &mut rng);
            col += sanitize_radiance(&l);
        }
        pixels.push(col / opts.spp as Float);
    }
    return pixels;
}

/// Renders every pixel of `scene`. Rows are independent units of work and
/// share only the read-only scene.
pub fn render(
    integrator: &dyn Integrator,
    scene: &Scene,
    opts: &RenderOptions,
) -> Result<Film, RenderError> {
    opts.validate()?;
    let start = Instant::now();
    info!(
        "Rendering {}x{} at {} spp, scene \"{}\"",
        opts.width, opts.height, opts.spp, opts.scene
    );

    let reporter = ProgressReporter::new(opts.height, "Rendering", opts.quiet);
    let render_rows = || -> Vec<Vec<Spectrum>> {
        (0..opts.height)
            .into_par_iter()
            .map(|row| {
                let pixels = render_row(integrator, scene, opts, row);
                reporter.update(1);
                pixels
            })
            .collect()
    };
    let rows = match opts.threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| RenderError::error(&e.to_string()))?;
            pool.install(render_rows)
        }
        None => render_rows(),
    };
    reporter.done();

    let (nans, total) = stats::SANITIZED_SAMPLES.get();
    if nans > 0 {
        warn!(
            "{} of {} radiance samples contained NaN and were set to zero",
            nans, total
        );
    }
    info!("Render time: {:.3} s", start.elapsed().as_secs_f64());
    return Ok(Film::from_rows(opts.width, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let l = Spectrum::new(Float::NAN, 0.5, 0.25);
        let s = sanitize_radiance(&l);
        assert_eq!(s, Spectrum::new(0.0, 0.5, 0.25));
        let l = Spectrum::new(1.0, 0.5, 0.25);
        assert_eq!(sanitize_radiance(&l), l);
    }
}
