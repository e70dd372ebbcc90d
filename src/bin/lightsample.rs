use clap::*;

use lightsample_r3::core::error::*;
use lightsample_r3::core::imageio::*;
use lightsample_r3::core::integrator::render;
use lightsample_r3::core::options::RenderOptions;
use lightsample_r3::core::stats;
use lightsample_r3::integrators::MixtureIntegrator;
use lightsample_r3::scenes::*;
use std::env;
use std::path::PathBuf;
use std::process;
use std::thread::available_parallelism;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// JSON file with render options. Flags below override its values.
    #[arg(short, long, value_name = "filename")]
    pub config: Option<PathBuf>,

    /// Write the final image to the given filename.
    #[arg(short, long, value_name = "filename")]
    pub outfile: Option<String>,

    /// Scene to render.
    #[arg(long, value_name = "name")]
    pub scene: Option<String>,

    /// Image width in pixels.
    #[arg(long, value_name = "num")]
    pub width: Option<usize>,

    /// Image height in pixels.
    #[arg(long, value_name = "num")]
    pub height: Option<usize>,

    /// Set samples per pixel.
    #[arg(short = 's', long = "pixelsamples", value_name = "num")]
    pub pixelsamples: Option<usize>,

    /// Maximum number of bounces.
    #[arg(long = "maxdepth", value_name = "num")]
    pub max_depth: Option<u32>,

    /// Seed of the per-row random sequences.
    #[arg(long, value_name = "num")]
    pub seed: Option<u64>,

    /// Use specified number of threads for rendering.
    #[arg(short = 'j', long = "nthreads", value_name = "num")]
    pub nthreads: Option<usize>,

    /// Subintervals of the solid angle quadrature.
    #[arg(long = "simpson-intervals", value_name = "num")]
    pub simpson_intervals: Option<u32>,

    /// Iterations of the azimuth root search.
    #[arg(long = "bisection-iterations", value_name = "num")]
    pub bisection_iterations: Option<u32>,

    /// Reference image; the RMSE against it is logged after rendering.
    #[arg(long, value_name = "filename")]
    pub reference: Option<String>,

    /// List the available scenes and exit.
    #[arg(long, default_value = "false")]
    pub list_scenes: bool,

    /// Suppress all text output other than error messages.
    #[clap(long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn load_options(opts: &CommandOptions) -> Result<RenderOptions, RenderError> {
    let mut ro = match opts.config.as_ref() {
        Some(path) => RenderOptions::from_file(path)?,
        None => RenderOptions::default(),
    };
    if let Some(outfile) = opts.outfile.as_ref() {
        ro.outfile = outfile.clone();
    }
    if let Some(scene) = opts.scene.as_ref() {
        ro.scene = scene.clone();
    }
    if let Some(width) = opts.width {
        ro.width = width;
    }
    if let Some(height) = opts.height {
        ro.height = height;
    }
    if let Some(spp) = opts.pixelsamples {
        ro.spp = usize::max(1, spp);
    }
    if let Some(max_depth) = opts.max_depth {
        ro.max_depth = max_depth;
    }
    if let Some(seed) = opts.seed {
        ro.seed = seed;
    }
    if let Some(n) = opts.nthreads {
        ro.threads = Some(usize::max(1, n));
    }
    if let Some(n) = opts.simpson_intervals {
        ro.numeric.simpson_intervals = n;
    }
    if let Some(n) = opts.bisection_iterations {
        ro.numeric.bisection_iterations = n;
    }
    if let Some(reference) = opts.reference.as_ref() {
        ro.reference = Some(reference.clone());
    }
    ro.quiet = ro.quiet || opts.quiet;
    ro.validate()?;
    return Ok(ro);
}

fn compare_with_reference(outfile: &str, reference: &str) -> Result<f64, RenderError> {
    let a = read_image_rgb(outfile)?;
    let b = read_image_rgb(reference)?;
    return rmse(&a, &b);
}

fn render_scene(opts: &RenderOptions) -> Result<(), RenderError> {
    stats::clear_stats();
    if !opts.quiet {
        let nthreads = available_parallelism().map(|n| n.get()).unwrap_or(1);
        let version = env!("CARGO_PKG_VERSION");
        println!("lightsample-r3 version {} [Detected {} cores]", version, nthreads);
        println!();
    }

    let scene = create_scene(&opts.scene, opts)?;
    let integrator = MixtureIntegrator::new(opts.max_depth);
    let film = render(&integrator, &scene, opts)?;
    write_image(&opts.outfile, &film)?;
    info!("Wrote {}", opts.outfile);

    if let Some(reference) = opts.reference.as_ref() {
        let e = compare_with_reference(&opts.outfile, reference)?;
        info!("RMSE against {}: {:.6}", reference, e);
        if !opts.quiet {
            println!("RMSE: {:.6}", e);
        }
    }

    if !opts.quiet {
        println!();
        stats::print_stats();
        stats::clear_stats();
    }
    return Ok(());
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);

    if opts.list_scenes {
        for name in SCENE_NAMES {
            println!("{}", name);
        }
        return;
    }

    let ro = match load_options(&opts) {
        Ok(ro) => ro,
        Err(e) => {
            error!("{}", e);
            println!("{}", CommandOptions::command().render_usage());
            process::exit(-1);
        }
    };

    if let Err(e) = render_scene(&ro) {
        error!("{}", e);
        process::exit(-1);
    }
}
