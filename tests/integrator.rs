use lightsample_r3::core::prelude::*;
use lightsample_r3::integrators::MixtureIntegrator;
use lightsample_r3::scenes::*;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

fn small_options(scene: &str, size: usize, spp: usize) -> RenderOptions {
    RenderOptions {
        width: size,
        height: size,
        spp,
        scene: String::from(scene),
        threads: Some(2),
        quiet: true,
        ..Default::default()
    }
}

fn render_scene(opts: &RenderOptions) -> Film {
    let scene = create_scene(&opts.scene, opts).unwrap();
    let integrator = MixtureIntegrator::new(opts.max_depth);
    return render(&integrator, &scene, opts).unwrap();
}

// Pixels that see only the emitter return exactly its radiance, and
// nothing leaves the render as NaN.
#[test]
fn ellipse_light_visible_from_camera() {
    let opts = small_options("cornell-ellipse-sa", 64, 2);
    let film = render_scene(&opts);
    assert_eq!(film.width, 64);
    assert_eq!(film.height, 64);
    let p = film.get_pixel(32, 9);
    for c in 0..3 {
        assert!(near_equal(p[c], 15.0, 1e-3), "{:?}", p);
    }
    let mut sum = 0.0;
    for p in film.pixels() {
        assert!(!p.has_nans());
        sum += p.y();
    }
    assert!(sum / film.pixels().len() as Float > 0.05);
}

// Rows own their random streams, so renders are reproducible.
#[test]
fn render_is_deterministic() {
    let opts = small_options("cornell-rect-sa", 16, 1);
    let a = render_scene(&opts);
    let b = render_scene(&opts);
    assert_eq!(a.pixels(), b.pixels());
    let opts = RenderOptions { seed: 1, ..opts };
    let c = render_scene(&opts);
    assert_ne!(a.pixels(), c.pixels());
}

#[test]
fn every_scene_renders() {
    for name in SCENE_NAMES {
        let opts = small_options(name, 8, 1);
        let film = render_scene(&opts);
        assert!(film.pixels().iter().all(|p| !p.has_nans()), "{}", name);
    }
}

// Writes an image, reads it back and compares it with itself and with a
// darker copy.
#[test]
fn image_roundtrip_and_rmse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let path = path.to_str().unwrap();
    let mut film = Film::new(4, 3);
    film.set_pixel(1, 1, &Spectrum::new(0.25, 0.5, 1.0));
    write_image(path, &film).unwrap();
    let a = read_image_rgb(path).unwrap();
    assert_eq!((a.width, a.height), (4, 3));
    assert_eq!(&a.data[15..18], &[127, 181, 255]);
    assert_eq!(rmse(&a, &a).unwrap(), 0.0);

    let other = dir.path().join("other.ppm");
    let other = other.to_str().unwrap();
    write_image(other, &Film::new(4, 3)).unwrap();
    let b = read_image_rgb(other).unwrap();
    let e = rmse(&a, &b).unwrap();
    let expected = ((127.0f64 * 127.0 + 181.0 * 181.0 + 255.0 * 255.0) / 12.0).sqrt();
    assert!((e - expected).abs() < 1e-9);

    let small = dir.path().join("small.png");
    let small = small.to_str().unwrap();
    write_image(small, &Film::new(2, 2)).unwrap();
    assert!(rmse(&a, &read_image_rgb(small).unwrap()).is_err());
    assert!(read_image_rgb("missing.png").is_err());
}

#[test]
fn options_from_json() {
    let opts = RenderOptions::from_json(
        r#"{ "width": 64, "scene": "cornell", "numeric": { "bisection_iterations": 20 } }"#,
    )
    .unwrap();
    assert_eq!(opts.width, 64);
    assert_eq!(opts.height, 500);
    assert_eq!(opts.scene, "cornell");
    assert_eq!(opts.numeric.bisection_iterations, 20);
    assert_eq!(opts.numeric.simpson_intervals, 10);
    assert!(RenderOptions::from_json(r#"{ "spp": 0 }"#).is_err());
    assert!(RenderOptions::from_json("{ not json").is_err());
    assert!(create_scene("nope", &opts).is_err());
}
