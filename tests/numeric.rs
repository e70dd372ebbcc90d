use lightsample_r3::core::pbrt::*;

fn near_equal(a: Float, b: Float, e: Float) -> bool {
    (a - b).abs() < e
}

fn normal_density(x: Float) -> Float {
    return Float::exp(-0.5 * x * x) / Float::sqrt(2.0 * PI);
}

fn normal_cdf(x: f64) -> f64 {
    return 0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2));
}

// Simpson on the Gaussian density against the closed form through erf.
#[test]
fn simpson_normal_cdf() {
    for x in [0.25, 0.5, 1.0, 1.5, 2.0, 3.0] {
        let v = 0.5 + composite_simpson(normal_density, 0.0, x, 10);
        let expected = normal_cdf(x as f64) as Float;
        assert!(near_equal(v, expected, 5e-5), "x = {}: {} vs {}", x, v, expected);
    }
}

// Simpson error shrinks roughly as h^4.
#[test]
fn simpson_convergence() {
    let exact = 2.0;
    let e4 = (composite_simpson(Float::sin, 0.0, PI, 4) - exact).abs();
    let e8 = (composite_simpson(Float::sin, 0.0, PI, 8) - exact).abs();
    assert!(e4 < 1e-2);
    assert!(e8 < e4 / 8.0);
}

// Inverting a CDF built from Simpson with bisection, the way the
// solid-angle ellipse picks its azimuth.
#[test]
fn bisection_inverse_cdf() {
    let cdf = |x: Float| 0.5 + composite_simpson(normal_density, 0.0, x, 16);
    for p in [0.1, 0.3, 0.5, 0.8, 0.95] {
        let x = bisection(|x| cdf(x) - p, -4.0, 4.0, 40, 1e-6);
        assert!(near_equal(normal_cdf(x as f64) as Float, p, 1e-4), "p = {}", p);
    }
    // coarse defaults still land within a bracket width of the answer
    let opts = NumericOptions::default();
    let x = bisection(
        |x| cdf(x) - 0.8,
        -4.0,
        4.0,
        opts.bisection_iterations,
        opts.bisection_tolerance,
    );
    assert!(near_equal(x, 0.8416, 8.0 / 1024.0 + 1e-3));
}

#[test]
fn bisection_unbracketed() {
    // same sign at both ends
    assert_eq!(bisection(|x| x * x + 0.5, -2.0, 2.0, 10, 0.001), 0.0);
    // NaN at an end
    assert_eq!(bisection(|x| Float::sqrt(x), -1.0, 2.0, 10, 0.001), 0.0);
}

#[test]
fn numeric_options_json() {
    let opts: NumericOptions = serde_json::from_str(r#"{ "simpson_intervals": 32 }"#).unwrap();
    assert_eq!(opts.simpson_intervals, 32);
    assert_eq!(opts.bisection_iterations, 10);
    assert!(near_equal(opts.bisection_tolerance, 0.001, 1e-9));
}
