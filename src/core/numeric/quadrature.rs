use crate::core::pbrt::types::Float;

/// Composite Simpson's rule for the integral of `f` over `[a, b]` with `n`
/// subintervals. Each subinterval is evaluated at both ends and its midpoint.
///
/// `n == 0` is treated as a single subinterval. Reversed bounds give the
/// negated integral.
pub fn composite_simpson<F>(f: F, a: Float, b: Float, n: u32) -> Float
where
    F: Fn(Float) -> Float,
{
    let n = u32::max(n, 1);
    let step = (b - a) / n as Float;
    let half = step * 0.5;
    let mut s1 = f(a + half);
    let mut s2 = 0.0;
    for i in 1..n {
        let x = a + step * i as Float;
        s1 += f(x + half);
        s2 += f(x);
    }
    let f_a = f(a);
    let f_b = f(b);
    return (step / 6.0) * (f_a + f_b + 4.0 * s1 + 2.0 * s2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        // exact for cubics
        let v = composite_simpson(|x| x * x * x - 2.0 * x + 1.0, 0.0, 2.0, 1);
        assert!((v - 2.0).abs() < 1e-5);
        let v = composite_simpson(|x| x * x, 0.0, 3.0, 4);
        assert!((v - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_002() {
        let v = composite_simpson(|_| 1.0, 0.0, 0.0, 10);
        assert_eq!(v, 0.0);
        let v = composite_simpson(|x| x, 1.0, 0.0, 10);
        assert!((v + 0.5).abs() < 1e-6);
        let v = composite_simpson(|x| x, 0.0, 1.0, 0);
        assert!((v - 0.5).abs() < 1e-6);
    }
}
