use crate::core::pbrt::types::Float;

/// Bisection on `[a, b]`. Stops after `max_iterations` halvings, once the
/// half-width of the bracket drops below `tolerance`, or on an exact zero.
///
/// When `g(a)` and `g(b)` do not have opposite signs there is no bracketed
/// root and `0` is returned. The caller decides whether that is acceptable.
pub fn bisection<G>(g: G, a: Float, b: Float, max_iterations: u32, tolerance: Float) -> Float
where
    G: Fn(Float) -> Float,
{
    let mut a = a;
    let mut b = b;
    let f_a = g(a);
    let f_b = g(b);
    let sign = f_a * f_b;
    if sign >= 0.0 || sign.is_nan() {
        return 0.0;
    }
    let mut c = (a + b) * 0.5;
    let mut f_c = g(c);
    let mut n = 1;
    while n <= max_iterations && (b - a) * 0.5 >= tolerance && f_c != 0.0 {
        c = (a + b) * 0.5;
        f_c = g(c);
        n += 1;
        if f_c * f_a >= 0.0 {
            a = c;
        } else {
            b = c;
        }
    }
    return c;
}
