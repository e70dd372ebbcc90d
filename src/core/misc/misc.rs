use crate::core::pbrt::types::Float;

#[inline]
pub fn lerp(t: Float, v1: Float, v2: Float) -> Float {
    return (1.0 - t) * v1 + t * v2;
}

/// Real roots of `a t^2 + b t + c`, smaller first.
#[inline]
pub fn quadratic(a: Float, b: Float, c: Float) -> Option<(Float, Float)> {
    let a = a as f64;
    let b = b as f64;
    let c = c as f64;
    let discrim: f64 = b * b - 4.0 * a * c;
    if discrim < 0.0 || a == 0.0 {
        return None;
    }
    let root_discrim = f64::sqrt(discrim);
    let q = if b < 0.0 {
        -0.5 * (b - root_discrim)
    } else {
        -0.5 * (b + root_discrim)
    };
    let mut t0 = q / a;
    let mut t1 = if q != 0.0 { c / q } else { t0 };
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    return Some((t0 as Float, t1 as Float));
}

/// Display transform used for 8-bit output.
#[inline]
pub fn gamma_2(value: Float) -> Float {
    return Float::sqrt(Float::max(value, 0.0));
}

#[inline]
pub fn to_byte(v: Float) -> u8 {
    Float::clamp(255.99 * gamma_2(v), 0.0, 255.0) as u8
}

#[inline]
pub fn schlick(cosine: Float, ref_idx: Float) -> Float {
    let r0 = (1.0 - ref_idx) / (1.0 + ref_idx);
    let r0 = r0 * r0;
    return r0 + (1.0 - r0) * Float::powi(1.0 - cosine, 5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let (t0, t1) = quadratic(1.0, -3.0, 2.0).unwrap();
        assert_eq!(t0, 1.0);
        assert_eq!(t1, 2.0);
        assert!(quadratic(1.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn test_002() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.25), 127);
        assert_eq!(to_byte(-1.0), 0);
    }
}
