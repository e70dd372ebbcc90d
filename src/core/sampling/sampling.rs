use crate::core::pbrt::*;

pub fn uniform_sample_hemisphere(u: &Point2f) -> Vector3f {
    let z = u[0];
    let r = Float::sqrt(Float::max(0.0, 1.0 - z * z));
    let phi = 2.0 * PI * u[1];
    return Vector3f::new(r * Float::cos(phi), r * Float::sin(phi), z);
}

pub fn uniform_hemisphere_pdf() -> Float {
    return INV_2_PI;
}

#[inline]
pub fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
    let z = 1.0 - 2.0 * u[0];
    let r = Float::sqrt(Float::max(0.0, 1.0 - z * z));
    let phi = 2.0 * PI * u[1];
    return Vector3f::new(r * Float::cos(phi), r * Float::sin(phi), z);
}

#[inline]
pub fn uniform_sphere_pdf() -> Float {
    return INV_4_PI;
}

/// Uniform point inside the unit ball. `u_r` picks the radius.
#[inline]
pub fn uniform_sample_ball(u: &Point2f, u_r: Float) -> Vector3f {
    return uniform_sample_sphere(u) * Float::cbrt(u_r);
}

/// Area-uniform point on the unit disk by the polar map `(sqrt(u0), 2 pi u1)`.
/// The ellipse light relies on this mapping so that `v = sqrt(r)` recovers
/// the sample coordinate.
#[inline]
pub fn uniform_sample_disk_polar(u: &Point2f) -> Point2f {
    let r = Float::sqrt(u[0]);
    let theta = 2.0 * PI * u[1];
    return Point2f::new(r * Float::cos(theta), r * Float::sin(theta));
}

pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to $[-1,1]^2$
    let u_offset = *u * 2.0 - Vector2f::new(1.0, 1.0);

    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Point2f::zero();
    }

    if Float::abs(u_offset.x) > Float::abs(u_offset.y) {
        let r = u_offset.x;
        let theta = PI_OVER_4 * (u_offset.y / u_offset.x);
        return Point2f::new(r * Float::cos(theta), r * Float::sin(theta));
    } else {
        let r = u_offset.y;
        let theta = PI_OVER_2 - PI_OVER_4 * (u_offset.x / u_offset.y);
        return Point2f::new(r * Float::cos(theta), r * Float::sin(theta));
    }
}

#[inline]
pub fn uniform_cone_pdf(cos_theta_max: Float) -> Float {
    return 1.0 / (2.0 * PI * (1.0 - cos_theta_max));
}

pub fn uniform_sample_cone(u: &Point2f, cos_theta_max: Float) -> Vector3f {
    let cos_theta = (1.0 - u[0]) + u[0] * cos_theta_max;
    let sin_theta = Float::sqrt(Float::max(0.0, 1.0 - cos_theta * cos_theta));
    let phi = u[1] * 2.0 * PI;
    return Vector3f::new(
        Float::cos(phi) * sin_theta,
        Float::sin(phi) * sin_theta,
        cos_theta,
    );
}

pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = Float::sqrt(Float::max(0.0, 1.0 - d.x * d.x - d.y * d.y));
    return Vector3f::new(d.x, d.y, z);
}

pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    return cos_theta * INV_PI;
}

/// Radical inverse of `a` in base 2 (`base_index == 0`) or base 3.
/// Used to build low-discrepancy point sets in tests.
pub fn radical_inverse(base_index: u32, a: u64) -> Float {
    match base_index {
        0 => {
            let f = a.reverse_bits() as f64 * 5.421010862427522e-20;
            return Float::min(f as Float, ONE_MINUS_EPSILON);
        }
        _ => {
            let inv_base: f64 = 1.0 / 3.0;
            let mut reversed: u64 = 0;
            let mut inv_base_n: f64 = 1.0;
            let mut a = a;
            while a > 0 {
                let next = a / 3;
                let digit = a - next * 3;
                reversed = reversed * 3 + digit;
                inv_base_n *= inv_base;
                a = next;
            }
            let f = reversed as f64 * inv_base_n;
            return Float::min(f as Float, ONE_MINUS_EPSILON);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut rng = RNG::new_sequence(1);
        for _ in 0..1000 {
            let p = uniform_sample_disk_polar(&rng.uniform_point2());
            assert!(p.length_squared() <= 1.0 + 1e-5);
            let d = cosine_sample_hemisphere(&rng.uniform_point2());
            assert!(d.z >= 0.0);
            assert!((d.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_002() {
        assert_eq!(radical_inverse(0, 0), 0.0);
        assert_eq!(radical_inverse(0, 1), 0.5);
        assert_eq!(radical_inverse(0, 2), 0.25);
        assert_eq!(radical_inverse(0, 3), 0.75);
        assert!((radical_inverse(1, 1) - 1.0 / 3.0).abs() < 1e-6);
        assert!((radical_inverse(1, 5) - 7.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_003() {
        let d = uniform_sample_cone(&Point2f::new(0.0, 0.3), 0.5);
        assert!((d.z - 1.0).abs() < 1e-6);
        let d = uniform_sample_cone(&Point2f::new(1.0, 0.3), 0.5);
        assert!((d.z - 0.5).abs() < 1e-6);
    }
}
