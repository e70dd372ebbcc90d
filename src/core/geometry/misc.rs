use crate::core::pbrt::types::*;

#[inline]
pub fn face_forward(n: &Normal3f, v: &Vector3f) -> Normal3f {
    if Vector3f::dot(n, v) < 0.0 {
        return -*n;
    } else {
        return *n;
    }
}

/// Two unit vectors completing an orthonormal basis with the unit vector `v1`.
#[inline]
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if Float::abs(v1.x) > Float::abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / Float::sqrt(v1.x * v1.x + v1.z * v1.z)
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / Float::sqrt(v1.y * v1.y + v1.z * v1.z)
    };
    let v3 = Vector3f::cross(v1, &v2).normalize();
    return (v2, v3);
}

#[inline]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    return Vector3f::new(
        sin_theta * Float::cos(phi),
        sin_theta * Float::sin(phi),
        cos_theta,
    );
}

#[inline]
pub fn reflect(v: &Vector3f, n: &Normal3f) -> Vector3f {
    return *v - 2.0 * Vector3f::dot(v, n) * *n;
}

/// Snell refraction of the unit vector `v` about `n`; `None` on total
/// internal reflection.
#[inline]
pub fn refract(v: &Vector3f, n: &Normal3f, ni_over_nt: Float) -> Option<Vector3f> {
    let dt = Vector3f::dot(v, n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        let refracted = ni_over_nt * (*v - *n * dt) - *n * Float::sqrt(discriminant);
        return Some(refracted);
    }
    return None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        for v in [
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(1.0, 2.0, 3.0).normalize(),
        ] {
            let (a, b) = coordinate_system(&v);
            assert!(Vector3f::dot(&a, &v).abs() < 1e-5);
            assert!(Vector3f::dot(&b, &v).abs() < 1e-5);
            assert!(Vector3f::dot(&a, &b).abs() < 1e-5);
            assert!((a.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_002() {
        let n = Normal3f::new(0.0, 1.0, 0.0);
        let v = Vector3f::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(&v, &n), Vector3f::new(1.0, 1.0, 0.0));
        // grazing ray from the dense side is totally reflected
        let v = Vector3f::new(1.0, -0.1, 0.0).normalize();
        assert!(refract(&v, &n, 1.5).is_none());
        assert!(refract(&-n, &n, 1.0 / 1.5).is_some());
    }
}
