use super::ellipse::EllipseGeometry;
use crate::core::interaction::HitRecord;
use crate::core::light::*;
use crate::core::material::Material;
use crate::core::pbrt::*;
use crate::core::shape::*;

use std::sync::Arc;

/// Height of the elliptic slice at azimuth `phi_p` for a spherical ellipse
/// with tangent half-extents `a_t`, `b_t` (Guillén et al. 2017).
///
/// Returns 0 outside the valid angular range, where the discriminant goes
/// negative.
pub fn h_p(phi_p: Float, a_t: Float, b_t: Float) -> Float {
    let a_ts = a_t * a_t;
    let b_ts = b_t * b_t;
    let c_t = a_t / Float::sqrt(1.0 + a_ts);
    let p = 1.0 / b_ts;
    let m = (a_ts - b_ts) / (a_ts + 1.0);
    let s_p = Float::sin(phi_p);
    let s_p = s_p * s_p;
    let disc = (1.0 - (p + 1.0) * s_p) / (1.0 - (m * p + 1.0) * s_p);
    if disc >= 0.0 && disc.is_finite() {
        return c_t * Float::sqrt(disc);
    }
    return 0.0;
}

/// Projection of a disk light onto the unit sphere around a query point,
/// with everything needed to invert its azimuthal CDF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalEllipse {
    /// `z` points at the center of the projected ellipse, `x` along its
    /// horizontal axis.
    pub frame: Frame,
    pub a_t: Float,
    pub b_t: Float,
    pub beta: Float,
    /// Total projected solid angle, `omega_p(beta)`.
    pub omega: Float,
    pub numeric: NumericOptions,
}

impl SphericalEllipse {
    pub fn new(frame: &Frame, a_t: Float, b_t: Float, beta: Float, numeric: &NumericOptions) -> Self {
        let mut s = SphericalEllipse {
            frame: *frame,
            a_t,
            b_t,
            beta,
            omega: 0.0,
            numeric: *numeric,
        };
        s.omega = s.omega_p(beta);
        return s;
    }

    #[inline]
    pub fn h_p(&self, phi_p: Float) -> Float {
        return h_p(phi_p, self.a_t, self.b_t);
    }

    fn integrate_2h_p(&self, a: Float, b: Float) -> Float {
        let n = self.numeric.simpson_intervals;
        return composite_simpson(|x| 2.0 * self.h_p(x), a, b, n);
    }

    /// Solid angle of the part of the ellipse with azimuth below `phi_p`.
    /// Runs from 0 at `-beta` to `omega` at `beta`.
    pub fn omega_p(&self, phi_p: Float) -> Float {
        let base = self.integrate_2h_p(0.0, self.beta);
        if phi_p >= 0.0 {
            return base + self.integrate_2h_p(0.0, phi_p);
        } else {
            return base - self.integrate_2h_p(0.0, -phi_p);
        }
    }

    /// Azimuth whose CDF value is `e1`.
    pub fn sample_phi(&self, e1: Float) -> Float {
        let target = e1 * self.omega;
        return bisection(
            |x| self.omega_p(x) - target,
            -self.beta,
            self.beta,
            self.numeric.bisection_iterations,
            self.numeric.bisection_tolerance,
        );
    }

    /// Unit direction for a pair of uniform samples.
    pub fn sample(&self, e1: Float, e2: Float) -> Vector3f {
        let phi_p = self.sample_phi(e1);
        let h = (2.0 * e2 - 1.0) * self.h_p(phi_p);
        let sq = Float::sqrt(Float::max(0.0, 1.0 - h * h));
        let local = Vector3f::new(h, sq * Float::sin(phi_p), sq * Float::cos(phi_p));
        return self.frame.to_world(&local);
    }
}

/// Elliptical light sampled uniformly by the solid angle it subtends.
///
/// Only circular disks are supported: the axes must be perpendicular and of
/// equal length. The projection uses the radius `|axis1|`.
#[derive(Clone)]
pub struct SolidAngleEllipse {
    pub geometry: EllipseGeometry,
    pub numeric: NumericOptions,
    pub material: Option<Arc<dyn Material>>,
}

impl SolidAngleEllipse {
    pub fn new(
        center: &Point3f,
        axis1: &Vector3f,
        axis2: &Vector3f,
        numeric: &NumericOptions,
        material: Option<Arc<dyn Material>>,
    ) -> Result<Self, RenderError> {
        let l1 = axis1.length();
        let l2 = axis2.length();
        if !(l1 > 0.0 && l2 > 0.0) {
            return Err(RenderError::error("solid-angle ellipse has a degenerate axis"));
        }
        let tol = 1e-3;
        let cosine = Vector3f::dot(axis1, axis2) / (l1 * l2);
        if Float::abs(l1 - l2) > tol * l1 || Float::abs(cosine) > tol {
            let msg = format!(
                "solid-angle ellipse needs perpendicular axes of equal length, got |axis1| = {}, |axis2| = {}, cos = {}",
                l1, l2, cosine
            );
            return Err(RenderError::error(&msg));
        }
        return Ok(SolidAngleEllipse {
            geometry: EllipseGeometry::new(center, axis1, axis2),
            numeric: *numeric,
            material,
        });
    }

    /// Projects the light onto the unit sphere around `o`. `None` when `o`
    /// lies in the plane of the light.
    pub fn spherical_ellipse(&self, o: &Point3f) -> Option<SphericalEllipse> {
        let g = &self.geometry;
        let to_center = g.center - *o;
        let mut z_d = -g.normal;
        let height = Vector3f::dot(&to_center, &z_d);
        if height == 0.0 || height.is_nan() {
            return None;
        }
        if height < 0.0 {
            z_d = -z_d;
        }
        let height = Float::abs(height);

        let cr = Vector3f::cross(&z_d, &to_center);
        let x_d = if cr.length_squared() > 1e-12 * to_center.length_squared() {
            cr.normalize()
        } else {
            // looking straight down the axis
            coordinate_system(&z_d).0
        };
        let y_d = Vector3f::cross(&z_d, &x_d);

        let radius = g.axis1.length();
        let y1 = (g.center + y_d * radius - *o).normalize();
        let y0 = (g.center - y_d * radius - *o).normalize();
        let (yp_1, yp_0) = (Vector3f::dot(&y1, &y_d), Vector3f::dot(&y0, &y_d));
        let (zp_1, zp_0) = (Vector3f::dot(&y1, &z_d), Vector3f::dot(&y0, &z_d));
        let z_e = (y_d * ((yp_0 + yp_1) * 0.5) + z_d * ((zp_0 + zp_1) * 0.5)).normalize();

        // where the central direction pierces the plane of the light
        let z_e_disk = *o + z_e * (height / Vector3f::dot(&z_e, &z_d));
        let offset = Vector3f::dot(&(z_e_disk - g.center), &y_d);
        let x_cos = Float::sqrt(Float::max(0.0, radius * radius - offset * offset));
        let x1 = (z_e_disk + x_d * x_cos - *o).normalize();

        let a = Float::clamp(Vector3f::dot(&x1, &x_d), -1.0, 1.0);
        let dy = yp_1 - yp_0;
        let dz = zp_1 - zp_0;
        let b = Float::clamp(Float::sqrt(dy * dy + dz * dz) * 0.5, -1.0, 1.0);
        let alpha = Float::asin(a);
        let beta = Float::asin(b);

        let x_e = x_d;
        let y_e = Vector3f::cross(&z_e, &x_e);
        let frame = Frame::new(&x_e, &y_e, &z_e);
        let s = SphericalEllipse::new(
            &frame,
            Float::tan(alpha),
            Float::tan(beta),
            beta,
            &self.numeric,
        );
        if !s.omega.is_finite() || s.omega <= 0.0 {
            return None;
        }
        return Some(s);
    }
}

impl Shape for SolidAngleEllipse {
    fn world_bound(&self) -> Bounds3f {
        return self.geometry.world_bound();
    }

    fn intersect(&self, r: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord<'_>> {
        let (t, p, u, v) = self.geometry.intersect(r, t_min, t_max)?;
        return Some(HitRecord::new(
            t,
            &p,
            &self.geometry.normal,
            u,
            v,
            self.material.as_deref(),
        ));
    }
}

impl LightSampler for SolidAngleEllipse {
    fn sample(&self, o: &Point3f, rng: &mut RNG) -> Option<LightSample> {
        let s = self.spherical_ellipse(o)?;
        stats::SOLID_ANGLE_ELLIPSE_SAMPLES.add(1);
        let e1 = rng.uniform_float();
        let e2 = rng.uniform_float();
        let wi = s.sample(e1, e2);
        return Some(LightSample::new(&wi, 1.0 / s.omega));
    }

    /// Constant `1 / omega` over the directions that reach the light. The
    /// projection is rebuilt for `o` on every call.
    fn pdf(&self, o: &Point3f, wi: &Vector3f) -> Float {
        let r = Ray::new(o, wi, 0.0);
        if self.geometry.intersect(&r, RAY_EPSILON, Float::INFINITY).is_none() {
            return 0.0;
        }
        if let Some(s) = self.spherical_ellipse(o) {
            return 1.0 / s.omega;
        }
        return 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cornell_ellipse() -> SolidAngleEllipse {
        SolidAngleEllipse::new(
            &Point3f::new(278.0, 554.0, 280.0),
            &Vector3f::new(70.0, 0.0, 0.0),
            &Vector3f::new(0.0, 0.0, 70.0),
            &NumericOptions::default(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_001() {
        // a circle seen head-on projects to a circle
        let s = cornell_ellipse()
            .spherical_ellipse(&Point3f::new(278.0, 0.0, 280.0))
            .unwrap();
        assert!((s.a_t - s.b_t).abs() < 1e-3);
        assert!((s.frame.z.y - 1.0).abs() < 1e-5);
        assert!((s.h_p(0.0) - Float::sin(Float::atan(s.a_t))).abs() < 1e-5);
        assert_eq!(s.h_p(s.beta * 1.5), 0.0);
    }

    #[test]
    fn test_002() {
        assert_eq!(h_p(1.0, 0.1, 0.0), 0.0);
        assert!(h_p(0.0, 0.2, 0.1) > 0.0);
    }

    #[test]
    fn test_003() {
        let light = cornell_ellipse();
        let o = Point3f::new(278.0, 0.0, 280.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        let pdf = light.pdf(&o, &up);
        let s = light.spherical_ellipse(&o).unwrap();
        assert!((pdf * s.omega - 1.0).abs() < 1e-5);
        assert_eq!(light.pdf(&o, &Vector3f::new(1.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_004() {
        // origin in the plane of the light
        let light = cornell_ellipse();
        let mut rng = RNG::new();
        assert!(light.sample(&Point3f::new(0.0, 554.0, 0.0), &mut rng).is_none());
    }

    #[test]
    fn test_005() {
        let center = Point3f::new(278.0, 554.0, 280.0);
        let numeric = NumericOptions::default();
        let unequal = SolidAngleEllipse::new(
            &center,
            &Vector3f::new(70.0, 0.0, 0.0),
            &Vector3f::new(0.0, 0.0, 35.0),
            &numeric,
            None,
        );
        assert!(unequal.is_err());
        let oblique = SolidAngleEllipse::new(
            &center,
            &Vector3f::new(70.0, 0.0, 0.0),
            &Vector3f::new(49.5, 0.0, 49.5),
            &numeric,
            None,
        );
        assert!(oblique.is_err());
        let tilted = SolidAngleEllipse::new(
            &center,
            &Vector3f::new(0.0, 0.0, 70.0),
            &Vector3f::new(70.0, 0.0, 0.0),
            &numeric,
            None,
        );
        assert!(tilted.is_ok());
    }
}
