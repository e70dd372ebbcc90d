use crate::core::camera::*;
use crate::core::pbrt::*;

/// Thin-lens perspective camera placed with look-from/look-at vectors.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    origin: Point3f,
    lower_left_corner: Point3f,
    horizontal: Vector3f,
    vertical: Vector3f,
    u: Vector3f,
    v: Vector3f,
    lens_radius: Float,
    shutter_open: Float,
    shutter_close: Float,
}

impl PerspectiveCamera {
    /// `vfov` is the vertical field of view in degrees and `aspect` is
    /// width over height.
    pub fn new(
        look_from: &Point3f,
        look_at: &Point3f,
        vup: &Vector3f,
        vfov: Float,
        aspect: Float,
        aperture: Float,
        focus_dist: Float,
        shutter_open: Float,
        shutter_close: Float,
    ) -> Self {
        let theta = vfov * PI / 180.0;
        let half_height = Float::tan(theta / 2.0);
        let half_width = aspect * half_height;
        let w = (*look_from - *look_at).normalize();
        let u = Vector3f::cross(vup, &w).normalize();
        let v = Vector3f::cross(&w, &u);
        let lower_left_corner = *look_from
            - u * (half_width * focus_dist)
            - v * (half_height * focus_dist)
            - w * focus_dist;
        PerspectiveCamera {
            origin: *look_from,
            lower_left_corner,
            horizontal: u * (2.0 * half_width * focus_dist),
            vertical: v * (2.0 * half_height * focus_dist),
            u,
            v,
            lens_radius: aperture / 2.0,
            shutter_open,
            shutter_close,
        }
    }
}

impl Camera for PerspectiveCamera {
    fn generate_ray(&self, sample: &CameraSample) -> Ray {
        let rd = concentric_sample_disk(&sample.p_lens) * self.lens_radius;
        let offset = self.u * rd.x + self.v * rd.y;
        let s = sample.p_film.x;
        let t = sample.p_film.y;
        let d = self.lower_left_corner + self.horizontal * s + self.vertical * t
            - self.origin
            - offset;
        return Ray::new(&(self.origin + offset), &d, sample.time);
    }

    fn get_shutter(&self) -> (Float, Float) {
        return (self.shutter_open, self.shutter_close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cornell_camera() -> PerspectiveCamera {
        PerspectiveCamera::new(
            &Point3f::new(278.0, 278.0, -800.0),
            &Point3f::new(278.0, 278.0, 0.0),
            &Vector3f::new(0.0, 1.0, 0.0),
            40.0,
            1.0,
            0.0,
            10.0,
            0.0,
            1.0,
        )
    }

    #[test]
    fn test_001() {
        let cam = cornell_camera();
        let sample = CameraSample {
            p_film: Point2f::new(0.5, 0.5),
            p_lens: Point2f::new(0.3, 0.7),
            time: 0.5,
        };
        let r = cam.generate_ray(&sample);
        assert_eq!(r.o, Point3f::new(278.0, 278.0, -800.0));
        let d = r.d.normalize();
        assert!((d.z - 1.0).abs() < 1e-5);
        assert_eq!(r.time, 0.5);
        assert_eq!(cam.get_shutter(), (0.0, 1.0));
    }

    #[test]
    fn test_002() {
        let cam = cornell_camera();
        let sample = CameraSample {
            p_film: Point2f::new(0.0, 1.0),
            p_lens: Point2f::new(0.5, 0.5),
            time: 0.0,
        };
        // looking down +z with y up, the left edge of the image is +x
        let d = cam.generate_ray(&sample).d;
        assert!(d.x > 0.0 && d.y > 0.0 && d.z > 0.0);
        let half = Float::atan2(d.y, d.z);
        assert!((half - 20.0 * PI / 180.0).abs() < 1e-4);
    }
}
