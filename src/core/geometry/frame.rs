use super::misc::coordinate_system;
use crate::core::pbrt::types::*;

/// Orthonormal frame used to map local sampling directions to world space.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Frame {
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f,
}

impl Frame {
    pub fn new(x: &Vector3f, y: &Vector3f, z: &Vector3f) -> Self {
        Frame {
            x: *x,
            y: *y,
            z: *z,
        }
    }

    /// Builds a frame whose third axis is the unit vector `z`.
    pub fn from_z(z: &Vector3f) -> Self {
        let (x, y) = coordinate_system(z);
        Frame { x, y, z: *z }
    }

    #[inline]
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        return self.x * v.x + self.y * v.y + self.z * v.z;
    }

    #[inline]
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        return Vector3f::new(
            Vector3f::dot(v, &self.x),
            Vector3f::dot(v, &self.y),
            Vector3f::dot(v, &self.z),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let frame = Frame::from_z(&Vector3f::new(0.0, 1.0, 0.0));
        let v = Vector3f::new(0.3, -0.2, 0.9);
        let w = frame.to_local(&frame.to_world(&v));
        assert!((v - w).length() < 1e-5);
        assert_eq!(frame.to_world(&Vector3f::new(0.0, 0.0, 1.0)), frame.z);
    }
}
