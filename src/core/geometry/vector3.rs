use crate::core::pbrt::types::Float;
use std::ops;

/// Three-component vector; also used for points and normals.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    #[inline]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Vector3f::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Vector3f::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> Float {
        return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
    }

    #[inline]
    pub fn abs_dot(&self, rhs: &Self) -> Float {
        return Float::abs(self.dot(rhs));
    }

    #[inline]
    pub fn cross(v1: &Self, v2: &Self) -> Self {
        Vector3f {
            x: (v1.y * v2.z) - (v1.z * v2.y),
            y: (v1.z * v2.x) - (v1.x * v2.z),
            z: (v1.x * v2.y) - (v1.y * v2.x),
        }
    }

    #[inline]
    pub fn length_squared(&self) -> Float {
        return self.dot(self);
    }

    #[inline]
    pub fn length(&self) -> Float {
        return Float::sqrt(self.length_squared());
    }

    /// Unit vector in the same direction. A zero vector yields NaNs.
    #[inline]
    pub fn normalize(&self) -> Self {
        return *self / self.length();
    }

    #[inline]
    pub fn distance_squared(a: &Self, b: &Self) -> Float {
        return (*a - *b).length_squared();
    }

    #[inline]
    pub fn distance(a: &Self, b: &Self) -> Float {
        return Float::sqrt(Self::distance_squared(a, b));
    }

    #[inline]
    pub fn min(a: &Self, b: &Self) -> Self {
        Vector3f::new(
            Float::min(a.x, b.x),
            Float::min(a.y, b.y),
            Float::min(a.z, b.z),
        )
    }

    #[inline]
    pub fn max(a: &Self, b: &Self) -> Self {
        Vector3f::new(
            Float::max(a.x, b.x),
            Float::max(a.y, b.y),
            Float::max(a.z, b.z),
        )
    }

    #[inline]
    pub fn max_component(&self) -> Float {
        return Float::max(self.x, Float::max(self.y, self.z));
    }

    pub fn has_nans(&self) -> bool {
        return self.x.is_nan() || self.y.is_nan() || self.z.is_nan();
    }

    pub fn is_finite(&self) -> bool {
        return self.x.is_finite() && self.y.is_finite() && self.z.is_finite();
    }
}

impl ops::Add<Vector3f> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn add(self, rhs: Vector3f) -> Vector3f {
        Vector3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub<Vector3f> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn sub(self, rhs: Vector3f) -> Vector3f {
        Vector3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// component-wise
impl ops::Mul<Vector3f> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn mul(self, rhs: Vector3f) -> Vector3f {
        Vector3f::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl ops::Mul<Float> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn mul(self, rhs: Float) -> Vector3f {
        Vector3f::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl ops::Mul<Vector3f> for Float {
    type Output = Vector3f;
    #[inline]
    fn mul(self, rhs: Vector3f) -> Vector3f {
        rhs * self
    }
}

impl ops::Div<Float> for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn div(self, rhs: Float) -> Vector3f {
        Vector3f::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl ops::Neg for Vector3f {
    type Output = Vector3f;
    #[inline]
    fn neg(self) -> Vector3f {
        Vector3f::new(-self.x, -self.y, -self.z)
    }
}

impl ops::AddAssign for Vector3f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::SubAssign for Vector3f {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl ops::MulAssign<Float> for Vector3f {
    #[inline]
    fn mul_assign(&mut self, rhs: Float) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl ops::DivAssign<Float> for Vector3f {
    #[inline]
    fn div_assign(&mut self, rhs: Float) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl ops::Index<usize> for Vector3f {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Float {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl ops::IndexMut<usize> for Vector3f {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Float {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl From<(Float, Float, Float)> for Vector3f {
    #[inline]
    fn from(value: (Float, Float, Float)) -> Self {
        Vector3f::new(value.0, value.1, value.2)
    }
}

impl From<[Float; 3]> for Vector3f {
    #[inline]
    fn from(value: [Float; 3]) -> Self {
        Vector3f::new(value[0], value[1], value[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let v1 = Vector3f::new(1.0, 2.0, 3.0);
        let v2 = Vector3f::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vector3f::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vector3f::new(3.0, 3.0, 3.0));
        assert_eq!(2.0 * v2, Vector3f::new(8.0, 10.0, 12.0));
    }

    #[test]
    fn test_002() {
        let x = Vector3f::new(70.0, 0.0, 0.0);
        let z = Vector3f::new(0.0, 0.0, 70.0);
        // x cross z points down
        let n = Vector3f::cross(&x, &z).normalize();
        assert_eq!(n, Vector3f::new(0.0, -1.0, 0.0));
        assert_eq!(Vector3f::dot(&x, &z), 0.0);
    }

    #[test]
    fn test_003() {
        let v1 = Vector3f::new(4.0, 0.0, 0.0);
        assert_eq!(v1.length(), 4.0);
        assert_eq!(v1.length_squared(), 16.0);
        assert_eq!(v1.normalize(), Vector3f::new(1.0, 0.0, 0.0));
        assert!(Vector3f::zero().normalize().has_nans());
    }

    #[test]
    fn test_004() {
        let v1 = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v1, Vector3f::from((1.0, 2.0, 3.0)));
        assert_eq!(v1, Vector3f::from([1.0, 2.0, 3.0]));
        assert_eq!(v1[2], 3.0);
        assert_eq!(Vector3f::new(-1.0, 2.0, -3.0).abs(), v1);
    }
}
