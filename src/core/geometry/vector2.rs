use crate::core::pbrt::types::Float;
use std::ops;

/// Two-component vector, mostly used for `[0,1)^2` sample pairs.
#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector2f {
    pub x: Float,
    pub y: Float,
}

impl Vector2f {
    #[inline]
    pub const fn new(x: Float, y: Float) -> Self {
        Vector2f { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Vector2f::new(0.0, 0.0)
    }

    #[inline]
    pub fn length_squared(&self) -> Float {
        return self.x * self.x + self.y * self.y;
    }
}

impl ops::Add<Vector2f> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Vector2f {
        Vector2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub<Vector2f> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Vector2f {
        Vector2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Mul<Float> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn mul(self, rhs: Float) -> Vector2f {
        Vector2f::new(self.x * rhs, self.y * rhs)
    }
}

impl ops::Index<usize> for Vector2f {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Float {
        match i {
            0 => &self.x,
            _ => &self.y,
        }
    }
}
