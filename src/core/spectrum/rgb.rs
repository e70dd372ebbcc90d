use crate::core::pbrt::types::Float;
use std::ops;

const YWEIGHT: [Float; 3] = [0.212671, 0.715160, 0.072169];

/// Linear RGB radiance or reflectance.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct RGBSpectrum {
    c: [Float; 3],
}

impl RGBSpectrum {
    #[inline]
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    #[inline]
    pub const fn from_value(v: Float) -> Self {
        RGBSpectrum { c: [v, v, v] }
    }

    #[inline]
    pub const fn zero() -> Self {
        RGBSpectrum { c: [0.0, 0.0, 0.0] }
    }

    #[inline]
    pub const fn one() -> Self {
        RGBSpectrum { c: [1.0, 1.0, 1.0] }
    }

    pub fn clamp(&self, low: Float, hi: Float) -> Self {
        let c = &self.c;
        return RGBSpectrum::new(
            Float::clamp(c[0], low, hi),
            Float::clamp(c[1], low, hi),
            Float::clamp(c[2], low, hi),
        );
    }

    pub fn max_component_value(&self) -> Float {
        let c = &self.c;
        return Float::max(c[0], Float::max(c[1], c[2]));
    }

    pub fn y(&self) -> Float {
        let c = &self.c;
        return YWEIGHT[0] * c[0] + YWEIGHT[1] * c[1] + YWEIGHT[2] * c[2];
    }

    pub fn to_rgb(&self) -> [Float; 3] {
        return self.c;
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|x| -> bool { x.abs() <= 0.0 });
    }

    pub fn has_nans(&self) -> bool {
        let c = &self.c;
        return c.iter().any(|x| x.is_nan());
    }

    pub fn is_valid(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|x| -> bool { x.is_finite() });
    }

    /// Replaces NaN channels with zero. Infinite channels are left alone so
    /// that fireflies stay visible.
    pub fn sanitized(&self) -> Self {
        let c = &self.c;
        let f = |x: Float| if x.is_nan() { 0.0 } else { x };
        return RGBSpectrum::new(f(c[0]), f(c[1]), f(c[2]));
    }
}

impl From<[Float; 3]> for RGBSpectrum {
    fn from(c: [Float; 3]) -> Self {
        RGBSpectrum { c }
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;
    #[inline]
    fn index(&self, i: usize) -> &Float {
        &self.c[i]
    }
}

impl ops::Add<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn add(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum::new(
            self.c[0] + rhs.c[0],
            self.c[1] + rhs.c[1],
            self.c[2] + rhs.c[2],
        )
    }
}

impl ops::AddAssign<RGBSpectrum> for RGBSpectrum {
    #[inline]
    fn add_assign(&mut self, rhs: RGBSpectrum) {
        self.c[0] += rhs.c[0];
        self.c[1] += rhs.c[1];
        self.c[2] += rhs.c[2];
    }
}

impl ops::Sub<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn sub(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum::new(
            self.c[0] - rhs.c[0],
            self.c[1] - rhs.c[1],
            self.c[2] - rhs.c[2],
        )
    }
}

impl ops::Mul<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum::new(
            self.c[0] * rhs.c[0],
            self.c[1] * rhs.c[1],
            self.c[2] * rhs.c[2],
        )
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum::new(self.c[0] * rhs, self.c[1] * rhs, self.c[2] * rhs)
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;
    #[inline]
    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        rhs * self
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;
    #[inline]
    fn div(self, rhs: Float) -> RGBSpectrum {
        let inv = 1.0 / rhs;
        RGBSpectrum::new(self.c[0] * inv, self.c[1] * inv, self.c[2] * inv)
    }
}
