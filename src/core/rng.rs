use crate::core::pbrt::*;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// PCG32 generator. Each render row owns one, so nothing here is shared.
#[derive(Debug, PartialEq, Clone)]
pub struct RNG {
    pub state: u64,
    pub inc: u64,
}

impl RNG {
    pub fn new() -> Self {
        RNG {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }

    pub fn new_sequence(initseq: u64) -> Self {
        let mut r = Self::new();
        r.set_sequence(initseq);
        return r;
    }

    /// Independent stream for `(seed, index)`, used to give every image row
    /// its own reproducible sequence.
    pub fn with_seed(seed: u64, index: u64) -> Self {
        let mixed = seed
            .wrapping_mul(0x9e3779b97f4a7c15)
            .wrapping_add(index.wrapping_mul(0xbf58476d1ce4e5b9));
        return Self::new_sequence(mixed);
    }

    pub fn set_sequence(&mut self, initseq: u64) {
        self.state = 0;
        self.inc = initseq.wrapping_shl(1) | 1;
        self.uniform_uint32();
        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        self.uniform_uint32();
    }

    #[inline]
    pub fn uniform_uint32(&mut self) -> u32 {
        let oldstate: u64 = self.state;
        self.state = oldstate.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted: u32 = ((oldstate.wrapping_shr(18) ^ oldstate).wrapping_shr(27)) as u32;
        let rot: u32 = (oldstate.wrapping_shr(59)) as u32;
        return (xorshifted.wrapping_shr(rot))
            | (xorshifted.wrapping_shl(((!rot).wrapping_add(1)) & 31));
    }

    /// Uniform integer in `[0, b)`.
    pub fn uniform_uint32_threshold(&mut self, b: u32) -> u32 {
        let threshold = (!b).wrapping_add(1) % b;
        loop {
            let r = self.uniform_uint32();
            if r >= threshold {
                return r % b;
            }
        }
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn uniform_float(&mut self) -> Float {
        let f = self.uniform_uint32() as f64 * 2.3283064365386963e-10;
        return Float::min(f as Float, ONE_MINUS_EPSILON);
    }

    #[inline]
    pub fn uniform_float_range(&mut self, lo: Float, hi: Float) -> Float {
        return lo + (hi - lo) * self.uniform_float();
    }

    #[inline]
    pub fn uniform_point2(&mut self) -> Point2f {
        let x = self.uniform_float();
        let y = self.uniform_float();
        return Point2f::new(x, y);
    }
}

impl Default for RNG {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut rng = RNG::new_sequence(3);
        for _ in 0..10000 {
            let u = rng.uniform_float();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_002() {
        let mut a = RNG::with_seed(7, 12);
        let mut b = RNG::with_seed(7, 12);
        let mut c = RNG::with_seed(7, 13);
        let va: Vec<u32> = (0..8).map(|_| a.uniform_uint32()).collect();
        let vb: Vec<u32> = (0..8).map(|_| b.uniform_uint32()).collect();
        let vc: Vec<u32> = (0..8).map(|_| c.uniform_uint32()).collect();
        assert_eq!(va, vb);
        assert_ne!(va, vc);
    }

    #[test]
    fn test_003() {
        let mut rng = RNG::new();
        for _ in 0..1000 {
            assert!(rng.uniform_uint32_threshold(3) < 3);
        }
    }
}
