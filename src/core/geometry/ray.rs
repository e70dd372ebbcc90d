use crate::core::pbrt::types::*;

/// A ray `o + t * d`. The direction is not required to be unit length.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Ray {
    pub o: Point3f,
    pub d: Vector3f,
    pub time: Float,
}

impl Ray {
    pub fn new(o: &Point3f, d: &Vector3f, time: Float) -> Self {
        Ray {
            o: *o,
            d: *d,
            time,
        }
    }

    pub fn position(&self, t: Float) -> Point3f {
        return self.o + self.d * t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let r1 = Ray::new(
            &Point3f::new(1.0, 2.0, 3.0),
            &Vector3f::new(1.0, 0.0, 0.0),
            0.0,
        );
        let p1 = r1.position(4.0);
        let p2 = Point3f::new(5.0, 2.0, 3.0);
        assert_eq!(p1, p2);
    }
}
