use super::read_image::ImageRgb8;
use crate::core::error::*;

/// Root mean squared per-pixel RGB distance, in 8-bit units.
pub fn rmse(a: &ImageRgb8, b: &ImageRgb8) -> Result<f64, RenderError> {
    if a.width != b.width || a.height != b.height {
        let msg = format!(
            "rmse: size mismatch ({}x{} vs {}x{})",
            a.width, a.height, b.width, b.height
        );
        return Err(RenderError::error(&msg));
    }
    let n = (a.width as usize) * (a.height as usize);
    if n == 0 {
        return Ok(0.0);
    }
    let mut squared_dif = 0.0;
    for (pa, pb) in a.data.chunks_exact(3).zip(b.data.chunks_exact(3)) {
        for c in 0..3 {
            let d = pa[c] as f64 - pb[c] as f64;
            squared_dif += d * d;
        }
    }
    return Ok(f64::sqrt(squared_dif / n as f64));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let a = ImageRgb8 {
            width: 2,
            height: 1,
            data: vec![0, 0, 0, 10, 10, 10],
        };
        let mut b = a.clone();
        assert_eq!(rmse(&a, &b).unwrap(), 0.0);
        b.data[3] = 13;
        b.data[4] = 14;
        // one pixel off by (3, 4, 0) over two pixels
        assert!((rmse(&a, &b).unwrap() - f64::sqrt(12.5)).abs() < 1e-12);
    }

    #[test]
    fn test_002() {
        let a = ImageRgb8 {
            width: 1,
            height: 1,
            data: vec![0, 0, 0],
        };
        let b = ImageRgb8 {
            width: 2,
            height: 1,
            data: vec![0; 6],
        };
        assert!(rmse(&a, &b).is_err());
    }
}
