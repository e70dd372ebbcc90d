use crate::core::pbrt::*;

/// Averaged radiance per pixel, stored row by row from the top of the image.
#[derive(Debug, Clone)]
pub struct Film {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Spectrum>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Film {
            width,
            height,
            pixels: vec![Spectrum::zero(); width * height],
        }
    }

    /// Builds a film from rows rendered independently, top row first.
    pub fn from_rows(width: usize, rows: Vec<Vec<Spectrum>>) -> Self {
        let height = rows.len();
        let mut pixels = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width);
            pixels.extend(row);
        }
        Film {
            width,
            height,
            pixels,
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Spectrum {
        return self.pixels[y * self.width + x];
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, c: &Spectrum) {
        self.pixels[y * self.width + x] = *c;
    }

    pub fn pixels(&self) -> &[Spectrum] {
        return &self.pixels;
    }

    /// Gamma-2 encoded 8-bit RGB, as written to disk.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in self.pixels.iter() {
            bytes.push(to_byte(p[0]));
            bytes.push(to_byte(p[1]));
            bytes.push(to_byte(p[2]));
        }
        return bytes;
    }
}
