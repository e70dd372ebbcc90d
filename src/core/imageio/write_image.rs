use crate::core::error::*;
use crate::core::film::Film;

use image::*;

impl From<image::ImageError> for RenderError {
    fn from(value: image::ImageError) -> Self {
        let msg = value.to_string();
        return RenderError::error(&msg);
    }
}

/// Writes the film as gamma-2 encoded 8-bit RGB. The format follows the
/// file extension (png, ppm, bmp, ...).
pub fn write_image(name: &str, film: &Film) -> Result<(), RenderError> {
    let bytes = film.to_bytes();
    let img = RgbImage::from_vec(film.width as u32, film.height as u32, bytes)
        .ok_or_else(|| RenderError::error("write_image: buffer does not match resolution"))?;
    img.save(name)?;
    return Ok(());
}
