use crate::core::error::*;

use std::path::Path;

/// 8-bit RGB image held in memory, row by row from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRgb8 {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

pub fn read_image_rgb(name: &str) -> Result<ImageRgb8, RenderError> {
    let path = Path::new(name);
    if !path.exists() {
        return Err(RenderError::from(format!("File not found: {}", name)));
    }
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    return Ok(ImageRgb8 {
        width,
        height,
        data: img.into_raw(),
    });
}
