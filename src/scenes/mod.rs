pub mod cornell;

pub use cornell::*;

use crate::core::error::*;
use crate::core::options::RenderOptions;
use crate::core::scene::Scene;

/// Names accepted by `create_scene`.
pub const SCENE_NAMES: [&str; 6] = [
    "cornell",
    "cornell-rect-sa",
    "cornell-large",
    "cornell-materials",
    "cornell-ellipse",
    "cornell-ellipse-sa",
];

pub fn create_scene(name: &str, opts: &RenderOptions) -> Result<Scene, RenderError> {
    let scene = match name {
        "cornell" => cornell_box(opts),
        "cornell-rect-sa" => cornell_box_sa(opts),
        "cornell-large" => cornell_box_large(opts),
        "cornell-materials" => cornell_box_materials(opts),
        "cornell-ellipse" => cornell_box_ellipse(opts),
        "cornell-ellipse-sa" => cornell_box_ellipse_sa(opts)?,
        _ => {
            let msg = format!(
                "unknown scene \"{}\", expected one of: {}",
                name,
                SCENE_NAMES.join(", ")
            );
            return Err(RenderError::error(&msg));
        }
    };
    return Ok(scene);
}
