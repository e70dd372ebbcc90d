use crate::core::error::*;
use crate::core::numeric::NumericOptions;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a render needs besides the scene itself. Read from a JSON
/// file and then overridden from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    /// Samples per pixel.
    pub spp: usize,
    pub max_depth: u32,
    pub seed: u64,
    pub scene: String,
    pub threads: Option<usize>,
    pub numeric: NumericOptions,
    pub outfile: String,
    /// Image to compare against after rendering.
    pub reference: Option<String>,
    pub quiet: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            width: 500,
            height: 500,
            spp: 10,
            max_depth: 50,
            seed: 0,
            scene: String::from("cornell-ellipse"),
            threads: None,
            numeric: NumericOptions::default(),
            outfile: String::from("out.png"),
            reference: None,
            quiet: false,
        }
    }
}

impl RenderOptions {
    pub fn from_json(text: &str) -> Result<Self, RenderError> {
        let opts: RenderOptions = serde_json::from_str(text)?;
        opts.validate()?;
        return Ok(opts);
    }

    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let text = fs::read_to_string(path).map_err(|e| {
            let msg = format!("{}: {}", path.display(), e);
            RenderError::error(&msg)
        })?;
        return Self::from_json(&text);
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::error("image resolution must be non-zero"));
        }
        if self.spp == 0 {
            return Err(RenderError::error("spp must be at least 1"));
        }
        if self.numeric.simpson_intervals == 0 {
            return Err(RenderError::error(
                "numeric.simpson_intervals must be at least 1",
            ));
        }
        let tol = self.numeric.bisection_tolerance;
        if tol <= 0.0 || tol.is_nan() {
            return Err(RenderError::error(
                "numeric.bisection_tolerance must be positive",
            ));
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let opts = RenderOptions::from_json("{}").unwrap();
        assert_eq!(opts, RenderOptions::default());
        assert_eq!(opts.numeric.simpson_intervals, 10);
        assert_eq!(opts.numeric.bisection_iterations, 10);
    }

    #[test]
    fn test_002() {
        let text = r#"{ "width": 64, "spp": 4, "scene": "cornell-rect-sa",
                        "numeric": { "bisection_iterations": 40 } }"#;
        let opts = RenderOptions::from_json(text).unwrap();
        assert_eq!(opts.width, 64);
        assert_eq!(opts.height, 500);
        assert_eq!(opts.spp, 4);
        assert_eq!(opts.scene, "cornell-rect-sa");
        assert_eq!(opts.numeric.bisection_iterations, 40);
        assert_eq!(opts.numeric.simpson_intervals, 10);
    }

    #[test]
    fn test_003() {
        assert!(RenderOptions::from_json(r#"{ "spp": 0 }"#).is_err());
        assert!(RenderOptions::from_json(r#"{ "width": "wide" }"#).is_err());
    }
}
