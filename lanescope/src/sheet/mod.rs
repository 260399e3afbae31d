/*!
 * Lane sheets: what to draw and where to write it.
 */
use std::path::PathBuf;

use lanescope_graphics::{BallPosition, LayerConfig, ScaleFactors};

pub mod parse;

/// Scale used when a sheet has no `SCALE` section, about 1.7k x 260 pixels.
pub const DEFAULT_LENGTH_SCALE: f64 = 0.089;
pub const DEFAULT_WIDTH_SCALE: f64 = 0.25;

pub const DEFAULT_OUTPUT_PATH: &str = "lane.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct LaneSheet {
    pub scale: ScaleFactors,
    pub layers: LayerConfig,
    /// Raw ball positions per shot. Point counts are checked when rendering.
    pub shots: Vec<Vec<BallPosition>>,
    pub output_path: Option<PathBuf>,
}

impl LaneSheet {
    pub fn output_path_or_default(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}

impl Default for LaneSheet {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            layers: LayerConfig::all(),
            shots: Vec::new(),
            output_path: None,
        }
    }
}

fn default_scale() -> ScaleFactors {
    match ScaleFactors::new(DEFAULT_LENGTH_SCALE, DEFAULT_WIDTH_SCALE) {
        Ok(scale) => scale,
        Err(err) => unreachable!("default scale is valid: {}", err),
    }
}
