/*!
 * Lane markings, one module per toggleable layer.
 *
 * Each layer is a free function drawing onto any `DrawSurface` from a `LaneGeometry`; the order in
 * which layers are stacked is decided by the renderer.
 */

use std::fmt;
use std::str::FromStr;

pub mod arrows;
pub mod dots;
pub mod lane_surface;
pub mod pins;
pub mod range_finders;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    LaneSurface,
    Dots,
    Arrows,
    RangeFinders,
    Pins,
    Trace,
}

impl Layer {
    /// Marking layers in stacking order. Traces are drawn on top of these.
    pub const MARKINGS: [Layer; 5] = [
        Layer::LaneSurface,
        Layer::Dots,
        Layer::Arrows,
        Layer::RangeFinders,
        Layer::Pins,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::LaneSurface => "lane_surface",
            Layer::Dots => "dots",
            Layer::Arrows => "arrows",
            Layer::RangeFinders => "range_finders",
            Layer::Pins => "pins",
            Layer::Trace => "trace",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "lane_surface" => Ok(Layer::LaneSurface),
            "dots" => Ok(Layer::Dots),
            "arrows" => Ok(Layer::Arrows),
            "range_finders" => Ok(Layer::RangeFinders),
            "pins" => Ok(Layer::Pins),
            "trace" => Ok(Layer::Trace),
            _ => Err(anyhow::anyhow!("Invalid string for Layer conversion: {}", s)),
        }
    }
}

/// Which marking layers to draw on a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerConfig {
    pub lane_surface: bool,
    pub dots: bool,
    pub arrows: bool,
    pub range_finders: bool,
    pub pins: bool,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl LayerConfig {
    pub const fn all() -> Self {
        Self {
            lane_surface: true,
            dots: true,
            arrows: true,
            range_finders: true,
            pins: true,
        }
    }

    /// Copy of this config with `layer` switched on or off. Traces are not configurable here.
    pub fn with(mut self, layer: Layer, enabled: bool) -> Self {
        match layer {
            Layer::LaneSurface => self.lane_surface = enabled,
            Layer::Dots => self.dots = enabled,
            Layer::Arrows => self.arrows = enabled,
            Layer::RangeFinders => self.range_finders = enabled,
            Layer::Pins => self.pins = enabled,
            Layer::Trace => {}
        }
        self
    }

    pub fn is_enabled(&self, layer: Layer) -> bool {
        match layer {
            Layer::LaneSurface => self.lane_surface,
            Layer::Dots => self.dots,
            Layer::Arrows => self.arrows,
            Layer::RangeFinders => self.range_finders,
            Layer::Pins => self.pins,
            Layer::Trace => true,
        }
    }
}
