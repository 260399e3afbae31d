/*!
 * Scale drawings of a ten-pin bowling lane.
 *
 * Lane measurements are given in millimetres and converted to pixels with two independent scale
 * factors, one per axis. The x axis of every drawing surface runs down-lane from the foul line,
 * the y axis runs across the boards.
 */

pub mod color;
pub mod error;
pub mod lane;
pub mod layers;
pub mod renderer;
pub mod surface;
pub mod svg;
pub mod trace;

pub use color::Color;
pub use error::{LaneSpecError, ScaleError, TraceError};
pub use lane::{BoardBounds, LaneGeometry, LaneSpec, ScaleFactors};
pub use layers::{Layer, LayerConfig};
pub use renderer::{LaneRenderer, RenderReport, TraceWarning};
pub use surface::{DrawCall, DrawSurface, RecordedCall, RecordingSurface};
pub use svg::SvgSurface;
pub use trace::{BallPosition, Shot, TraceLine};
