//! Drawing surface abstraction.
//!
//! Layers emit whole primitives (rectangles, strokes, circles, polygons) in pixel space. The x axis
//! runs down-lane, the y axis runs across the boards, origin at the top-left corner.

use nalgebra::Point2;

use crate::{color::Color, layers::Layer};

/// Target for lane drawings (SVG document, draw-call log, raster canvas...).
pub trait DrawSurface {
    /// Set the surface dimensions in pixels.
    fn resize(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: Color);

    fn stroke_line(&mut self, from: Point2<f64>, to: Point2<f64>, line_width: f64, color: Color);

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Color);

    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Color);

    /// Called before the primitives of `layer` are emitted.
    fn begin_layer(&mut self, _layer: Layer) {}

    /// Called after the last primitive of the current layer.
    fn end_layer(&mut self) {}

    /// Whether there is a drawing context behind this surface. Nothing is drawn when `false`.
    fn is_usable(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        origin: Point2<f64>,
        width: f64,
        height: f64,
        color: Color,
    },
    StrokeLine {
        from: Point2<f64>,
        to: Point2<f64>,
        line_width: f64,
        color: Color,
    },
    FillCircle {
        center: Point2<f64>,
        radius: f64,
        color: Color,
    },
    FillPolygon {
        points: Vec<Point2<f64>>,
        color: Color,
    },
}

/// A draw call tagged with the layer that was open when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub layer: Option<Layer>,
    pub call: DrawCall,
}

/// Surface that keeps a log of every primitive instead of rasterizing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Option<(f64, f64)>,
    calls: Vec<RecordedCall>,
    current_layer: Option<Layer>,
    detached: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface without a drawing context, e.g. a canvas that is not mounted yet.
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    /// Dimensions from the last `resize`.
    pub fn size(&self) -> Option<(f64, f64)> {
        self.size
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    pub fn calls_for(&self, layer: Layer) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(move |recorded| recorded.layer == Some(layer))
            .map(|recorded| &recorded.call)
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Forget all recorded calls. The size is kept.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.current_layer = None;
    }

    fn record(&mut self, call: DrawCall) {
        self.calls.push(RecordedCall {
            layer: self.current_layer,
            call,
        });
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.size = Some((width, height));
    }

    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: Color) {
        self.record(DrawCall::FillRect {
            origin,
            width,
            height,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point2<f64>, to: Point2<f64>, line_width: f64, color: Color) {
        self.record(DrawCall::StrokeLine {
            from,
            to,
            line_width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Color) {
        self.record(DrawCall::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Color) {
        self.record(DrawCall::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn begin_layer(&mut self, layer: Layer) {
        self.current_layer = Some(layer);
    }

    fn end_layer(&mut self) {
        self.current_layer = None;
    }

    fn is_usable(&self) -> bool {
        !self.detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_calls_with_open_layer() {
        let mut surface = RecordingSurface::new();
        surface.fill_circle(Point2::new(1.0, 1.0), 0.5, Color::BLACK);
        surface.begin_layer(Layer::Pins);
        surface.fill_circle(Point2::new(2.0, 2.0), 0.5, Color::BLACK);
        surface.end_layer();

        assert_eq!(surface.calls().len(), 2);
        assert_eq!(surface.calls()[0].layer, None);
        assert_eq!(surface.calls_for(Layer::Pins).count(), 1);
        assert_eq!(surface.calls_for(Layer::Dots).count(), 0);
    }

    #[test]
    fn clear_keeps_size() {
        let mut surface = RecordingSurface::new();
        surface.resize(10.0, 5.0);
        surface.fill_polygon(&[Point2::origin(), Point2::new(1.0, 0.0)], Color::BLACK);
        surface.clear();

        assert!(surface.is_empty());
        assert_eq!(surface.size(), Some((10.0, 5.0)));
    }

    #[test]
    fn detached_surface_is_not_usable() {
        assert!(RecordingSurface::new().is_usable());
        assert!(!RecordingSurface::detached().is_usable());
    }
}
