use crate::{
    error::{LaneSpecError, TraceError},
    lane::{LaneGeometry, LaneSpec, ScaleFactors},
    layers::{self, Layer, LayerConfig},
    surface::DrawSurface,
    trace::{compute_trace, BallPosition, TraceLine},
};

/// A shot that was skipped during a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceWarning {
    /// Index into the shots passed to `LaneRenderer::render`.
    pub shot_index: usize,
    pub error: TraceError,
}

/// Outcome of one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Nothing was drawn because the surface had no drawing context.
    pub aborted: bool,
    pub layers_drawn: Vec<Layer>,
    pub traces_drawn: usize,
    pub warnings: Vec<TraceWarning>,
}

/// Draws lane markings and traces onto a surface it owns.
///
/// The surface is never cleared; rendering twice without clearing draws everything twice.
pub struct LaneRenderer<S: DrawSurface> {
    surface: S,
    geometry: LaneGeometry,
}

impl<S: DrawSurface> LaneRenderer<S> {
    /// Sizes `surface` to the regulation lane at `scale`.
    pub fn new(surface: S, scale: ScaleFactors) -> Self {
        Self::with_geometry(surface, LaneGeometry::regulation(scale))
    }

    pub fn with_spec(
        surface: S,
        spec: LaneSpec,
        scale: ScaleFactors,
    ) -> Result<Self, LaneSpecError> {
        Ok(Self::with_geometry(surface, LaneGeometry::new(spec, scale)?))
    }

    fn with_geometry(mut surface: S, geometry: LaneGeometry) -> Self {
        surface.resize(geometry.lane_length(), geometry.lane_width());

        Self { surface, geometry }
    }

    pub fn geometry(&self) -> &LaneGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Draws a single marking layer. `draw == false` leaves the surface untouched, as does
    /// `Layer::Trace`, which needs shot data (see `draw_trace`).
    pub fn draw_layer(&mut self, layer: Layer, draw: bool) {
        if !draw {
            return;
        }

        let draw_fn: fn(&mut S, &LaneGeometry) = match layer {
            Layer::LaneSurface => layers::lane_surface::draw,
            Layer::Dots => layers::dots::draw,
            Layer::Arrows => layers::arrows::draw,
            Layer::RangeFinders => layers::range_finders::draw,
            Layer::Pins => layers::pins::draw,
            Layer::Trace => return,
        };

        self.surface.begin_layer(layer);
        draw_fn(&mut self.surface, &self.geometry);
        self.surface.end_layer();
    }

    /// Draws the trace for one shot. Malformed shots draw nothing.
    pub fn draw_trace(&mut self, positions: &[BallPosition]) -> Result<TraceLine, TraceError> {
        let line = compute_trace(&self.geometry, positions)?;

        self.surface.begin_layer(Layer::Trace);
        line.draw(&mut self.surface);
        self.surface.end_layer();

        Ok(line)
    }

    /// Draws the enabled marking layers bottom to top, then one trace per shot.
    pub fn render(&mut self, config: &LayerConfig, shots: &[Vec<BallPosition>]) -> RenderReport {
        let mut report = RenderReport::default();

        if !self.surface.is_usable() {
            log::debug!("No drawing context, skipping render pass");
            report.aborted = true;
            return report;
        }

        for layer in Layer::MARKINGS {
            if config.is_enabled(layer) {
                self.draw_layer(layer, true);
                report.layers_drawn.push(layer);
            }
        }

        for (shot_index, positions) in shots.iter().enumerate() {
            match self.draw_trace(positions) {
                Ok(_) => report.traces_drawn += 1,
                Err(error) => {
                    log::warn!("Error plotting ball trace for shot {}: {}", shot_index, error);
                    report.warnings.push(TraceWarning { shot_index, error });
                }
            }
        }

        if report.traces_drawn > 0 {
            report.layers_drawn.push(Layer::Trace);
        }

        log::debug!(
            "Rendered layers {:?} with {} trace(s), {} warning(s)",
            report.layers_drawn,
            report.traces_drawn,
            report.warnings.len()
        );

        report
    }
}
