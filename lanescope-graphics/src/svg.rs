//! SVG output for lane drawings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Point2;

use crate::{color::Color, layers::Layer, surface::DrawSurface};

/// Builds an SVG document, one `<g>` group per drawn layer.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    layer_open: bool,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The complete document. Can be called at any point, an open layer group is closed in the
    /// output only.
    pub fn to_svg_string(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.3} {:.3}">"#,
            self.width.ceil(),
            self.height.ceil(),
            self.width,
            self.height
        );
        svg.push('\n');
        svg.push_str(&self.body);
        if self.layer_open {
            svg.push_str("  </g>\n");
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_svg_string())
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;

        log::info!(
            "Wrote {:.0}x{:.0} lane drawing to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    fn push_element(&mut self, element: String) {
        let indent = if self.layer_open { "    " } else { "  " };
        self.body.push_str(indent);
        self.body.push_str(&element);
        self.body.push('\n');
    }
}

fn fill_attributes(color: Color) -> String {
    if color.a == 255 {
        format!(r#"fill="{}""#, color)
    } else {
        format!(r#"fill="{}" fill-opacity="{:.3}""#, color, color.opacity())
    }
}

impl DrawSurface for SvgSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn fill_rect(&mut self, origin: Point2<f64>, width: f64, height: f64, color: Color) {
        self.push_element(format!(
            r#"<rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" {}/>"#,
            origin.x,
            origin.y,
            width,
            height,
            fill_attributes(color)
        ));
    }

    fn stroke_line(&mut self, from: Point2<f64>, to: Point2<f64>, line_width: f64, color: Color) {
        self.push_element(format!(
            r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.3}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            color,
            color.opacity(),
            line_width
        ));
    }

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Color) {
        self.push_element(format!(
            r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" {}/>"#,
            center.x,
            center.y,
            radius,
            fill_attributes(color)
        ));
    }

    fn fill_polygon(&mut self, points: &[Point2<f64>], color: Color) {
        let points = points
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.push_element(format!(
            r#"<polygon points="{}" {}/>"#,
            points,
            fill_attributes(color)
        ));
    }

    fn begin_layer(&mut self, layer: Layer) {
        if self.layer_open {
            self.end_layer();
        }
        self.body
            .push_str(&format!("  <g id=\"{}\">\n", layer.name()));
        self.layer_open = true;
    }

    fn end_layer(&mut self) {
        if self.layer_open {
            self.body.push_str("  </g>\n");
            self.layer_open = false;
        }
    }
}
