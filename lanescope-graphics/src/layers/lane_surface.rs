use nalgebra::Point2;

use crate::{color::Color, lane::LaneGeometry, surface::DrawSurface};

/// Depth of the foul line, in mm.
pub const FOUL_LINE_DEPTH_MM: f64 = 20.0;

pub const BOARD_SEPARATOR_WIDTH: f64 = 0.1;
/// Separators bordering every group of 5 boards.
pub const BOARD_GROUP_SEPARATOR_WIDTH: f64 = 0.25;

/// Base lane colour, the foul line and the lengthwise board separators.
pub fn draw<S: DrawSurface + ?Sized>(surface: &mut S, geometry: &LaneGeometry) {
    surface.fill_rect(
        Point2::origin(),
        geometry.lane_length(),
        geometry.lane_width(),
        Color::LANE,
    );

    surface.fill_rect(
        Point2::origin(),
        geometry.length_to_pixels(FOUL_LINE_DEPTH_MM),
        geometry.lane_width(),
        Color::MARKING,
    );

    for i in 0..geometry.board_count() {
        let y = geometry.board_width() * i as f64;
        surface.stroke_line(
            Point2::new(0.0, y),
            Point2::new(geometry.lane_length(), y),
            separator_width(i),
            Color::MARKING,
        );
    }
}

fn separator_width(i: u32) -> f64 {
    if i % 5 == 0 || (i + 1) % 5 == 0 {
        BOARD_GROUP_SEPARATOR_WIDTH
    } else {
        BOARD_SEPARATOR_WIDTH
    }
}
