use nalgebra::Point2;

use crate::{color::Color, lane::LaneGeometry, surface::DrawSurface};

/// Distance of the dot line from the foul line, in mm.
pub const DOT_DISTANCE_MM: f64 = 1829.0;

pub const BOARDS_WITH_DOTS: [u32; 10] = [3, 5, 8, 11, 14, 26, 29, 32, 35, 37];

/// Dot radius relative to the board width.
const DOT_RADIUS_BOARDS: f64 = 0.3;

pub fn draw<S: DrawSurface + ?Sized>(surface: &mut S, geometry: &LaneGeometry) {
    let x = geometry.length_to_pixels(DOT_DISTANCE_MM);
    let radius = geometry.board_width() * DOT_RADIUS_BOARDS;

    for board in BOARDS_WITH_DOTS {
        let center = Point2::new(x, geometry.board_bounds(board).center);
        surface.fill_circle(center, radius, Color::MARKING);
    }
}
