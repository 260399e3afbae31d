use nalgebra::Point2;

use crate::{color::Color, lane::LaneGeometry, surface::DrawSurface};

/// Distance of the first arrow's base from the foul line, in mm.
pub const ARROW_DISTANCE_MM: f64 = 3658.0;
/// Base to tip, in mm.
pub const ARROW_LENGTH_MM: f64 = 250.0;
pub const ARROW_COUNT: u32 = 7;
/// Arrows walking away from the foul line before they turn back.
const ARROWS_OUTWARD: u32 = 3;

/// Board the `index`-th arrow points along: 5, 10, ..., 35.
pub fn arrow_board(index: u32) -> u32 {
    index * 5 + 5
}

/// Down-lane pixel offsets of every arrow base.
pub fn arrow_positions(geometry: &LaneGeometry) -> Vec<f64> {
    let arrow_length = geometry.length_to_pixels(ARROW_LENGTH_MM);
    let mut x = geometry.length_to_pixels(ARROW_DISTANCE_MM);

    (0..ARROW_COUNT)
        .map(|index| {
            let current = x;
            if index < ARROWS_OUTWARD {
                x += arrow_length;
            } else {
                x -= arrow_length;
            }
            current
        })
        .collect()
}

/// Seven triangles, each spanning its board and pointing down-lane.
pub fn draw<S: DrawSurface + ?Sized>(surface: &mut S, geometry: &LaneGeometry) {
    let arrow_length = geometry.length_to_pixels(ARROW_LENGTH_MM);

    for (index, x) in (0..ARROW_COUNT).zip(arrow_positions(geometry)) {
        let bounds = geometry.board_bounds(arrow_board(index));
        surface.fill_polygon(
            &[
                Point2::new(x, bounds.left),
                Point2::new(x, bounds.right),
                Point2::new(x + arrow_length, bounds.center),
            ],
            Color::MARKING,
        );
    }
}
