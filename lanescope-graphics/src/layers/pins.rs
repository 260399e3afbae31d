use nalgebra::Point2;

use crate::{color::Color, lane::LaneGeometry, surface::DrawSurface};

/// Distance of the head pin from the foul line, in mm.
pub const HEAD_PIN_DISTANCE_MM: f64 = 18288.0;
/// Down-lane distance between pin rows, in mm.
pub const ROW_SPACING_MM: f64 = 263.96442;
/// Cross-lane distance between neighbouring pins of a row, in mm.
pub const SIDE_SPACING_MM: f64 = 304.8;
pub const PIN_DIAMETER_MM: f64 = 86.3;

/// Cross-lane offsets from the lane centre in side spacings, one slice per row.
const PIN_ROWS: [&[f64]; 4] = [
    &[0.0],
    &[0.5, -0.5],
    &[0.0, 1.0, -1.0],
    &[0.5, 1.5, -0.5, -1.5],
];

/// Pin centres in pixels, head pin first.
pub fn pin_positions(geometry: &LaneGeometry) -> Vec<Point2<f64>> {
    let head = geometry.length_to_pixels(HEAD_PIN_DISTANCE_MM);
    let row_spacing = geometry.length_to_pixels(ROW_SPACING_MM);
    let side_spacing = geometry.width_to_pixels(SIDE_SPACING_MM);
    let center = geometry.lane_width() / 2.0;

    PIN_ROWS
        .iter()
        .enumerate()
        .flat_map(|(row, offsets)| {
            offsets.iter().map(move |offset| {
                Point2::new(
                    head + row_spacing * row as f64,
                    center + side_spacing * offset,
                )
            })
        })
        .collect()
}

/// The 1-2-3-4 triangle on the pin deck.
pub fn draw<S: DrawSurface + ?Sized>(surface: &mut S, geometry: &LaneGeometry) {
    let radius = geometry.width_to_pixels(PIN_DIAMETER_MM / 2.0);

    for center in pin_positions(geometry) {
        surface.fill_circle(center, radius, Color::MARKING);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::ScaleFactors;

    #[test]
    fn ten_pins_in_four_rows() {
        let geometry = LaneGeometry::regulation(ScaleFactors::new(0.089, 0.25).unwrap());
        let positions = pin_positions(&geometry);
        assert_eq!(positions.len(), 10);

        let mut row_sizes = Vec::<usize>::new();
        let mut last_x = None;
        for p in &positions {
            if last_x == Some(p.x) {
                *row_sizes.last_mut().unwrap() += 1;
            } else {
                row_sizes.push(1);
                last_x = Some(p.x);
            }
        }
        assert_eq!(row_sizes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn triangle_is_symmetric_about_the_lane_center() {
        let geometry = LaneGeometry::regulation(ScaleFactors::new(1.0, 1.0).unwrap());
        let center = geometry.lane_width() / 2.0;
        let positions = pin_positions(&geometry);

        assert_eq!(positions[0], Point2::new(18288.0, center));
        for p in &positions {
            let mirrored = 2.0 * center - p.y;
            assert!(positions
                .iter()
                .any(|q| q.x == p.x && (q.y - mirrored).abs() < 1e-9));
        }
        // 7 and 10 pins sit one and a half side spacings out.
        assert!((positions[9].y - (center - 1.5 * 304.8)).abs() < 1e-9);
        assert!((positions[9].x - (18288.0 + 3.0 * 263.96442)).abs() < 1e-9);
    }
}
