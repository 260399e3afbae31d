use nalgebra::Point2;

use crate::{color::Color, lane::LaneGeometry, surface::DrawSurface};

/// Distance of the front range finders from the foul line, in mm.
pub const FRONT_RANGE_FINDER_DISTANCE_MM: f64 = 10363.0;
pub const RANGE_FINDER_LENGTH_MM: f64 = 914.0;

pub const FRONT_RANGE_FINDER_BOARDS: [u32; 2] = [15, 25];
pub const REAR_RANGE_FINDER_BOARDS: [u32; 2] = [10, 30];

/// Two pairs of one-board-wide rectangles, the rear pair two range finder lengths behind the front.
pub fn draw<S: DrawSurface + ?Sized>(surface: &mut S, geometry: &LaneGeometry) {
    let length = geometry.length_to_pixels(RANGE_FINDER_LENGTH_MM);
    let front = geometry.length_to_pixels(FRONT_RANGE_FINDER_DISTANCE_MM);
    let rear = front + length * 2.0;

    let rows = [
        (front, FRONT_RANGE_FINDER_BOARDS),
        (rear, REAR_RANGE_FINDER_BOARDS),
    ];
    for (x, boards) in rows {
        for board in boards {
            surface.fill_rect(
                Point2::new(x, geometry.board_bounds(board).left),
                length,
                geometry.board_width(),
                Color::RANGE_FINDER,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lane::ScaleFactors, surface::DrawCall, RecordingSurface};

    #[test]
    fn rear_pair_sits_two_lengths_behind_front_pair() {
        let geometry = LaneGeometry::regulation(ScaleFactors::new(0.089, 0.25).unwrap());
        let mut surface = RecordingSurface::new();
        draw(&mut surface, &geometry);

        let rects = surface
            .calls()
            .iter()
            .map(|recorded| match &recorded.call {
                DrawCall::FillRect {
                    origin,
                    width,
                    height,
                    ..
                } => (*origin, *width, *height),
                other => panic!("expected a rect, got {other:?}"),
            })
            .collect::<Vec<_>>();

        assert_eq!(rects.len(), 4);
        let (front, length, height) = rects[0];
        assert!((front.x - 10363.0 * 0.089).abs() < 1e-9);
        assert!((length - 914.0 * 0.089).abs() < 1e-9);
        assert!((height - geometry.board_width()).abs() < 1e-12);
        assert!((rects[2].0.x - (12191.0 * 0.089)).abs() < 1e-9);
        assert_eq!(rects[3].0.y, geometry.board_bounds(30).left);
    }
}
