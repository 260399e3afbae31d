/*! Ball traces.
 *
 * A shot is two observed ball positions. The trace drawn for it is the straight line through both
 * points, extended until it leaves the lane across the gutters (or the lane ends, for a ball that
 * never changes board).
 */

use nalgebra::Point2;

use crate::{color::Color, error::TraceError, lane::LaneGeometry, surface::DrawSurface};

/// Trace stroke width relative to the board width, roughly a ball's diameter.
const TRACE_WIDTH_BOARDS: f64 = 0.66;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallPosition {
    /// 1-based board index.
    pub board: u32,
    /// Distance from the foul line, in mm.
    pub distance: f64,
}

impl BallPosition {
    pub fn new(board: u32, distance: f64) -> Self {
        Self { board, distance }
    }
}

/// Exactly two ball positions, in the order they were observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    first: BallPosition,
    second: BallPosition,
}

impl Shot {
    pub fn new(first: BallPosition, second: BallPosition) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> BallPosition {
        self.first
    }

    pub fn second(&self) -> BallPosition {
        self.second
    }
}

impl TryFrom<&[BallPosition]> for Shot {
    type Error = TraceError;

    fn try_from(positions: &[BallPosition]) -> Result<Self, TraceError> {
        match positions {
            [first, second] => Ok(Self::new(*first, *second)),
            _ => Err(TraceError::PointCount(positions.len())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceLine {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
    pub width: f64,
}

impl TraceLine {
    pub fn from_shot(geometry: &LaneGeometry, shot: &Shot) -> Self {
        let to_pixels = |position: BallPosition| {
            Point2::new(
                geometry.length_to_pixels(position.distance),
                geometry.board_bounds(position.board).center,
            )
        };
        let a = to_pixels(shot.first);
        let b = to_pixels(shot.second);
        let width = geometry.board_width() * TRACE_WIDTH_BOARDS;
        let lane_width = geometry.lane_width();

        let delta = b - a;
        // Same board, including two identical observations: straight down the lane.
        if delta.y == 0.0 {
            return Self {
                from: Point2::new(0.0, a.y),
                to: Point2::new(geometry.lane_length(), b.y),
                width,
            };
        }

        // Same distance on different boards: straight across the boards.
        if delta.x == 0.0 {
            return Self {
                from: Point2::new(a.x, 0.0),
                to: Point2::new(a.x, lane_width),
                width,
            };
        }

        let slope = delta.y / delta.x;
        let intercept = a.y - slope * a.x;
        let x_at = |y: f64| (y - intercept) / slope;

        Self {
            from: Point2::new(x_at(0.0), 0.0),
            to: Point2::new(x_at(lane_width), lane_width),
            width,
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.stroke_line(self.from, self.to, self.width, Color::TRACE);
    }
}

/// Validates `positions` as a shot and computes its trace line.
pub fn compute_trace(
    geometry: &LaneGeometry,
    positions: &[BallPosition],
) -> Result<TraceLine, TraceError> {
    let shot = Shot::try_from(positions)?;
    for position in [shot.first, shot.second] {
        if !(1..=geometry.board_count()).contains(&position.board) {
            return Err(TraceError::BoardOutOfRange {
                board: position.board,
                board_count: geometry.board_count(),
            });
        }
    }

    Ok(TraceLine::from_shot(geometry, &shot))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::lane::ScaleFactors;

    const EPSILON: f64 = 1e-9;

    fn geometry() -> LaneGeometry {
        LaneGeometry::regulation(ScaleFactors::new(0.089, 0.25).unwrap())
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn rejects_anything_but_two_points(#[case] count: usize) {
        let positions = vec![BallPosition::new(20, 1000.0); count];
        assert_eq!(
            compute_trace(&geometry(), &positions),
            Err(TraceError::PointCount(count))
        );
    }

    #[rstest]
    #[case(0, 20)]
    #[case(24, 40)]
    fn rejects_boards_off_the_lane(#[case] first: u32, #[case] second: u32) {
        let positions = [BallPosition::new(first, 1829.0), BallPosition::new(second, 4572.0)];
        let board = if first == 0 { first } else { second };
        assert_eq!(
            compute_trace(&geometry(), &positions),
            Err(TraceError::BoardOutOfRange {
                board,
                board_count: 39
            })
        );
    }

    #[test]
    fn identical_points_trace_along_their_board() {
        let geometry = geometry();
        let p = BallPosition::new(17, 1829.0);
        let line = compute_trace(&geometry, &[p, p]).unwrap();

        let y = geometry.board_bounds(17).center;
        assert_eq!(line.from, Point2::new(0.0, y));
        assert_eq!(line.to, Point2::new(geometry.lane_length(), y));
    }

    #[test]
    fn same_board_spans_the_whole_lane_length() {
        let geometry = geometry();
        let line = compute_trace(
            &geometry,
            &[BallPosition::new(17, 1829.0), BallPosition::new(17, 9000.0)],
        )
        .unwrap();

        let y = geometry.board_bounds(17).center;
        assert_eq!(line.from, Point2::new(0.0, y));
        assert_eq!(line.to, Point2::new(geometry.lane_length(), y));
    }

    #[test]
    fn same_distance_crosses_the_lane_at_that_distance() {
        let geometry = geometry();
        let line = compute_trace(
            &geometry,
            &[BallPosition::new(10, 4572.0), BallPosition::new(30, 4572.0)],
        )
        .unwrap();

        let x = geometry.length_to_pixels(4572.0);
        assert_eq!(line.from, Point2::new(x, 0.0));
        assert_eq!(line.to, Point2::new(x, geometry.lane_width()));
    }

    #[test]
    fn sloped_shot_is_clipped_to_the_gutters() {
        let geometry = geometry();
        let first = BallPosition::new(24, 1829.0);
        let second = BallPosition::new(20, 4572.0);
        let line = compute_trace(&geometry, &[first, second]).unwrap();

        assert_eq!(line.from.y, 0.0);
        assert_eq!(line.to.y, geometry.lane_width());
        assert!((line.width - geometry.board_width() * 0.66).abs() < EPSILON);

        // Both observed points lie on the drawn line.
        let direction = line.to - line.from;
        for p in [first, second] {
            let point = Point2::new(
                geometry.length_to_pixels(p.distance),
                geometry.board_bounds(p.board).center,
            );
            let offset = point - line.from;
            let cross = direction.x * offset.y - direction.y * offset.x;
            assert!(cross.abs() < 1e-6, "{p:?} is off the trace");
        }
    }

    #[test]
    fn trace_is_deterministic() {
        let geometry = geometry();
        let positions = [BallPosition::new(24, 1829.0), BallPosition::new(20, 4572.0)];

        let first = compute_trace(&geometry, &positions).unwrap();
        for _ in 0..5 {
            assert_eq!(compute_trace(&geometry, &positions).unwrap(), first);
        }
    }

    #[test]
    fn shot_keeps_observation_order() {
        let positions = [BallPosition::new(24, 1829.0), BallPosition::new(20, 4572.0)];
        let shot = Shot::try_from(&positions[..]).unwrap();

        assert_eq!(shot.first(), positions[0]);
        assert_eq!(shot.second(), positions[1]);
    }
}
