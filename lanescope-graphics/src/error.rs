use thiserror::Error;

/// Reasons a shot cannot be turned into a trace line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    #[error("ball position must have 2 elements, got {0}")]
    PointCount(usize),
    #[error("board {board} is not on a lane of {board_count} boards")]
    BoardOutOfRange { board: u32, board_count: u32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("{axis} scale must be a positive finite number, got {value}")]
    NotPositive { axis: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaneSpecError {
    #[error("a lane needs at least one board")]
    NoBoards,
    #[error("lane {dimension} must be a positive finite number of mm, got {value}")]
    NotPositive { dimension: &'static str, value: f64 },
}
