use crate::error::{LaneSpecError, ScaleError};

/// Real-world lane dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneSpec {
    /// Foul line to the end of the pin deck, in mm.
    pub length_mm: f64,
    /// Gutter to gutter, in mm.
    pub width_mm: f64,
    pub board_count: u32,
}

impl LaneSpec {
    pub const REGULATION: LaneSpec = LaneSpec {
        length_mm: 19250.0,
        width_mm: 1054.0,
        board_count: 39,
    };

    pub fn validate(&self) -> Result<(), LaneSpecError> {
        if self.board_count == 0 {
            return Err(LaneSpecError::NoBoards);
        }
        for (dimension, value) in [("length", self.length_mm), ("width", self.width_mm)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LaneSpecError::NotPositive { dimension, value });
            }
        }

        Ok(())
    }
}

/// Millimetre to pixel multipliers, one per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    length: f64,
    width: f64,
}

impl ScaleFactors {
    pub fn new(length: f64, width: f64) -> Result<Self, ScaleError> {
        for (axis, value) in [("length", length), ("width", width)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScaleError::NotPositive { axis, value });
            }
        }

        Ok(Self { length, width })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Pixel offsets of one board along the width axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardBounds {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

/// Lane dimensions in pixels. Computed once and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneGeometry {
    spec: LaneSpec,
    scale: ScaleFactors,
    lane_length: f64,
    lane_width: f64,
    board_width: f64,
}

impl LaneGeometry {
    pub fn new(spec: LaneSpec, scale: ScaleFactors) -> Result<Self, LaneSpecError> {
        spec.validate()?;
        Ok(Self::from_valid_spec(spec, scale))
    }

    pub fn regulation(scale: ScaleFactors) -> Self {
        Self::from_valid_spec(LaneSpec::REGULATION, scale)
    }

    fn from_valid_spec(spec: LaneSpec, scale: ScaleFactors) -> Self {
        let lane_length = spec.length_mm * scale.length;
        let lane_width = spec.width_mm * scale.width;
        let board_width = lane_width / spec.board_count as f64;

        log::debug!(
            "Lane geometry {:.2}x{:.2}px, board width {:.3}px",
            lane_length,
            lane_width,
            board_width
        );

        Self {
            spec,
            scale,
            lane_length,
            lane_width,
            board_width,
        }
    }

    pub fn spec(&self) -> &LaneSpec {
        &self.spec
    }

    pub fn scale(&self) -> &ScaleFactors {
        &self.scale
    }

    pub fn lane_length(&self) -> f64 {
        self.lane_length
    }

    pub fn lane_width(&self) -> f64 {
        self.lane_width
    }

    pub fn board_width(&self) -> f64 {
        self.board_width
    }

    pub fn board_count(&self) -> u32 {
        self.spec.board_count
    }

    /// Converts a down-lane distance in millimetres to pixels.
    pub fn length_to_pixels(&self, mm: f64) -> f64 {
        mm * self.scale.length
    }

    /// Converts a cross-lane distance in millimetres to pixels.
    pub fn width_to_pixels(&self, mm: f64) -> f64 {
        mm * self.scale.width
    }

    /// Board 1 sits at the bottom of the surface (largest y), board `board_count` at the top.
    pub fn board_bounds(&self, board: u32) -> BoardBounds {
        debug_assert!(
            (1..=self.spec.board_count).contains(&board),
            "board {} outside 1..={}",
            board,
            self.spec.board_count
        );

        let left = self.lane_width - board as f64 * self.board_width;
        BoardBounds {
            left,
            center: left + self.board_width / 2.0,
            right: left + self.board_width,
        }
    }
}
