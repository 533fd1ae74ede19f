//! Options fixed once per conversion run.
//!
//! A [`ConvertConfig`] is a plain value handed to the pipeline at
//! construction time; nothing in the crate reads configuration from global
//! state mid-run.

use crate::axis::UpAxis;
use crate::error::{Result, StitchError};

/// Default number of line segments used to approximate one curve span.
pub const DEFAULT_CURVE_SEGMENTS: u32 = 32;

/// Conversion-run options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertConfig {
    /// Which scene axis receives the shape's vertical extent.
    pub up_axis: UpAxis,
    /// Line segments per Bézier span when flattening curves.
    pub curve_segments: u32,
    /// Constant stroke width handed to the curve writer.
    pub stroke_width: f64,
}

impl ConvertConfig {
    /// Creates a configuration from explicit values.
    ///
    /// Rejects a zero segment count and non-finite or non-positive widths.
    pub fn new(up_axis: UpAxis, curve_segments: u32, stroke_width: f64) -> Result<Self> {
        if curve_segments == 0 {
            return Err(StitchError::InvalidConfig(
                "curve_segments must be at least 1".to_string(),
            ));
        }
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(StitchError::InvalidConfig(format!(
                "stroke_width must be finite and positive, got {stroke_width}"
            )));
        }
        Ok(Self {
            up_axis,
            curve_segments,
            stroke_width,
        })
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            up_axis: UpAxis::default(),
            curve_segments: DEFAULT_CURVE_SEGMENTS,
            stroke_width: 1.0,
        }
    }
}
