//! Flattening of path construction commands into polygonal contours.
//!
//! Curve and font-outline libraries drive path sinks with
//! move/line/curve/close commands. [`ContourBuilder`] is that sink: it
//! flattens Bézier spans by uniform parameter sampling and collects one
//! point sequence per sub-path. Closed sub-paths end with an explicit
//! duplicate of their starting point, which the fill pipeline strips again
//! during contour construction.

use crate::core::Vec2;
use crate::pipeline::Placement;

/// Path-construction sink producing flattened point sequences.
#[derive(Debug, Clone)]
pub struct ContourBuilder {
    segments: u32,
    contours: Vec<Vec<Vec2>>,
    current: Vec<Vec2>,
    start: Vec2,
    cursor: Vec2,
}

impl ContourBuilder {
    /// Creates a builder that samples each curve span with `segments` line
    /// segments (clamped to at least 1).
    #[must_use]
    pub fn new(segments: u32) -> Self {
        Self {
            segments: segments.max(1),
            contours: Vec::new(),
            current: Vec::new(),
            start: Vec2::ZERO,
            cursor: Vec2::ZERO,
        }
    }

    /// Starts a new sub-path, flushing any open one.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.flush();
        let p = Vec2::new(x, y);
        self.start = p;
        self.cursor = p;
        self.current.push(p);
    }

    /// Straight segment to `(x, y)`. A segment to the current cursor
    /// position is dropped rather than producing a zero-length edge.
    pub fn line_to(&mut self, x: f64, y: f64) {
        let p = Vec2::new(x, y);
        if self.current.last() == Some(&p) {
            return;
        }
        self.cursor = p;
        self.current.push(p);
    }

    /// Quadratic Bézier span with control point `(x1, y1)` ending at `(x, y)`.
    pub fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        let p0 = self.cursor;
        let p1 = Vec2::new(x1, y1);
        let p2 = Vec2::new(x, y);
        for i in 1..=self.segments {
            let t = f64::from(i) / f64::from(self.segments);
            let u = 1.0 - t;
            self.current.push(u * u * p0 + 2.0 * u * t * p1 + t * t * p2);
        }
        self.cursor = p2;
    }

    /// Cubic Bézier span with control points `(x1, y1)`, `(x2, y2)` ending
    /// at `(x, y)`.
    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let p0 = self.cursor;
        let p1 = Vec2::new(x1, y1);
        let p2 = Vec2::new(x2, y2);
        let p3 = Vec2::new(x, y);
        for i in 1..=self.segments {
            let t = f64::from(i) / f64::from(self.segments);
            let u = 1.0 - t;
            self.current.push(
                u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3,
            );
        }
        self.cursor = p3;
    }

    /// Closes the current sub-path back to its starting point. A sub-path
    /// holding only its starting point is discarded instead of closed, and
    /// no duplicate is emitted when the path already ends on its start.
    pub fn close(&mut self) {
        if self.current.len() >= 2 {
            if self.current.last() != Some(&self.start) {
                self.current.push(self.start);
            }
            self.cursor = self.start;
        }
        self.flush();
    }

    /// Finishes the builder, returning one point sequence per sub-path.
    /// A trailing unclosed sub-path is kept open (no closing duplicate).
    #[must_use]
    pub fn finish(mut self) -> Vec<Vec<Vec2>> {
        self.flush();
        self.contours
    }

    fn flush(&mut self) {
        if self.current.len() >= 2 {
            self.contours.push(std::mem::take(&mut self.current));
        } else {
            self.current.clear();
        }
    }
}

/// Horizontal layout state for a run of glyphs along a baseline.
///
/// Glyph outlines arrive in font units; the run scales them so one em spans
/// `1 / 1.33333` scene units (the CSS pixel-per-point ratio, keeping text
/// sized consistently with surrounding px-specified geometry) and advances
/// the pen by each glyph's advance width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRun {
    units_per_em: f64,
    pen_x: f64,
}

impl GlyphRun {
    /// Starts a run for a font with the given em size in font units.
    #[must_use]
    pub fn new(units_per_em: f64) -> Self {
        Self {
            units_per_em,
            pen_x: 0.0,
        }
    }

    /// Uniform scale applied to glyph outline points.
    #[must_use]
    pub fn scale(&self) -> f64 {
        1.0 / (self.units_per_em * 1.33333)
    }

    /// Placement for the next glyph: the accumulated pen offset in font
    /// units plus the em-normalisation scale.
    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement {
            x_offset: self.pen_x,
            y_offset: 0.0,
            scale: self.scale(),
        }
    }

    /// Advances the pen by a glyph's advance width (font units). Glyphs
    /// without contours, such as spaces, advance the pen and emit nothing.
    pub fn advance(&mut self, width: f64) {
        self.pen_x += width;
    }
}
