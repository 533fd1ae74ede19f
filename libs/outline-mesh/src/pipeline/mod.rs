//! The conversion pipeline: flattened contours in, buffer growth out.
//!
//! A [`Converter`] carries the per-run options (up axis, curve resolution,
//! stroke width) explicitly; there is no process-wide state. Shapes in a
//! batch are processed strictly sequentially, each appending to the same
//! buffers, and a malformed shape only costs its own faces.

use log::{debug, warn};

use crate::axis::UpAxis;
use crate::buffer::{CurveBuffers, MeshBuffers};
use crate::cluster::cluster;
use crate::config::ConvertConfig;
use crate::contour::Contour;
use crate::core::{Vec2, Vec3};
use crate::flatten::ContourBuilder;
use crate::stitch::stitch;

/// Per-shape layout applied to every 2D point before axis mapping:
/// `(x + x_offset) * scale`, `(y + y_offset) * scale`.
///
/// Used to place successive glyphs along a baseline and to normalise font
/// units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Horizontal offset, in pre-scale units.
    pub x_offset: f64,
    /// Vertical offset, in pre-scale units.
    pub y_offset: f64,
    /// Uniform scale applied after the offset.
    pub scale: f64,
}

impl Placement {
    /// No offset, unit scale.
    pub const IDENTITY: Self = Self {
        x_offset: 0.0,
        y_offset: 0.0,
        scale: 1.0,
    };

    /// Applies the layout to one 2D point.
    #[must_use]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new((p.x + self.x_offset) * self.scale, (p.y + self.y_offset) * self.scale)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Stateless conversion context for one run.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Creates a converter with the given run options.
    #[must_use]
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// The run options.
    #[must_use]
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// The active up-axis mapping.
    #[must_use]
    pub fn up_axis(&self) -> UpAxis {
        self.config.up_axis
    }

    /// A path sink sampling curve spans at this run's configured
    /// resolution. Collaborators that drive path commands (curve parsers,
    /// glyph outline decomposers) obtain their builder here so the segment
    /// count is fixed once per run.
    #[must_use]
    pub fn contour_builder(&self) -> ContourBuilder {
        ContourBuilder::new(self.config.curve_segments)
    }

    /// Empty curve buffers carrying this run's constant stroke width for
    /// the writer.
    #[must_use]
    pub fn curve_buffers(&self) -> CurveBuffers {
        CurveBuffers::new(self.config.stroke_width)
    }

    /// Converts one filled shape's flattened contours into mesh faces.
    ///
    /// Each input sequence becomes a [`Contour`] (duplicate closing point
    /// dropped; sequences below 3 points contribute nothing), contours are
    /// clustered, each cluster is stitched into a single loop, points are
    /// mapped through the up axis, and the result is appended to `buffers`.
    /// A cluster that fails its bridging preconditions is logged and
    /// skipped; sibling clusters and later shapes are unaffected.
    ///
    /// Returns the number of faces appended.
    pub fn fill_to_mesh(
        &self,
        outlines: &[Vec<Vec2>],
        placement: Placement,
        buffers: &mut MeshBuffers,
    ) -> usize {
        if outlines.is_empty() {
            return 0;
        }

        let contours: Vec<Contour> = outlines
            .iter()
            .filter_map(|pts| Contour::from_points(pts.iter().map(|&p| placement.apply(p)).collect()))
            .collect();
        if contours.is_empty() {
            return 0;
        }

        let clusters = cluster(&contours);
        let mut appended = 0;
        for cl in &clusters {
            let looped = match stitch(cl) {
                Ok(looped) => looped,
                Err(err) => {
                    warn!("skipping cluster: {err}");
                    continue;
                }
            };
            let mapped: Vec<Vec3> = looped
                .points
                .iter()
                .map(|&p| self.config.up_axis.map_point(p))
                .collect();
            match buffers.append_loop(&mapped, &looped.indices) {
                Ok(()) => appended += 1,
                Err(err) => warn!("skipping face: {err}"),
            }
        }

        debug!(
            "stitched {} contours into {} faces ({} clusters)",
            contours.len(),
            appended,
            clusters.len()
        );
        appended
    }

    /// Converts one unfillable (stroked) shape's contours into polylines.
    ///
    /// No winding classification, clustering or bridging: each sequence has
    /// a duplicate closing point dropped if present, is placed and mapped,
    /// and lands in `buffers` with its own vertex count. Sequences left with
    /// no points contribute nothing.
    ///
    /// Returns the number of curves appended.
    pub fn stroke_to_curves(
        &self,
        outlines: &[Vec<Vec2>],
        placement: Placement,
        buffers: &mut CurveBuffers,
    ) -> usize {
        let mut appended = 0;
        for pts in outlines {
            let mut pts = pts.clone();
            if pts.len() >= 2 && pts.first() == pts.last() {
                pts.pop();
            }
            if pts.is_empty() {
                continue;
            }
            let mapped: Vec<Vec3> = pts
                .iter()
                .map(|&p| self.config.up_axis.map_point(placement.apply(p)))
                .collect();
            buffers.append_polyline(&mapped);
            appended += 1;
        }
        appended
    }
}
