//! Growable output buffers for the scene-graph writer.
//!
//! One buffer set accumulates a whole output mesh: successive shapes (or
//! glyphs of a text run) append strictly sequentially, each call offsetting
//! its face indices by the points already present. Buffers only grow; once
//! handed to the writer they are not mutated again.

use crate::core::Vec3;
use crate::error::{Result, StitchError};
use serde::{Deserialize, Serialize};

/// Indexed polygon-mesh buffers: `points`, per-face vertex counts, and the
/// flattened per-face index lists.
///
/// Invariants, maintained by [`MeshBuffers::append_loop`]:
/// - `face_vertex_counts.iter().sum() == face_vertex_indices.len()`
/// - every stored index is `< points.len()` at the time it is appended
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Mapped 3D positions.
    pub points: Vec<Vec3>,
    /// One entry per face: how many consecutive indices belong to it.
    pub face_vertex_counts: Vec<u32>,
    /// Flattened per-face index lists into `points`.
    pub face_vertex_indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accumulated points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of accumulated faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_vertex_counts.len()
    }

    /// True when nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends one face loop.
    ///
    /// `indices` are loop-local (each `< points.len()`); they are stored
    /// shifted by the buffer's point count *before* this loop's points are
    /// appended. On an out-of-range index nothing is appended and the
    /// buffers are left untouched.
    pub fn append_loop(&mut self, points: &[Vec3], indices: &[u32]) -> Result<()> {
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= points.len()) {
            return Err(StitchError::InvalidIndex {
                index: bad,
                len: points.len(),
            });
        }

        let base = self.points.len() as u32;
        self.points.extend_from_slice(points);
        self.face_vertex_counts.push(indices.len() as u32);
        self.face_vertex_indices.extend(indices.iter().map(|&i| i + base));
        Ok(())
    }
}

/// Polyline buffers for unfillable (stroked) shapes.
///
/// Each appended contour becomes one curve with its own vertex count; the
/// writer applies `width` as a constant interpolation across all segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveBuffers {
    /// Mapped 3D positions.
    pub points: Vec<Vec3>,
    /// One entry per curve: how many consecutive points belong to it.
    pub curve_vertex_counts: Vec<u32>,
    /// Constant per-segment stroke width.
    pub width: f64,
}

impl CurveBuffers {
    /// Creates empty curve buffers with the given constant stroke width.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            points: Vec::new(),
            curve_vertex_counts: Vec::new(),
            width,
        }
    }

    /// Number of accumulated curves.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curve_vertex_counts.len()
    }

    /// True when nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends one open polyline. An empty polyline contributes nothing.
    pub fn append_polyline(&mut self, points: &[Vec3]) {
        if points.is_empty() {
            return;
        }
        self.points.extend_from_slice(points);
        self.curve_vertex_counts.push(points.len() as u32);
    }
}

impl Default for CurveBuffers {
    fn default() -> Self {
        Self::new(1.0)
    }
}
