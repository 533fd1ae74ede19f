//! Hole bridging: fusing a root-plus-holes cluster into one simple loop.
//!
//! Scene-graph polygon faces cannot carry explicit hole loops, so each hole
//! is spliced into the root boundary through a zero-area bridge: the loop
//! walks out to the hole's nearest vertex, around the hole, back to the same
//! vertex, and returns to the root. The bridge edges coincide, so the face
//! visually encloses root-minus-holes while staying a single non-crossing
//! loop.

use crate::cluster::Cluster;
use crate::core::Vec2;
use crate::error::{Result, StitchError};

/// A single face loop over a cluster's combined point set.
///
/// `indices` reference `points` positionally; the loop is closed implicitly
/// from its last entry back to its first.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgedLoop {
    /// Root points followed by each hole's points in splice order.
    pub points: Vec<Vec2>,
    /// The face's vertex walk. Bridge vertices appear twice.
    pub indices: Vec<u32>,
}

impl BridgedLoop {
    /// Vertex count of the face (the `faceVertexCounts` entry).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.indices.len()
    }
}

/// Splices every hole of `cluster` into its root, producing one face loop.
///
/// Holes are processed in discovery order. For each hole the bridge anchors
/// are the closest root-vertex/hole-vertex pair by Euclidean distance,
/// found by brute-force all-pairs search (ties keep the first pair in
/// root-then-hole iteration order). The hole's points are appended rotated
/// so the walk starts at the bridge vertex, then
/// `[outer, hole vertices…, inner-duplicate]` is spliced in front of the
/// outer anchor's current position in the in-progress loop. Each hole grows
/// the loop by its vertex count plus the two bridge duplicates.
///
/// A cluster with no holes returns the root loop unchanged. A root with
/// fewer than 3 vertices cannot anchor a bridge and fails with
/// [`StitchError::DegenerateCluster`]; callers skip such clusters and keep
/// processing siblings.
pub fn stitch(cluster: &Cluster) -> Result<BridgedLoop> {
    let root = &cluster.root.points;
    if root.len() < 3 {
        return Err(StitchError::degenerate(format!(
            "root contour has {} points, need at least 3",
            root.len()
        )));
    }

    let mut points: Vec<Vec2> = root.clone();
    let mut indices: Vec<u32> = (0..root.len() as u32).collect();

    for hole in &cluster.holes {
        let hole_pts = &hole.points;
        if hole_pts.is_empty() {
            continue;
        }

        // Nearest anchor pair. Squared distance preserves the ordering of
        // the Euclidean metric; strict `<` keeps the first-found tie.
        let mut best = (0usize, 0usize);
        let mut best_dist = f64::INFINITY;
        for (oi, op) in root.iter().enumerate() {
            for (ii, ip) in hole_pts.iter().enumerate() {
                let d = op.distance_squared(*ip);
                if d < best_dist {
                    best_dist = d;
                    best = (oi, ii);
                }
            }
        }
        let (outer, inner) = best;

        let base = points.len() as u32;
        points.extend(hole_pts[inner..].iter().chain(&hole_pts[..inner]));

        let outer = outer as u32;
        let pos = indices
            .iter()
            .position(|&i| i == outer)
            .ok_or_else(|| StitchError::degenerate("bridge anchor missing from loop"))?;

        // Out to the hole, around it, back to the duplicated bridge vertex;
        // the original outer entry then resumes the outer walk.
        let mut slit = Vec::with_capacity(hole_pts.len() + 2);
        slit.push(outer);
        slit.extend(base..base + hole_pts.len() as u32);
        slit.push(base);
        indices.splice(pos..pos, slit);
    }

    Ok(BridgedLoop { points, indices })
}

#[cfg(test)]
mod tests;
