//! Grouping of contours into root-plus-holes clusters.
//!
//! A filled shape flattens to several loops: the letter "O" yields an outer
//! boundary plus an opposite-winding inner loop. Clustering decides which
//! loops are holes of which roots so the stitcher can fuse each group into a
//! single face.

use crate::contour::Contour;

/// One root contour together with the hole contours nested directly inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// The enclosing boundary.
    pub root: Contour,
    /// Opposite-winding contours fully contained in `root`, in discovery
    /// order. Each hole belongs to exactly one cluster.
    pub holes: Vec<Contour>,
}

impl Cluster {
    /// A cluster consisting of just a root, no holes.
    #[must_use]
    pub fn solid(root: Contour) -> Self {
        Self {
            root,
            holes: Vec::new(),
        }
    }
}

/// Groups contours into clusters by winding and containment.
///
/// Contours are visited in their original discovery order as root
/// candidates; a contour already claimed as a hole is skipped. For each
/// root, every other unclaimed contour of opposite winding whose vertices
/// all lie inside the root is attached as a hole and marked claimed, so a
/// hole lands in exactly one cluster (first matching root wins). A root
/// with zero holes is still emitted.
///
/// Quadratic in contour count, which is fine for the single digits to low
/// tens of contours a single shape produces.
#[must_use]
pub fn cluster(contours: &[Contour]) -> Vec<Cluster> {
    let windings: Vec<_> = contours.iter().map(Contour::winding).collect();
    let mut claimed = vec![false; contours.len()];
    let mut clusters = Vec::with_capacity(contours.len());

    for (ri, root) in contours.iter().enumerate() {
        if claimed[ri] {
            continue;
        }
        // A contour emitted as a root is consumed as well; it can never be
        // re-emitted as some later root's hole.
        claimed[ri] = true;

        let mut holes = Vec::new();
        for (hi, hole) in contours.iter().enumerate() {
            if claimed[hi] {
                continue;
            }
            if windings[hi] == windings[ri] {
                continue;
            }
            if root.contains_contour(hole) {
                claimed[hi] = true;
                holes.push(hole.clone());
            }
        }

        clusters.push(Cluster {
            root: root.clone(),
            holes,
        });
    }

    clusters
}
