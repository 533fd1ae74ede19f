//! Closed polygonal contours: winding classification and containment.
//!
//! A `Contour` is one closed loop of a flattened shape boundary. Orientation
//! comes from the shoelace signed area; containment uses an even-odd ray
//! cast over every vertex of the candidate hole.

use crate::core::Vec2;

/// Rotational orientation of a closed contour, derived from signed area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Negative (or exactly zero) signed area.
    Clockwise,
    /// Positive signed area.
    CounterClockwise,
}

impl Winding {
    /// The opposite orientation.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
        }
    }
}

/// An ordered closed polygonal approximation of part of a shape's boundary.
///
/// The closing edge from the last point back to the first is implicit; a
/// duplicated closing point is removed by [`Contour::from_points`].
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Loop vertices in order, without a duplicated closing point.
    pub points: Vec<Vec2>,
}

impl Contour {
    /// Builds a contour from a flattened point sequence.
    ///
    /// Drops the last point when it duplicates the first (flatteners commonly
    /// emit the closing point explicitly). Returns `None` when fewer than 3
    /// points remain; such a contour contributes nothing to the output.
    #[must_use]
    pub fn from_points(mut points: Vec<Vec2>) -> Option<Self> {
        if points.len() >= 2 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return None;
        }
        Some(Self { points })
    }

    /// Number of loop vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the contour holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace signed area, positive for counter-clockwise point order.
    ///
    /// `A = 0.5 * Σ (x_i * y_{i+1} - x_{i+1} * y_i)` with the last segment
    /// wrapping back to the first point.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            sum += p.x * q.y - q.x * p.y;
        }
        0.5 * sum
    }

    /// Orientation from the signed area.
    ///
    /// The test is strictly `area > 0.0` with no tolerance: a degenerate,
    /// near-zero-area contour classifies as clockwise. That keeps the
    /// classification reproducible for collapsed input.
    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.signed_area() > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }

    /// Even-odd ray cast: does `p` lie inside the closed region bounded by
    /// this contour?
    ///
    /// A contour without vertices bounds no region and contains nothing.
    #[must_use]
    pub fn contains_point(&self, p: Vec2) -> bool {
        let n = self.points.len();
        if n == 0 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// True when every vertex of `other` lies inside this contour.
    ///
    /// With non-intersecting input loops this is equivalent to full
    /// containment of the closed path.
    #[must_use]
    pub fn contains_contour(&self, other: &Contour) -> bool {
        !other.is_empty() && other.points.iter().all(|&p| self.contains_point(p))
    }
}
