//! Coordinate mapping from the 2D shape plane into the scene's 3D frame.
//!
//! The source plane has y growing downward (screen convention), so the
//! variant that forwards y to a scene axis flips its sign. Exactly one
//! variant is active for the lifetime of a conversion run; it is carried by
//! the [`Converter`](crate::pipeline::Converter) rather than selected through
//! any module-level state.

use crate::core::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Which 3D axis receives the shape's vertical extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpAxis {
    /// Horizontal input lands on +Z, vertical (sign-flipped) on Y.
    X,
    /// Horizontal input lands on +X, vertical on +Z (the ground plane).
    #[default]
    Y,
    /// Horizontal input lands on +X, vertical (sign-flipped) on Y.
    Z,
}

impl UpAxis {
    /// Maps a 2D point to a 3D position under this up-axis convention.
    #[must_use]
    pub fn map(self, x: f64, y: f64) -> Vec3 {
        match self {
            UpAxis::X => Vec3::new(0.0, -y, x),
            UpAxis::Y => Vec3::new(x, 0.0, y),
            UpAxis::Z => Vec3::new(x, -y, 0.0),
        }
    }

    /// Maps a point whose vertical coordinate may be absent; a missing
    /// coordinate is treated as 0.
    #[must_use]
    pub fn map_opt(self, x: f64, y: Option<f64>) -> Vec3 {
        self.map(x, y.unwrap_or(0.0))
    }

    /// Convenience wrapper over [`UpAxis::map`] for 2D vectors.
    #[must_use]
    pub fn map_point(self, p: Vec2) -> Vec3 {
        self.map(p.x, p.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================
