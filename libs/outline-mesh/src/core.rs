//! Shared vector aliases for the stitching pipeline.
//!
//! Contours live in the 2D shape plane (`Vec2`); mapped scene-graph points
//! are 3D (`Vec3`). Both are `f64` throughout, matching the precision the
//! scene-graph writer expects for authored geometry.

pub use glam::DVec2 as Vec2;
pub use glam::DVec3 as Vec3;
