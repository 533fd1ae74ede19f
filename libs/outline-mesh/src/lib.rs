//! # Outline Mesh
//!
//! Converts 2D vector-graphics shapes (filled path outlines, font glyph
//! outlines) into indexed polygon-mesh or polyline buffers for scene-graph
//! formats whose faces are simple single loops with no explicit hole loops.
//!
//! ## Architecture
//!
//! ```text
//! flattened contours (flatten)
//!       ↓
//! winding + containment clustering (contour, cluster)
//!       ↓
//! zero-area hole bridging (stitch)
//!       ↓
//! up-axis mapping + buffer accumulation (axis, buffer)
//! ```
//!
//! The pipeline is synchronous and single-threaded; buffers are private to
//! one conversion run. Shape parsing, material setup and scene-graph file
//! writing stay with external collaborators: this crate only turns contour
//! geometry into buffer growth.
//!
//! ## Usage
//!
//! ```rust
//! use outline_mesh::{Converter, ConvertConfig, MeshBuffers, Placement, Vec2};
//!
//! let converter = Converter::new(ConvertConfig::default());
//! let mut buffers = MeshBuffers::new();
//!
//! // A square with a square hole: one face, ten vertices.
//! let outer = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(10.0, 0.0),
//!     Vec2::new(10.0, 10.0),
//!     Vec2::new(0.0, 10.0),
//! ];
//! let hole = vec![
//!     Vec2::new(3.0, 3.0),
//!     Vec2::new(3.0, 7.0),
//!     Vec2::new(7.0, 7.0),
//!     Vec2::new(7.0, 3.0),
//! ];
//! let faces = converter.fill_to_mesh(&[outer, hole], Placement::IDENTITY, &mut buffers);
//! assert_eq!(faces, 1);
//! assert_eq!(buffers.face_vertex_counts, vec![10]);
//! ```

pub mod axis;
pub mod buffer;
pub mod cluster;
pub mod config;
pub mod contour;
pub mod core;
pub mod error;
pub mod flatten;
pub mod pipeline;
pub mod stitch;

pub use axis::UpAxis;
pub use buffer::{CurveBuffers, MeshBuffers};
pub use cluster::{cluster, Cluster};
pub use config::{ConvertConfig, DEFAULT_CURVE_SEGMENTS};
pub use contour::{Contour, Winding};
pub use crate::core::{Vec2, Vec3};
pub use error::{Result, StitchError};
pub use flatten::{ContourBuilder, GlyphRun};
pub use pipeline::{Converter, Placement};
pub use stitch::{stitch, BridgedLoop};
