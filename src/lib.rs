//! # Curvature Engine
//!
//! CPU-side estimation of per-vertex mesh curvature with incremental
//! caching and ramp-based vertex coloring.
//!
//! The engine consumes raw triangle geometry (corner arrays plus a world
//! transform) from a host scene, estimates a signed curvature scalar per
//! topological vertex, and maps it to an RGB color through a configurable
//! [`ColorRamp`]. Results are cached per shape instance and recomputed
//! only for vertices whose position or normal actually changed.
//!
//! - [`curvature`] - The edge-angle curvature estimator
//! - [`cache`] - Per-instance cached state and dirty-flag coordination
//! - [`registry`] - Instance identity and cache lifetime management
//! - [`shader`] - Process-wide shading parameters (scale, ramp, flat shading)
//! - [`engine`] - Top-level facade wiring the pieces together

pub mod cache;
pub mod color;
pub mod curvature;
pub mod engine;
pub mod error;
pub mod generators;
pub mod math;
pub mod mesh;
pub mod ramp;
pub mod registry;
pub mod shader;

pub use cache::{DrawMode, InstanceCache};
pub use color::{map_colors, Rgb};
pub use curvature::{estimate, VertexData};
pub use engine::CurvatureEngine;
pub use error::CurvatureError;
pub use mesh::{MeshBuffers, MeshSnapshot, VertexId};
pub use ramp::{ColorRamp, RampInterpolation, RampStop};
pub use registry::{DirtyKind, InstanceId, InstanceRegistry};
pub use shader::ShaderState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
