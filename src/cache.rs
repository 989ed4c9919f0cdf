//! Per-instance cached state and the update state machine.

use std::collections::HashMap;

use crate::color::{map_colors, Rgb};
use crate::curvature::{estimate, VertexData};
use crate::error::CurvatureError;
use crate::mesh::{MeshSnapshot, VertexId};
use crate::shader::ShaderState;

/// Rendering path that draws an instance.
///
/// The legacy and modern pipelines hand the engine differently laid-out
/// geometry for the same mesh, so alternating between them forces one
/// geometry recompute on each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Immediate-mode path fed with host-side corner arrays.
    Legacy,
    /// Buffer-based path fed with deduplicated vertex buffers.
    Modern,
}

/// Cached derived data for one shape instance.
///
/// Holds the last pass's per-vertex positions, normals, curvature, and
/// colors, plus the dirty flags coordinating recomputation:
///
/// - geometry dirty: positions/normals/curvature are stale
/// - color dirty: colors are stale (independent of geometry)
/// - draw-mode changed: pipeline transition pending, forces one
///   geometry recompute
///
/// A freshly created cache is fully dirty and holds no vertices.
#[derive(Debug, Clone)]
pub struct InstanceCache {
    data: VertexData,
    colors: HashMap<VertexId, Rgb>,
    geometry_dirty: bool,
    color_dirty: bool,
    draw_mode_changed: bool,
    draw_mode: Option<DrawMode>,
}

impl InstanceCache {
    /// Create an empty cache with both stages marked dirty.
    pub fn new() -> Self {
        Self {
            data: VertexData::default(),
            colors: HashMap::new(),
            geometry_dirty: true,
            color_dirty: true,
            draw_mode_changed: false,
            draw_mode: None,
        }
    }

    /// The last pass's per-vertex geometry.
    pub fn vertex_data(&self) -> &VertexData {
        &self.data
    }

    /// The last pass's per-vertex colors.
    pub fn colors(&self) -> &HashMap<VertexId, Rgb> {
        &self.colors
    }

    /// Whether positions/normals/curvature are stale.
    pub fn geometry_dirty(&self) -> bool {
        self.geometry_dirty
    }

    /// Whether colors are stale.
    pub fn color_dirty(&self) -> bool {
        self.color_dirty
    }

    /// Whether a draw-mode transition is pending.
    pub fn draw_mode_changed(&self) -> bool {
        self.draw_mode_changed
    }

    /// Mark the geometry stage stale (geometry or transform changed).
    pub fn mark_geometry_dirty(&mut self) {
        self.geometry_dirty = true;
    }

    /// Mark the color stage stale (shading parameter changed).
    pub fn mark_color_dirty(&mut self) {
        self.color_dirty = true;
    }

    /// Record which pipeline is about to draw this instance.
    ///
    /// A transition from the previously recorded mode schedules one
    /// geometry recompute; the first recorded mode does not.
    pub fn note_draw_mode(&mut self, mode: DrawMode) {
        if self.draw_mode != Some(mode) {
            if self.draw_mode.is_some() {
                self.draw_mode_changed = true;
            }
            self.draw_mode = Some(mode);
        }
    }

    /// Run the update state machine against one snapshot.
    ///
    /// If the geometry stage is dirty, curvature is re-estimated with the
    /// current cache as the memoization source and the color stage is
    /// marked dirty; if the color stage is dirty, colors are remapped
    /// from the shader's scale and ramp. On error the cache and its
    /// dirty flags are left untouched, so the next pass retries.
    pub fn update(
        &mut self,
        snapshot: &MeshSnapshot<'_>,
        shader: &ShaderState,
    ) -> Result<(), CurvatureError> {
        if self.draw_mode_changed {
            self.draw_mode_changed = false;
            self.geometry_dirty = true;
        }

        if self.geometry_dirty {
            let (data, _recomputed) = estimate(snapshot, &self.data)?;
            self.data = data;
            self.geometry_dirty = false;
            self.color_dirty = true;
        }

        if self.color_dirty {
            self.colors = map_colors(&self.data.curvature, shader.scale(), shader.ramp());
            self.color_dirty = false;
        }

        Ok(())
    }

    /// Expand the per-vertex color map to per-corner order.
    ///
    /// Callers must only pass vertex ids produced by the latest update;
    /// an unknown id is a contract violation reported as
    /// [`CurvatureError::UnknownVertexId`].
    pub fn colors_for_corners(
        &self,
        corner_vertex_ids: &[VertexId],
    ) -> Result<Vec<Rgb>, CurvatureError> {
        corner_vertex_ids
            .iter()
            .map(|&id| {
                self.colors
                    .get(&id)
                    .copied()
                    .ok_or(CurvatureError::UnknownVertexId(id))
            })
            .collect()
    }
}

impl Default for InstanceCache {
    fn default() -> Self {
        Self::new()
    }
}
