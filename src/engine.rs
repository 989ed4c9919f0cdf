//! Top-level engine facade.
//!
//! [`CurvatureEngine`] owns the [`ShaderState`] and the
//! [`InstanceRegistry`] and exposes the whole notification contract the
//! host delivers into: geometry/transform/disconnection changes per
//! instance and scale/ramp/flat-shading changes process-wide. The
//! renderer drives [`update`](CurvatureEngine::update) once per frame
//! per visible instance and reads colors back with
//! [`per_corner_colors`](CurvatureEngine::per_corner_colors).
//!
//! Everything is single-threaded and synchronous: every call runs to
//! completion on the caller's thread, and no instance is ever updated
//! concurrently with itself.

use crate::cache::DrawMode;
use crate::color::Rgb;
use crate::error::CurvatureError;
use crate::mesh::{MeshSnapshot, VertexId};
use crate::ramp::ColorRamp;
use crate::registry::{InstanceId, InstanceRegistry};
use crate::shader::ShaderState;

/// Curvature shading engine for one shader definition.
#[derive(Debug, Default)]
pub struct CurvatureEngine {
    shader: ShaderState,
    registry: InstanceRegistry,
}

impl CurvatureEngine {
    /// Create an engine with default shading parameters and no instances.
    pub fn new() -> Self {
        Self {
            shader: ShaderState::new(),
            registry: InstanceRegistry::new(),
        }
    }

    /// The current shading parameters.
    pub fn shader(&self) -> &ShaderState {
        &self.shader
    }

    /// The instance registry.
    pub fn registry(&self) -> &InstanceRegistry {
        &self.registry
    }

    /// Notification: a shape instance was bound to the shader.
    ///
    /// Creates its cache eagerly; updating an unbound instance creates
    /// it lazily as well, so this is optional.
    pub fn bind(&mut self, id: &InstanceId) {
        self.registry.resolve(id);
    }

    /// Evaluate one instance for the current frame.
    ///
    /// Consumes pending shading-parameter changes (once per pass), folds
    /// in a possible draw-mode transition, and runs the cache's update
    /// state machine. On error the instance's cached state is unchanged.
    pub fn update(
        &mut self,
        id: &InstanceId,
        snapshot: &MeshSnapshot<'_>,
        mode: DrawMode,
    ) -> Result<(), CurvatureError> {
        self.shader.apply_pending(&mut self.registry);

        let cache = self.registry.resolve(id);
        cache.note_draw_mode(mode);
        cache.update(snapshot, &self.shader)
    }

    /// Colors in corner order for an instance updated this frame.
    pub fn per_corner_colors(
        &self,
        id: &InstanceId,
        corner_vertex_ids: &[VertexId],
    ) -> Result<Vec<Rgb>, CurvatureError> {
        let cache = self
            .registry
            .get(id)
            .ok_or_else(|| CurvatureError::UnknownInstance(id.as_str().to_string()))?;
        cache.colors_for_corners(corner_vertex_ids)
    }

    /// Notification: an instance's mesh or topology changed.
    pub fn geometry_changed(&mut self, id: &InstanceId) {
        if let Some(cache) = self.registry.get_mut(id) {
            cache.mark_geometry_dirty();
        }
    }

    /// Notification: an instance's world transform changed.
    pub fn transform_changed(&mut self, id: &InstanceId) {
        if let Some(cache) = self.registry.get_mut(id) {
            cache.mark_geometry_dirty();
        }
    }

    /// Notification: an instance disconnected from the shader.
    pub fn instance_disconnected(&mut self, id: &InstanceId) {
        self.registry.remove(id);
    }

    /// Notification: the scale attribute changed.
    pub fn scale_changed(&mut self, scale: f32) {
        self.shader.scale_changed(scale);
    }

    /// Notification: the ramp attribute changed.
    pub fn ramp_changed(&mut self, ramp: ColorRamp) {
        self.shader.ramp_changed(ramp);
    }

    /// Notification: the flat-shading attribute changed.
    pub fn flat_shading_changed(&mut self, flat_shading: bool) {
        self.shader.flat_shading_changed(flat_shading);
    }

    /// Destroy every instance cache (shader teardown).
    pub fn teardown(&mut self) {
        self.registry.clear();
    }
}
