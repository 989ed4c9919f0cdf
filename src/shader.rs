//! Process-wide shading parameters and their change tracking.

use crate::ramp::ColorRamp;
use crate::registry::{DirtyKind, InstanceRegistry};

/// Default curvature-to-ramp scale factor.
pub const DEFAULT_SCALE: f32 = 5.0;

/// Shading parameters shared by every instance of the shader.
///
/// Parameter-change notifications land as *pending* values and are
/// consumed by [`apply_pending`](Self::apply_pending) exactly once, at
/// the start of the next evaluation pass. Scale and ramp changes mark
/// every live instance color-dirty; the flat-shading flag only affects
/// draw-time lighting and invalidates nothing.
#[derive(Debug, Clone)]
pub struct ShaderState {
    scale: f32,
    flat_shading: bool,
    ramp: ColorRamp,
    pending_scale: Option<f32>,
    pending_ramp: Option<ColorRamp>,
    pending_flat_shading: Option<bool>,
}

impl ShaderState {
    /// Create the default state: scale 5, flat shading on, the factory
    /// blue-green-red ramp, nothing pending.
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            flat_shading: true,
            ramp: ColorRamp::default(),
            pending_scale: None,
            pending_ramp: None,
            pending_flat_shading: None,
        }
    }

    /// Current scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current flat-shading flag.
    pub fn flat_shading(&self) -> bool {
        self.flat_shading
    }

    /// Current color ramp.
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    /// Notification: the scale attribute changed.
    pub fn scale_changed(&mut self, scale: f32) {
        self.pending_scale = Some(scale);
    }

    /// Notification: the ramp attribute changed.
    pub fn ramp_changed(&mut self, ramp: ColorRamp) {
        self.pending_ramp = Some(ramp);
    }

    /// Notification: the flat-shading attribute changed.
    pub fn flat_shading_changed(&mut self, flat_shading: bool) {
        self.pending_flat_shading = Some(flat_shading);
    }

    /// True if any notification has not been consumed yet.
    pub fn has_pending_changes(&self) -> bool {
        self.pending_scale.is_some()
            || self.pending_ramp.is_some()
            || self.pending_flat_shading.is_some()
    }

    /// Consume pending parameter changes.
    ///
    /// Called once at the start of an evaluation pass, before any
    /// instance updates. A new scale is clamped to be non-negative.
    pub fn apply_pending(&mut self, registry: &mut InstanceRegistry) {
        if let Some(scale) = self.pending_scale.take() {
            self.scale = scale.max(0.0);
            registry.invalidate_all(DirtyKind::Color);
        }
        if let Some(ramp) = self.pending_ramp.take() {
            self.ramp = ramp;
            registry.invalidate_all(DirtyKind::Color);
        }
        if let Some(flat_shading) = self.pending_flat_shading.take() {
            self.flat_shading = flat_shading;
        }
    }
}

impl Default for ShaderState {
    fn default() -> Self {
        Self::new()
    }
}
