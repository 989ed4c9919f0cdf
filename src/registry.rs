//! Instance identity and the per-shape cache registry.

use std::collections::HashMap;
use std::fmt;

use crate::cache::InstanceCache;

/// Opaque identity of one shape occurrence in the host scene graph.
///
/// The host supplies a stable string (a scene path or handle); the
/// registry only compares and hashes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    /// Create an identity from a host-supplied string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InstanceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for InstanceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which cached stage a bulk invalidation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyKind {
    /// Positions, normals, and curvature.
    Geometry,
    /// Colors only.
    Color,
}

/// Owner of every per-instance cache, keyed by [`InstanceId`].
///
/// Caches are created lazily by [`resolve`](Self::resolve) and destroyed
/// by [`remove`](Self::remove) (disconnection) or
/// [`clear`](Self::clear) (shader teardown); nothing else holds them.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    instances: HashMap<InstanceId, InstanceCache>,
}

impl InstanceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an instance's cache, creating a fresh one if absent.
    pub fn resolve(&mut self, id: &InstanceId) -> &mut InstanceCache {
        self.instances.entry(id.clone()).or_insert_with(|| {
            log::debug!("creating curvature cache for instance {id}");
            InstanceCache::new()
        })
    }

    /// Look up an instance's cache without creating it.
    pub fn get(&self, id: &InstanceId) -> Option<&InstanceCache> {
        self.instances.get(id)
    }

    /// Mutable lookup without creating.
    pub fn get_mut(&mut self, id: &InstanceId) -> Option<&mut InstanceCache> {
        self.instances.get_mut(id)
    }

    /// Destroy an instance's cache. Returns whether one existed.
    pub fn remove(&mut self, id: &InstanceId) -> bool {
        let removed = self.instances.remove(id).is_some();
        if removed {
            log::debug!("removed curvature cache for instance {id}");
        }
        removed
    }

    /// Set one dirty flag on every registered instance.
    pub fn invalidate_all(&mut self, kind: DirtyKind) {
        for cache in self.instances.values_mut() {
            match kind {
                DirtyKind::Geometry => cache.mark_geometry_dirty(),
                DirtyKind::Color => cache.mark_color_dirty(),
            }
        }
    }

    /// Destroy every cache (shader teardown).
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// True if no instance is registered.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
