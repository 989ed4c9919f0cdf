//! Edge-angle curvature estimation with per-vertex memoization.
//!
//! Curvature at a vertex is approximated from how far each incident edge
//! deviates from the tangent plane implied by the vertex normal: the
//! angle between normal and edge yields a local radius of curvature, and
//! averaging over the distinct incident edges approximates mean
//! curvature. Edges bending toward the normal contribute negative
//! values, away from it positive ones.
//!
//! The estimator is pure: it reads a [`MeshSnapshot`] and the previous
//! pass's [`VertexData`] and returns fresh data. Vertices whose world
//! position and averaged normal are unchanged since the previous pass
//! keep their cached curvature untouched, so repeated evaluation of a
//! static mesh is near-free after the first pass.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::f32::consts::{FRAC_PI_2, PI};

use crate::error::CurvatureError;
use crate::math::{rotation_scale_part, Point3, Vec3};
use crate::mesh::{MeshSnapshot, VertexId};

/// Per-vertex geometry produced by one estimation pass.
///
/// The three maps always share the same key set: exactly the vertex ids
/// present in the snapshot that produced them. A default (empty) value
/// represents a cache that has never been updated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexData {
    /// World-space positions (translation stripped).
    pub positions: HashMap<VertexId, Point3>,
    /// Unit normals, averaged across corners sharing the id.
    pub normals: HashMap<VertexId, Vec3>,
    /// Signed curvature values.
    pub curvature: HashMap<VertexId, f32>,
}

impl VertexData {
    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if no pass has produced data yet.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Estimate per-vertex curvature for one snapshot.
///
/// Returns the new vertex data together with the number of vertices that
/// were actually recomputed; vertices whose position and normal match
/// `previous` exactly carry their curvature over unchanged. The snapshot
/// is validated up front, so on error nothing is computed and the caller
/// keeps its previous data.
pub fn estimate(
    snapshot: &MeshSnapshot<'_>,
    previous: &VertexData,
) -> Result<(VertexData, usize), CurvatureError> {
    snapshot.validate()?;

    let linear = rotation_scale_part(&snapshot.transform);

    // Deduplicate corners into vertices. The first corner carrying an id
    // fixes the position; normals accumulate across all corners with the
    // same id.
    let mut positions: HashMap<VertexId, Point3> = HashMap::new();
    let mut normal_sums: HashMap<VertexId, Vec3> = HashMap::new();
    for corner in 0..snapshot.corner_count() {
        let id = snapshot.vertex_ids[corner];
        match normal_sums.entry(id) {
            Entry::Vacant(entry) => {
                entry.insert(snapshot.corner_normal(corner));
                positions.insert(id, linear * snapshot.corner_position(corner));
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += snapshot.corner_normal(corner);
            }
        }
    }

    // Finalize normals: transform the accumulated sum, then renormalize.
    let mut normals: HashMap<VertexId, Vec3> = HashMap::with_capacity(normal_sums.len());
    for (id, sum) in normal_sums {
        let normal = (linear * sum).try_normalize(0.0).unwrap_or_else(Vec3::zeros);
        normals.insert(id, normal);
    }

    // Skip-unchanged check: a vertex whose position and normal both match
    // the previous pass keeps its cached curvature.
    let mut curvature: HashMap<VertexId, f32> = HashMap::with_capacity(positions.len());
    let mut dirty: HashSet<VertexId> = HashSet::new();
    for (&id, position) in &positions {
        let unchanged = previous.positions.get(&id) == Some(position)
            && previous.normals.get(&id) == Some(&normals[&id]);
        if unchanged {
            curvature.insert(id, previous.curvature.get(&id).copied().unwrap_or_default());
        } else {
            curvature.insert(id, 0.0);
            dirty.insert(id);
        }
    }

    // Accumulate directed-edge contributions. Visited (a, b) pairs are
    // tracked for the whole pass, so an edge shared by two triangles
    // contributes to a vertex once per direction, not once per triangle.
    let mut visited: HashSet<(VertexId, VertexId)> = HashSet::new();
    let mut valence: HashMap<VertexId, u32> = HashMap::new();
    for triangle in snapshot.indices.chunks_exact(3) {
        for t in 0..3 {
            let id_a = snapshot.vertex_ids[triangle[t] as usize];
            if !dirty.contains(&id_a) {
                continue;
            }
            for v in 1..=2 {
                let id_b = snapshot.vertex_ids[triangle[(t + v) % 3] as usize];
                if !visited.insert((id_a, id_b)) {
                    continue;
                }

                let edge = positions[&id_b] - positions[&id_a];
                let length = edge.norm();
                let mut contribution = 0.0;
                if length > 0.0 {
                    let angle = normals[&id_a].dot(&(edge / length)).clamp(-1.0, 1.0).acos();
                    // An edge at exactly a right angle to the normal lies
                    // in the tangent plane and adds no curvature.
                    if angle != FRAC_PI_2 {
                        let complement = if angle < FRAC_PI_2 { angle } else { PI - angle };
                        contribution = 1.0
                            / (length / 2.0 * complement.sin() / (FRAC_PI_2 - complement).sin());
                        if angle < FRAC_PI_2 {
                            contribution = -contribution;
                        }
                    }
                }

                *curvature.entry(id_a).or_insert(0.0) += contribution;
                *valence.entry(id_a).or_insert(0) += 1;
            }
        }
    }

    // Average over the distinct incident edges. A valence of one or zero
    // (boundary or isolated vertex) leaves the accumulated value as-is.
    for &id in &dirty {
        if let Some(&edges) = valence.get(&id) {
            if edges > 1 {
                if let Some(value) = curvature.get_mut(&id) {
                    *value /= edges as f32;
                }
            }
        }
    }

    let recomputed = dirty.len();
    log::trace!(
        "curvature pass: {} of {} vertices recomputed",
        recomputed,
        positions.len()
    );

    Ok((
        VertexData {
            positions,
            normals,
            curvature,
        },
        recomputed,
    ))
}
