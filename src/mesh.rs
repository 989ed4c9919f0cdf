//! Mesh snapshot types consumed by the curvature estimator.
//!
//! Geometry arrives from the host as flat per-corner arrays: a triangle
//! index list (three corner indices per triangle), a corner-to-vertex-id
//! map, and interleaved-by-corner position and normal floats. A *corner*
//! is one (triangle, local vertex) occurrence; several corners may share
//! one topological vertex id.

use crate::error::CurvatureError;
use crate::math::{Mat4, Point3, Vec3};

/// Stable topological vertex identifier, shared across triangles.
///
/// Distinct from a corner index: corner arrays may hold several entries
/// mapping to the same vertex id.
pub type VertexId = u32;

/// Borrowed, per-call view of one shape instance's triangle geometry.
///
/// Valid only for the duration of a single update call; the engine never
/// retains it.
#[derive(Debug, Clone, Copy)]
pub struct MeshSnapshot<'a> {
    /// Triangle index list, three corner indices per triangle.
    pub indices: &'a [u32],
    /// Vertex id of each corner.
    pub vertex_ids: &'a [VertexId],
    /// Corner positions, three floats per corner.
    pub positions: &'a [f32],
    /// Corner normals, three floats per corner.
    pub normals: &'a [f32],
    /// World transform; only its rotation+scale block is used.
    pub transform: Mat4,
}

impl<'a> MeshSnapshot<'a> {
    /// Number of corners in the snapshot.
    pub fn corner_count(&self) -> usize {
        self.vertex_ids.len()
    }

    /// Number of triangles in the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check array-length consistency and triangle index bounds.
    ///
    /// Runs before any cached state is touched so a malformed snapshot
    /// leaves the previous results intact.
    pub fn validate(&self) -> Result<(), CurvatureError> {
        let corners = self.vertex_ids.len();
        if self.positions.len() != corners * 3 || self.normals.len() != corners * 3 {
            return Err(CurvatureError::CornerArrayMismatch {
                ids: corners,
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(CurvatureError::IndexCountNotTriangles(self.indices.len()));
        }
        for (i, &index) in self.indices.iter().enumerate() {
            if index as usize >= corners {
                return Err(CurvatureError::CornerIndexOutOfBounds {
                    triangle: i / 3,
                    index,
                    corner_count: corners,
                });
            }
        }
        Ok(())
    }

    /// Position of one corner.
    pub fn corner_position(&self, corner: usize) -> Point3 {
        Point3::new(
            self.positions[corner * 3],
            self.positions[corner * 3 + 1],
            self.positions[corner * 3 + 2],
        )
    }

    /// Normal of one corner.
    pub fn corner_normal(&self, corner: usize) -> Vec3 {
        Vec3::new(
            self.normals[corner * 3],
            self.normals[corner * 3 + 1],
            self.normals[corner * 3 + 2],
        )
    }
}

/// Owned mesh buffers in snapshot layout.
///
/// Produced by the [`generators`](crate::generators) and convenient for
/// tests and benches; [`MeshBuffers::snapshot`] lends the borrowed view
/// the estimator consumes.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    /// Triangle index list.
    pub indices: Vec<u32>,
    /// Vertex id of each corner.
    pub vertex_ids: Vec<VertexId>,
    /// Corner positions, three floats per corner.
    pub positions: Vec<f32>,
    /// Corner normals, three floats per corner.
    pub normals: Vec<f32>,
}

impl MeshBuffers {
    /// Borrow a [`MeshSnapshot`] over these buffers.
    pub fn snapshot(&self, transform: Mat4) -> MeshSnapshot<'_> {
        MeshSnapshot {
            indices: &self.indices,
            vertex_ids: &self.vertex_ids,
            positions: &self.positions,
            normals: &self.normals,
            transform,
        }
    }

    /// Append one corner, returning its corner index.
    pub fn push_corner(&mut self, id: VertexId, position: Point3, normal: Vec3) -> u32 {
        let corner = self.vertex_ids.len() as u32;
        self.vertex_ids.push(id);
        self.positions
            .extend_from_slice(&[position.x, position.y, position.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        corner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_buffers() -> MeshBuffers {
        let mut buffers = MeshBuffers::default();
        buffers.push_corner(0, Point3::new(0.0, 0.0, 0.0), Vec3::y());
        buffers.push_corner(1, Point3::new(1.0, 0.0, 0.0), Vec3::y());
        buffers.push_corner(2, Point3::new(0.0, 0.0, 1.0), Vec3::y());
        buffers.indices = vec![0, 1, 2];
        buffers
    }

    #[test]
    fn valid_snapshot_passes() {
        let buffers = triangle_buffers();
        let snapshot = buffers.snapshot(Mat4::identity());
        assert!(snapshot.validate().is_ok());
        assert_eq!(snapshot.corner_count(), 3);
        assert_eq!(snapshot.triangle_count(), 1);
    }

    #[test]
    fn out_of_bounds_index_is_reported() {
        let mut buffers = triangle_buffers();
        buffers.indices = vec![0, 1, 7];
        let snapshot = buffers.snapshot(Mat4::identity());
        assert_eq!(
            snapshot.validate(),
            Err(CurvatureError::CornerIndexOutOfBounds {
                triangle: 0,
                index: 7,
                corner_count: 3,
            })
        );
    }

    #[test]
    fn mismatched_corner_arrays_are_reported() {
        let mut buffers = triangle_buffers();
        buffers.normals.pop();
        let snapshot = buffers.snapshot(Mat4::identity());
        assert_eq!(
            snapshot.validate(),
            Err(CurvatureError::CornerArrayMismatch {
                ids: 3,
                positions: 9,
                normals: 8,
            })
        );
    }

    #[test]
    fn partial_triangle_is_reported() {
        let mut buffers = triangle_buffers();
        buffers.indices = vec![0, 1, 2, 0];
        let snapshot = buffers.snapshot(Mat4::identity());
        assert_eq!(
            snapshot.validate(),
            Err(CurvatureError::IndexCountNotTriangles(4))
        );
    }

    #[test]
    fn corner_accessors_read_interleaved_floats() {
        let buffers = triangle_buffers();
        let snapshot = buffers.snapshot(Mat4::identity());
        assert_eq!(snapshot.corner_position(1), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(snapshot.corner_normal(2), Vec3::y());
    }
}
