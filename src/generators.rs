//! Mesh generators for common test shapes.
//!
//! These produce [`MeshBuffers`] in the snapshot layout the estimator
//! consumes. The plane uses shared corners (one corner per vertex id);
//! the pyramid is face-varying (one corner per triangle corner, several
//! corners per vertex id) to exercise corner deduplication and normal
//! averaging.

use crate::math::{Point3, Vec3};
use crate::mesh::MeshBuffers;

/// Generate a flat grid on the XZ plane at y = 0.
///
/// Creates `cols * rows` cells of two triangles each. Vertex ids run
/// row-major over the `(cols + 1) * (rows + 1)` grid corners; every
/// normal is +Y.
///
/// # Arguments
///
/// * `cols` - Number of cells along the X axis
/// * `rows` - Number of cells along the Z axis
/// * `spacing` - Cell edge length
pub fn generate_plane(cols: u32, rows: u32, spacing: f32) -> MeshBuffers {
    let mut buffers = MeshBuffers::default();

    for row in 0..=rows {
        for col in 0..=cols {
            let id = row * (cols + 1) + col;
            buffers.push_corner(
                id,
                Point3::new(col as f32 * spacing, 0.0, row as f32 * spacing),
                Vec3::y(),
            );
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let current = row * (cols + 1) + col;
            let next = current + cols + 1;

            buffers
                .indices
                .extend_from_slice(&[current, next, current + 1]);
            buffers
                .indices
                .extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    buffers
}

/// Generate the four side faces of a square pyramid.
///
/// The apex sits at `(0, height, 0)` over a square base of half-width
/// `half_base` at y = 0. Corners are face-varying: each triangle carries
/// its own three corners with the face normal, so the apex (vertex id 4)
/// appears in four corners whose normals average to +Y. Base ids are
/// 0 through 3.
pub fn generate_pyramid(half_base: f32, height: f32) -> MeshBuffers {
    let apex = Point3::new(0.0, height, 0.0);
    let base = [
        Point3::new(half_base, 0.0, half_base),
        Point3::new(half_base, 0.0, -half_base),
        Point3::new(-half_base, 0.0, -half_base),
        Point3::new(-half_base, 0.0, half_base),
    ];

    let mut buffers = MeshBuffers::default();
    for i in 0..4 {
        let (b0, b1) = (base[i], base[(i + 1) % 4]);
        let normal = (b0 - apex).cross(&(b1 - apex)).normalize();

        let c0 = buffers.push_corner(4, apex, normal);
        let c1 = buffers.push_corner(i as u32, b0, normal);
        let c2 = buffers.push_corner(((i + 1) % 4) as u32, b1, normal);
        buffers.indices.extend_from_slice(&[c0, c1, c2]);
    }

    buffers
}
