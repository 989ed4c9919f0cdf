//! Math type aliases and transform helpers.
//!
//! Thin f32 aliases over `nalgebra` so the rest of the crate reads in
//! domain terms rather than generic matrix types.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 3D point (f32).
pub type Point3 = nalgebra::Point3<f32>;

/// 3x3 matrix (f32).
pub type Mat3 = nalgebra::Matrix3<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Extract the rotation+scale block of a 4x4 world transform.
///
/// Curvature is invariant under translation, so the estimator works with
/// the upper-left 3x3 block only and the translation column is discarded.
pub fn rotation_scale_part(m: &Mat4) -> Mat3 {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_scale_part_drops_translation() {
        let m = Mat4::new_translation(&Vec3::new(5.0, -2.0, 3.0));
        let linear = rotation_scale_part(&m);
        assert_eq!(linear, Mat3::identity());
    }

    #[test]
    fn rotation_scale_part_keeps_scale() {
        let m = Mat4::new_nonuniform_scaling(&Vec3::new(2.0, 3.0, 4.0));
        let linear = rotation_scale_part(&m);
        let v = linear * Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn linear_block_applies_to_points() {
        let m = Mat4::new_scaling(2.0).append_translation(&Vec3::new(10.0, 0.0, 0.0));
        let linear = rotation_scale_part(&m);
        let p = linear * Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p, Point3::new(2.0, 4.0, 6.0));
    }
}
