//! Vertex color type and curvature-to-color mapping.

use std::collections::HashMap;

use crate::mesh::VertexId;
use crate::ramp::ColorRamp;

/// An RGB color with f32 channels.
///
/// `#[repr(C)]` and `Pod` so renderers can cast a `&[Rgb]` color buffer
/// straight to `&[f32]` when filling vertex buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Create a color from channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// Map per-vertex curvature to per-vertex colors.
///
/// Each curvature value is scaled and biased to a ramp position with
/// `curvature * scale + 0.5`, so a flat surface lands on the ramp's
/// midpoint. Out-of-range positions clamp inside [`ColorRamp::color_at`];
/// the mapping is total.
pub fn map_colors(
    curvature: &HashMap<VertexId, f32>,
    scale: f32,
    ramp: &ColorRamp,
) -> HashMap<VertexId, Rgb> {
    curvature
        .iter()
        .map(|(&id, &value)| (id, ramp.color_at(value * scale + 0.5)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Rgb::new(0.0, 0.0, 1.0);
        let b = Rgb::new(1.0, 0.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn rgb_casts_to_floats() {
        let colors = [Rgb::new(0.1, 0.2, 0.3), Rgb::new(0.4, 0.5, 0.6)];
        let floats: &[f32] = bytemuck::cast_slice(&colors);
        assert_eq!(floats, &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    }

    #[test]
    fn flat_surface_maps_to_ramp_midpoint() {
        let ramp = ColorRamp::default();
        let curvature = HashMap::from([(0, 0.0_f32)]);
        let colors = map_colors(&curvature, 5.0, &ramp);
        assert_eq!(colors[&0], Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn scale_pushes_values_to_ramp_ends() {
        let ramp = ColorRamp::default();
        let curvature = HashMap::from([(0, -0.1_f32), (1, 0.1_f32)]);
        let colors = map_colors(&curvature, 5.0, &ramp);
        // -0.1 * 5 + 0.5 = 0.0 (blue), 0.1 * 5 + 0.5 = 1.0 (red)
        assert_eq!(colors[&0], Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(colors[&1], Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn increasing_curvature_interpolates_blue_to_red() {
        let ramp = ColorRamp::default();
        let values = [-0.1_f32, -0.05, 0.0, 0.05, 0.1];
        let curvature: HashMap<VertexId, f32> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as VertexId, v))
            .collect();
        let colors = map_colors(&curvature, 5.0, &ramp);

        for window in (0..values.len() as VertexId).collect::<Vec<_>>().windows(2) {
            let (lo, hi) = (colors[&window[0]], colors[&window[1]]);
            assert!(hi.r >= lo.r, "red must not decrease");
            assert!(hi.b <= lo.b, "blue must not increase");
        }
    }
}
