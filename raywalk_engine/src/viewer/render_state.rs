/// RenderState: per-frame snapshot handed to the rendering backend.
///
/// Everything is re-derived on every `Viewer::update`; the backend never
/// diffs against the previous frame.

use glam::{Mat4, Vec2, Vec3};

/// Screen-space text label for a hit point or the ray origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    /// Pixels, origin top-left.
    pub position: Vec2,
    pub text: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub view: Mat4,
    pub projection: Mat4,
    /// Point-list vertices.
    pub points: Vec<Vec3>,
    /// Line-list vertices, 24 per box.
    pub wireframe: Vec<Vec3>,
    pub ray_segment: Option<[Vec3; 2]>,
    pub info: Vec<String>,
    pub labels: Vec<PointLabel>,
}

impl RenderState {
    /// Hit points as raw vertex bytes (3 × f32 per point).
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// Wireframe as raw vertex bytes (3 × f32 per vertex).
    pub fn wireframe_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.wireframe)
    }

    /// Ray segment as raw vertex bytes, empty without a segment.
    pub fn ray_segment_bytes(&self) -> &[u8] {
        match &self.ray_segment {
            Some(segment) => bytemuck::cast_slice(&segment[..]),
            None => &[],
        }
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[cfg(test)]
#[path = "render_state_tests.rs"]
mod tests;
