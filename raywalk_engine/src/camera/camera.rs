/// Camera: yaw/pitch fly camera.
///
/// The basis is re-derived from yaw and pitch on every rotation rather
/// than accumulated, so `front`, `left` and `up` stay orthonormal with no
/// drift:
///
/// ```text
/// front = (cos yaw · cos pitch, sin pitch, sin yaw · cos pitch)
/// left  = (cos(yaw - 90°), 0, sin(yaw - 90°))
/// up    = front × left
/// ```
///
/// At yaw = pitch = 0 the camera looks down +X with +Y up and -Z to its left.

use glam::{Mat4, Vec3, Vec4};
use crate::error::{Error, Result};
use crate::math::Ray;

const SOURCE: &str = "raywalk::Camera";

/// Pitch is clamped strictly inside (-90°, 90°).
pub const MAX_PITCH_DEGREES: f32 = 89.9;

/// Projection parameters and initial viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            width: 800,
            height: 600,
        }
    }
}

impl CameraConfig {
    /// Check ranges: fov in (0, 180), 0 < near < far, non-zero viewport.
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov_y_degrees
            )));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(Error::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Result of `Camera::project_to_screen`.
///
/// `x`/`y` are pixels with the origin at the top-left. `depth` is the
/// clip-space z before the perspective divide: negative behind the camera
/// (and between the eye and the near plane).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    /// Radians, unbounded.
    yaw: f32,
    /// Radians, within ±MAX_PITCH_DEGREES.
    pitch: f32,
    front: Vec3,
    left: Vec3,
    up: Vec3,
    config: CameraConfig,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::build(CameraConfig::default())
    }
}

impl Camera {
    /// Camera at the origin looking down +X, default projection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera at the origin looking down +X with a custom projection.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the configuration is out of range.
    pub fn with_config(config: CameraConfig) -> Result<Self> {
        config.validate().map_err(|err| {
            crate::engine_error!(SOURCE, "{}", err);
            err
        })?;
        Ok(Self::build(config))
    }

    fn build(config: CameraConfig) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            front: Vec3::X,
            left: Vec3::NEG_Z,
            up: Vec3::Y,
            config,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.update_basis();
        camera.update_view();
        camera.update_projection();
        camera
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Viewing direction (unit length).
    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn left(&self) -> Vec3 {
        self.left
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw.to_degrees()
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch.to_degrees()
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.config.width
    }

    pub fn height(&self) -> u32 {
        self.config.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    // ===== MUTATORS =====

    /// Turn by the given deltas in degrees.
    ///
    /// Yaw is unbounded; pitch is clamped to ±`MAX_PITCH_DEGREES`.
    pub fn rotate(&mut self, yaw_delta_degrees: f32, pitch_delta_degrees: f32) {
        let max_pitch = MAX_PITCH_DEGREES.to_radians();
        self.yaw += yaw_delta_degrees.to_radians();
        self.pitch = (self.pitch + pitch_delta_degrees.to_radians()).clamp(-max_pitch, max_pitch);

        self.update_basis();
        self.update_view();
    }

    /// Translate along the camera's own axes. No collision.
    pub fn move_by(&mut self, forward: f32, left: f32, up: f32) {
        self.position += self.front * forward + self.left * left + self.up * up;
        self.update_view();
    }

    /// Teleport without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_view();
    }

    /// New viewport size. Zero dimensions are treated as 1 pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.update_projection();
        crate::engine_debug!(
            SOURCE,
            "Resized to {}x{} (aspect {:.3})",
            self.config.width,
            self.config.height,
            self.aspect_ratio()
        );
    }

    // ===== QUERIES =====

    /// Ray from the eye along the viewing direction.
    pub fn eye_ray(&self) -> Ray {
        Ray::new(self.position, self.front)
    }

    /// Project a world point to pixel coordinates (origin top-left).
    pub fn project_to_screen(&self, point: Vec3) -> ScreenPoint {
        let clip: Vec4 = self.view_projection_matrix() * point.extend(1.0);
        let width = self.config.width as f32;
        let height = self.config.height as f32;

        ScreenPoint {
            x: (clip.x / clip.w + 1.0) * width * 0.5,
            y: (-clip.y / clip.w + 1.0) * height * 0.5,
            depth: clip.z,
        }
    }

    // ===== INTERNAL =====

    fn update_basis(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let left_yaw = self.yaw - std::f32::consts::FRAC_PI_2;

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.left = Vec3::new(left_yaw.cos(), 0.0, left_yaw.sin()).normalize();
        self.up = self.front.cross(self.left).normalize();
    }

    fn update_view(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.position, self.position + self.front, Vec3::Y);
    }

    fn update_projection(&mut self) {
        self.projection_matrix = Mat4::perspective_rh_gl(
            self.config.fov_y_degrees.to_radians(),
            self.aspect_ratio(),
            self.config.near,
            self.config.far,
        );
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
