/// Viewer: explicit context driving camera, input and queries.
///
/// The host owns one `Viewer`, forwards window input to it, and calls
/// `update(elapsed)` once per host frame. Everything the renderer needs
/// comes back as a `RenderState`; the viewer holds no GPU state.
///
/// ```text
/// key/mouse/scroll ──▶ Viewer ──▶ Camera (pose)
///                         │
///           click ────────┼──▶ IntersectionHandler ──▶ SpatialIndex
///                         │
///    update(elapsed) ─────┴──▶ RenderState
/// ```

use std::sync::Arc;
use std::time::Duration;
use glam::{Vec2, Vec3};
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;
use crate::camera::{Camera, CameraConfig};
use crate::error::{Error, Result};
use crate::tree::SpatialIndex;
use super::input::{Movement, ScrollDirection, ViewerAction};
use super::intersection_handler::IntersectionHandler;
use super::render_state::{PointLabel, RenderState};

const SOURCE: &str = "raywalk::Viewer";

/// Scroll-up increment of the movement step.
const STEP_INCREMENT: f32 = 1.0;
/// Scroll-down decrement of the movement step.
const STEP_DECREMENT: f32 = 3.0;
/// Upper bound of `1 + depth` in the label font-size divisor.
const MAX_LABEL_DEPTH_SCALE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub camera: CameraConfig,
    /// Movement is applied at most once per `1 / target_framerate` seconds.
    pub target_framerate: u32,
    pub initial_step: f32,
    pub min_step: f32,
    pub max_step: f32,
    /// Degrees of rotation per unit of mouse motion.
    pub mouse_sensitivity: f32,
    /// Worker count handed to the index's parallel query, `None` to skip it.
    pub parallel_workers: Option<usize>,
    /// Clicks start a stepwise traversal instead of a whole-index query.
    pub traversal_mode: bool,
    /// Hit-point labels farther than this (pixels) from the screen center are hidden.
    pub label_view_distance: f32,
    pub max_font_size: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            target_framerate: 120,
            initial_step: 0.2,
            min_step: 0.2,
            max_step: 20.0,
            mouse_sensitivity: 1.0,
            parallel_workers: None,
            traversal_mode: false,
            label_view_distance: 100.0,
            max_font_size: 256.0,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;

        if self.target_framerate == 0 {
            return Err(Error::InvalidConfig("target framerate must be non-zero".to_string()));
        }
        if !(self.min_step > 0.0
            && self.min_step <= self.initial_step
            && self.initial_step <= self.max_step
            && self.max_step.is_finite())
        {
            return Err(Error::InvalidConfig(format!(
                "steps must satisfy 0 < min <= initial <= max, got min={} initial={} max={}",
                self.min_step, self.initial_step, self.max_step
            )));
        }
        if !self.mouse_sensitivity.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "mouse sensitivity must be finite, got {}",
                self.mouse_sensitivity
            )));
        }
        if self.parallel_workers == Some(0) {
            return Err(Error::InvalidConfig("parallel worker count must be non-zero".to_string()));
        }
        if !(self.label_view_distance >= 0.0) || !(self.max_font_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "label settings out of range: view distance={} max font size={}",
                self.label_view_distance, self.max_font_size
            )));
        }
        Ok(())
    }

    /// Minimum time between two movement updates.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_framerate.max(1)))
    }
}

pub struct Viewer {
    config: ViewerConfig,
    camera: Camera,
    handler: IntersectionHandler,
    index: Option<Arc<dyn SpatialIndex>>,
    movement: Movement,
    step: f32,
    /// Input is ignored while inactive (e.g. pointer not captured).
    active: bool,
    /// Time accumulated since the last movement update.
    since_last_frame: Duration,
}

impl Viewer {
    /// Create a viewer at the canonical camera pose with no index bound.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if any configuration value is out of range.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            crate::engine_error!(SOURCE, "{}", err);
            return Err(err);
        }

        let camera = Camera::with_config(config.camera)?;
        crate::engine_info!(
            SOURCE,
            "Viewer created ({}x{}, {} fps, traversal mode {})",
            config.camera.width,
            config.camera.height,
            config.target_framerate,
            if config.traversal_mode { "on" } else { "off" }
        );

        Ok(Self {
            config,
            camera,
            handler: IntersectionHandler::new(),
            index: None,
            movement: Movement::default(),
            step: config.initial_step,
            active: true,
            since_last_frame: Duration::ZERO,
        })
    }

    // ===== INDEX BINDING =====

    /// Bind a new index. Results from the previous index are discarded.
    pub fn set_index(&mut self, index: Arc<dyn SpatialIndex>) {
        self.handler.clear();
        match index.root_aabb() {
            Some(bounds) => crate::engine_info!(
                SOURCE,
                "Index bound, root box {:?} .. {:?}",
                bounds.min,
                bounds.max
            ),
            None => crate::engine_warn!(SOURCE, "Index bound without a root node"),
        }
        self.index = Some(index);
    }

    pub fn clear_index(&mut self) {
        self.handler.clear();
        self.index = None;
        crate::engine_debug!(SOURCE, "Index cleared");
    }

    pub fn index(&self) -> Option<&Arc<dyn SpatialIndex>> {
        self.index.as_ref()
    }

    // ===== INPUT =====

    /// Capture or release input. Releasing stops all held movement.
    pub fn set_active(&mut self, active: bool) {
        if !active {
            self.movement.stop();
        }
        self.active = active;
    }

    /// Handle a key press. Returns `true` if the key is bound.
    pub fn key_down(&mut self, key: KeyCode) -> bool {
        if !self.active {
            return false;
        }
        match ViewerAction::from_key_code(key) {
            Some(ViewerAction::Move { axis, positive }) => {
                self.movement.press(axis, positive, self.step);
                true
            }
            Some(ViewerAction::TraverseStep) => {
                self.traverse();
                true
            }
            None => false,
        }
    }

    /// Handle a key release. Returns `true` if the key is bound.
    pub fn key_up(&mut self, key: KeyCode) -> bool {
        match ViewerAction::from_key_code(key) {
            Some(ViewerAction::Move { axis, positive }) => {
                self.movement.release(axis, positive);
                true
            }
            Some(ViewerAction::TraverseStep) => true,
            None => false,
        }
    }

    /// Relative mouse motion in pixels. Moving right turns right, moving
    /// down looks down.
    pub fn mouse_moved(&mut self, dx: f64, dy: f64) {
        if !self.active {
            return;
        }
        let sensitivity = self.config.mouse_sensitivity;
        self.camera.rotate(dx as f32 * sensitivity, -(dy as f32) * sensitivity);
    }

    /// Adjust the movement step. Held keys keep their old step until pressed again.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        if !self.active {
            return;
        }
        self.step = match direction {
            ScrollDirection::Up => (self.step + STEP_INCREMENT).min(self.config.max_step),
            ScrollDirection::Down => (self.step - STEP_DECREMENT).max(self.config.min_step),
        };
        crate::engine_debug!(SOURCE, "Step set to {:.2}", self.step);
    }

    /// `scroll` from a raw winit wheel delta.
    pub fn scroll_delta(&mut self, delta: MouseScrollDelta) {
        if let Some(direction) = ScrollDirection::from_delta(delta) {
            self.scroll(direction);
        }
    }

    /// Cast the eye ray into the bound index.
    ///
    /// Starts a stepwise traversal in traversal mode, otherwise runs a
    /// whole-index query. Returns `false` when inactive or no index is bound.
    pub fn click(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let Some(index) = self.index.clone() else {
            crate::engine_warn!(SOURCE, "Click ignored, no index bound");
            return false;
        };

        let ray = self.camera.eye_ray();
        if self.config.traversal_mode {
            self.handler.start_traversal(ray, index);
        } else {
            self.handler.find_intersections(ray, index.as_ref(), self.config.parallel_workers);
        }
        true
    }

    /// One traversal step. Returns the number of points found.
    pub fn traverse(&mut self) -> usize {
        let found = self.handler.traverse();
        if found > 0 {
            crate::engine_debug!(
                SOURCE,
                "Traversal step found {} point(s), {} total",
                found,
                self.handler.points().len()
            );
        }
        found
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.config.camera = *self.camera.config();
    }

    // ===== FRAME =====

    /// Advance the viewer by `elapsed` and snapshot what to draw.
    ///
    /// Held movement is applied once when at least one frame interval has
    /// accumulated; the remainder is dropped.
    pub fn update(&mut self, elapsed: Duration) -> RenderState {
        self.since_last_frame += elapsed;
        if self.since_last_frame >= self.config.frame_interval() {
            if self.active && !self.movement.is_idle() {
                let Movement { forward, left, up } = self.movement;
                self.camera.move_by(forward, left, up);
            }
            self.since_last_frame = Duration::ZERO;
        }
        self.render_state()
    }

    /// Snapshot of the current state without advancing time.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            view: *self.camera.view_matrix(),
            projection: *self.camera.projection_matrix(),
            points: self.handler.points().to_vec(),
            wireframe: self.handler.wireframe().to_vec(),
            ray_segment: self.handler.ray_segment(),
            info: self.handler.info_lines(),
            labels: self.labels(),
        }
    }

    /// Ray origin (always kept if in front) followed by every hit point
    /// near the screen center.
    fn labels(&self) -> Vec<PointLabel> {
        let Some(ray) = self.handler.ray() else {
            return Vec::new();
        };

        std::iter::once((ray.origin(), true))
            .chain(self.handler.points().iter().map(|&point| (point, false)))
            .filter_map(|(point, persistent)| self.label(point, persistent))
            .collect()
    }

    fn label(&self, point: Vec3, persistent: bool) -> Option<PointLabel> {
        let screen = self.camera.project_to_screen(point);
        if !(screen.x.is_finite() && screen.y.is_finite() && screen.depth.is_finite()) {
            return None;
        }
        if screen.depth < 0.0 {
            return None;
        }

        let position = Vec2::new(screen.x, screen.y);
        let center = Vec2::new(self.camera.width() as f32, self.camera.height() as f32) * 0.5;
        if !persistent && position.distance(center) > self.config.label_view_distance {
            return None;
        }

        Some(PointLabel {
            position,
            text: format!("{:.2}, {:.2}, {:.2}", point.x, point.y, point.z),
            font_size: self.config.max_font_size / (1.0 + screen.depth).min(MAX_LABEL_DEPTH_SCALE),
        })
    }

    // ===== SETTINGS =====

    pub fn set_traversal_mode(&mut self, enabled: bool) {
        self.config.traversal_mode = enabled;
    }

    /// # Errors
    ///
    /// `InvalidConfig` for `Some(0)`.
    pub fn set_parallel_workers(&mut self, workers: Option<usize>) -> Result<()> {
        if workers == Some(0) {
            let err = Error::InvalidConfig("parallel worker count must be non-zero".to_string());
            crate::engine_error!(SOURCE, "{}", err);
            return Err(err);
        }
        self.config.parallel_workers = workers;
        Ok(())
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn handler(&self) -> &IntersectionHandler {
        &self.handler
    }

    pub fn movement(&self) -> &Movement {
        &self.movement
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn traversal_mode(&self) -> bool {
        self.config.traversal_mode
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
