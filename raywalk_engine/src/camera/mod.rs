//! Camera module: first-person fly camera.
//!
//! The camera owns its pose and derives the view/projection transforms,
//! the eye ray, and world-to-screen projection from it. It is a plain
//! value owned by the viewer context; there is no global camera.

mod camera;

pub use camera::{Camera, CameraConfig, ScreenPoint, MAX_PITCH_DEGREES};
