//! Viewer module: the interactive context around camera and traversal.
//!
//! `Viewer` is the explicit context a host loop owns: it maps window input
//! to camera motion and queries, and produces a `RenderState` per frame.
//! `IntersectionHandler` binds a ray to a spatial index and holds the
//! renderable results.

mod input;
mod intersection_handler;
mod render_state;
mod viewer;

pub use input::{MoveAxis, Movement, ScrollDirection, ViewerAction};
pub use intersection_handler::{format_millis, format_vec3, IntersectionHandler, QueryTimings};
pub use render_state::{PointLabel, RenderState};
pub use viewer::{Viewer, ViewerConfig};
