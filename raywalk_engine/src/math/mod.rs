//! Geometry primitives shared by the camera, the spatial index and the
//! frontier traversal.
//!
//! Everything here is pure: no logging, no allocation beyond return values.

mod ray;
mod aabb;
mod triangle;

pub use ray::Ray;
pub use aabb::{AABB, BOX_EDGE_VERTEX_COUNT};
pub use triangle::Triangle;
