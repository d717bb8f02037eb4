/*!
# Raywalk Engine

Camera, ray/box primitives and stepwise traversal for visually debugging
a hierarchical spatial index (KD-tree, octree, BVH) built over a mesh.

The crate does not build the index and does not draw anything. It consumes
an already-built index through the `SpatialIndex` trait and produces the
geometry a renderer needs: hit points, candidate-box wireframes and the
ray segment clipped to the index bounds.

## Architecture

- **Camera**: yaw/pitch fly camera, view/projection transforms, eye ray,
  world-to-screen projection
- **AABB / Ray / Triangle**: intersection primitives
- **SpatialIndex**: capability trait over an external tree
- **Frontier**: level-by-level traversal along a ray
- **IntersectionHandler**: binds a ray to an index, holds the results
- **Viewer**: explicit per-frame context, `update(elapsed) -> RenderState`
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod tree;
pub mod viewer;

// Main raywalk namespace module
pub mod raywalk {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Geometry primitives
    pub mod math {
        pub use crate::math::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Spatial index capability and traversal
    pub mod tree {
        pub use crate::tree::*;
    }

    // Interactive context
    pub mod viewer {
        pub use crate::viewer::*;
    }
}

// Re-export math library at crate root
pub use glam;
