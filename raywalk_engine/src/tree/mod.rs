//! Spatial index module
//!
//! The index itself is built elsewhere; this module only defines the
//! capability the viewer consumes (`SpatialIndex`), the node shape it
//! exposes (`TreeNode`), a slotmap-backed reference index
//! (`TriangleTree`), and the user-paced level-by-level walk (`Frontier`).

mod tree_node;
mod spatial_index;
mod triangle_tree;
mod frontier;

pub use tree_node::{NodeKey, TreeNode};
pub use spatial_index::SpatialIndex;
pub use triangle_tree::TriangleTree;
pub use frontier::Frontier;

#[cfg(test)]
pub(crate) mod test_scenes;
