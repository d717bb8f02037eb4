/// Capability consumed by the traversal code.
///
/// Construction (split heuristics, balancing) and any multithreaded query
/// belong to the implementor. The viewer only walks nodes, runs the
/// whole-tree query, and times the optional parallel query.
///
/// Ownership: the host builds the index and shares it as
/// `Arc<dyn SpatialIndex>` with the viewer.

use glam::Vec3;
use crate::math::{Ray, AABB};
use super::tree_node::{NodeKey, TreeNode};

pub trait SpatialIndex: Send + Sync {
    /// Root node, or `None` for an empty index.
    fn root(&self) -> Option<NodeKey>;

    /// Look up a node by key.
    fn node(&self, key: NodeKey) -> Option<&TreeNode>;

    /// Whole-index ray query.
    fn intersect(&self, ray: &Ray) -> Vec<Vec3>;

    /// Multithreaded variant of `intersect` using `workers` threads.
    ///
    /// `None` means the capability is not available in this build.
    fn parallel_intersect(&self, _ray: &Ray, _workers: usize) -> Option<Vec<Vec3>> {
        None
    }

    /// Bounds of the root node.
    fn root_aabb(&self) -> Option<AABB> {
        self.root().and_then(|key| self.node(key)).map(|node| *node.aabb())
    }
}
