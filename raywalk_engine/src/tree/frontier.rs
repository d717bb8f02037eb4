/// Frontier: the set of active nodes in a stepwise ray traversal.
///
/// ```text
/// ascend_to_root        descend_along_ray (repeat)
///   [root]  ──────────▶  leaves resolved to points, dropped
///                        internal nodes replaced by hit children
///                        ...until the frontier is empty
/// ```
///
/// Keys are visited in frontier order and children in the order the
/// index stores them, so the same ray over the same tree always yields
/// the same frontiers and the same point order.

use glam::Vec3;
use crate::math::{Ray, BOX_EDGE_VERTEX_COUNT};
use super::spatial_index::SpatialIndex;
use super::tree_node::{NodeKey, TreeNode};

const SOURCE: &str = "raywalk::Frontier";

#[derive(Debug, Clone, Default)]
pub struct Frontier {
    nodes: Vec<NodeKey>,
    /// Steps taken since the last `ascend_to_root`.
    depth: usize,
}

impl Frontier {
    /// Empty frontier (terminal state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to `[root]`. An index without a root gives an empty frontier.
    pub fn ascend_to_root(&mut self, index: &dyn SpatialIndex) {
        self.nodes.clear();
        self.nodes.extend(index.root());
        self.depth = 0;
    }

    /// Advance one level along `ray` and return the points found on this step.
    ///
    /// Leaves are intersected and not carried over. Internal nodes are
    /// replaced by those children whose box the ray hits. Once the
    /// frontier is empty this is a no-op returning no points.
    pub fn descend_along_ray(&mut self, index: &dyn SpatialIndex, ray: &Ray) -> Vec<Vec3> {
        if self.nodes.is_empty() {
            return Vec::new();
        }

        let mut next = Vec::new();
        let mut points = Vec::new();

        for &key in &self.nodes {
            match index.node(key) {
                Some(node @ TreeNode::Leaf { .. }) => points.extend(node.intersect(ray)),
                Some(TreeNode::Internal { children, .. }) => {
                    next.extend(children.iter().copied().filter(|&child| {
                        index
                            .node(child)
                            .is_some_and(|c| c.aabb().is_hit_by(ray))
                    }));
                }
                None => {
                    crate::engine_warn!(SOURCE, "Skipping stale node {:?}", key);
                }
            }
        }

        crate::engine_trace!(
            SOURCE,
            "Step {}: {} nodes -> {} nodes, {} points",
            self.depth + 1,
            self.nodes.len(),
            next.len(),
            points.len()
        );

        self.nodes = next;
        self.depth += 1;
        points
    }

    /// Line-list vertices (24 per node) outlining every frontier box.
    pub fn create_wireframe(&self, index: &dyn SpatialIndex) -> Vec<Vec3> {
        let mut vertices = Vec::with_capacity(self.nodes.len() * BOX_EDGE_VERTEX_COUNT);
        for node in self.nodes.iter().filter_map(|&key| index.node(key)) {
            vertices.extend_from_slice(&node.aabb().edge_vertices());
        }
        vertices
    }

    pub fn nodes(&self) -> &[NodeKey] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Drop every node (terminal state) without touching the depth counter.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
#[path = "frontier_tests.rs"]
mod tests;
