/// TriangleTree: reference `SpatialIndex` over triangles.
///
/// Nodes live in a `SlotMap` arena and refer to each other by `NodeKey`.
/// The hierarchy is assembled bottom-up from an externally computed
/// partition (leaves first, then the internal nodes that group them,
/// then the root). No splitting is done here.
///
/// Leaves may sit at any depth and internal nodes may have any number of
/// children, so KD-trees, quadtrees, octrees and BVHs all fit.

use glam::Vec3;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::math::{Ray, Triangle, AABB};
use super::spatial_index::SpatialIndex;
use super::tree_node::{NodeKey, TreeNode};

const SOURCE: &str = "raywalk::TriangleTree";

#[derive(Debug, Clone, Default)]
pub struct TriangleTree {
    nodes: SlotMap<NodeKey, TreeNode>,
    root: Option<NodeKey>,
}

impl TriangleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an assembly error before returning it.
    fn log_and_return_error(error: Error) -> Error {
        crate::engine_error!(SOURCE, "{}", error);
        error
    }

    // ===== ASSEMBLY =====

    /// Insert a leaf whose bounds are the tight box around its triangles.
    ///
    /// # Errors
    ///
    /// `InvalidTree` if `triangles` is empty (no bounds can be derived).
    pub fn insert_leaf(&mut self, triangles: Vec<Triangle>) -> Result<NodeKey> {
        let aabb = AABB::from_points(triangles.iter().flat_map(|t| [t.v0, t.v1, t.v2]))
            .ok_or_else(|| Self::log_and_return_error(Error::InvalidTree(
                "leaf without triangles needs explicit bounds".to_string(),
            )))?;
        Ok(self.nodes.insert(TreeNode::Leaf { aabb, triangles }))
    }

    /// Insert a leaf with caller-provided bounds (may be empty of triangles).
    pub fn insert_leaf_with_bounds(&mut self, aabb: AABB, triangles: Vec<Triangle>) -> NodeKey {
        self.nodes.insert(TreeNode::Leaf { aabb, triangles })
    }

    /// Insert an internal node over already-inserted children.
    ///
    /// Bounds are the union of the children's bounds. Child order is kept
    /// and becomes the traversal order.
    ///
    /// # Errors
    ///
    /// `InvalidTree` if `children` is empty, `InvalidNode` if a key is unknown.
    pub fn insert_internal(&mut self, children: Vec<NodeKey>) -> Result<NodeKey> {
        let mut bounds: Option<AABB> = None;
        for &child in &children {
            let node = self.nodes.get(child).ok_or_else(|| Self::log_and_return_error(
                Error::InvalidNode(format!("child {:?} is not part of this tree", child)),
            ))?;
            let child_box = *node.aabb();
            bounds = Some(match bounds {
                Some(b) => b.union(&child_box),
                None => child_box,
            });
        }

        let aabb = bounds.ok_or_else(|| Self::log_and_return_error(Error::InvalidTree(
            "internal node needs at least one child".to_string(),
        )))?;

        Ok(self.nodes.insert(TreeNode::Internal { aabb, children }))
    }

    /// Designate the root node.
    ///
    /// # Errors
    ///
    /// `InvalidNode` if `key` is unknown.
    pub fn set_root(&mut self, key: NodeKey) -> Result<()> {
        if !self.nodes.contains_key(key) {
            return Err(Self::log_and_return_error(Error::InvalidNode(format!(
                "root {:?} is not part of this tree",
                key
            ))));
        }
        self.root = Some(key);
        crate::engine_debug!(SOURCE, "Root set ({} nodes)", self.nodes.len());
        Ok(())
    }

    /// Convenience: a single-leaf tree.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Result<Self> {
        let mut tree = Self::new();
        let leaf = tree.insert_leaf(triangles)?;
        tree.set_root(leaf)?;
        Ok(tree)
    }

    // ===== QUERIES =====

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels below (and including) the root. 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.depth_recursive(root))
    }

    fn depth_recursive(&self, key: NodeKey) -> usize {
        match self.nodes.get(key) {
            Some(node) => {
                1 + node
                    .children()
                    .iter()
                    .map(|&child| self.depth_recursive(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Depth-first query: leaves contribute triangle hits, internal nodes
    /// recurse into every child whose box the ray hits, in child order.
    fn intersect_recursive(&self, key: NodeKey, ray: &Ray, output: &mut Vec<Vec3>) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };

        match node {
            TreeNode::Leaf { .. } => output.extend(node.intersect(ray)),
            TreeNode::Internal { children, .. } => {
                for &child in children {
                    let hit = self
                        .nodes
                        .get(child)
                        .is_some_and(|c| c.aabb().is_hit_by(ray));
                    if hit {
                        self.intersect_recursive(child, ray, output);
                    }
                }
            }
        }
    }
}

// ===== SPATIAL INDEX TRAIT =====

impl SpatialIndex for TriangleTree {
    fn root(&self) -> Option<NodeKey> {
        self.root
    }

    fn node(&self, key: NodeKey) -> Option<&TreeNode> {
        self.nodes.get(key)
    }

    fn intersect(&self, ray: &Ray) -> Vec<Vec3> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        match self.nodes.get(root) {
            Some(node) if node.aabb().is_hit_by(ray) => {}
            _ => return Vec::new(),
        }

        let mut output = Vec::new();
        self.intersect_recursive(root, ray, &mut output);
        output
    }
}

#[cfg(test)]
#[path = "triangle_tree_tests.rs"]
mod tests;
