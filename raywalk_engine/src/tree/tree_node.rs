/// Tree nodes exposed by a spatial index.
///
/// A node is either a leaf holding triangles or an internal node holding
/// the keys of its children, in a fixed order. Traversal code matches on
/// the variant instead of going through virtual dispatch.

use glam::Vec3;
use slotmap::new_key_type;
use crate::math::{Ray, Triangle, AABB};

new_key_type! {
    /// Stable handle to a node inside one spatial index.
    pub struct NodeKey;
}

#[derive(Debug, Clone)]
pub enum TreeNode {
    Leaf {
        aabb: AABB,
        triangles: Vec<Triangle>,
    },
    Internal {
        aabb: AABB,
        /// Child order is the visiting order everywhere.
        children: Vec<NodeKey>,
    },
}

impl TreeNode {
    pub fn aabb(&self) -> &AABB {
        match self {
            TreeNode::Leaf { aabb, .. } | TreeNode::Internal { aabb, .. } => aabb,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Child keys in visiting order. Empty for leaves.
    pub fn children(&self) -> &[NodeKey] {
        match self {
            TreeNode::Leaf { .. } => &[],
            TreeNode::Internal { children, .. } => children,
        }
    }

    /// Leaf capability: every triangle hit, in triangle order.
    /// Internal nodes return nothing.
    pub fn intersect(&self, ray: &Ray) -> Vec<Vec3> {
        match self {
            TreeNode::Leaf { triangles, .. } => {
                triangles.iter().filter_map(|t| t.intersect(ray)).collect()
            }
            TreeNode::Internal { .. } => Vec::new(),
        }
    }
}
