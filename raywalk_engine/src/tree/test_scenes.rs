//! Small hand-assembled trees shared by unit tests.

use glam::Vec3;
use crate::math::{Triangle, AABB};
use super::{NodeKey, TriangleTree};

/// Keys of the two-level binary scene.
pub(crate) struct BinaryScene {
    pub tree: TriangleTree,
    pub root: NodeKey,
    pub inner: [NodeKey; 2],
    pub leaves: [NodeKey; 4],
}

/// Wall triangle in the plane `x = c`, covering (y, z) = (-0.5, -0.5).
pub(crate) fn wall(c: f32) -> Triangle {
    Triangle::new(
        Vec3::new(c, -1.0, -1.0),
        Vec3::new(c, 1.0, -1.0),
        Vec3::new(c, -1.0, 1.0),
    )
}

/// Binary tree over x in [0, 8], y and z in [-1, 1].
///
/// ```text
///              root [0,8]
///        inner0 [0,4]    inner1 [4,8]
///     leaf0 [0,2] leaf1 [2,4] leaf2 [4,6] leaf3 [6,8]
/// ```
///
/// Leaf `i` holds a wall at `x = 2i + 1`.
pub(crate) fn binary_scene() -> BinaryScene {
    let mut tree = TriangleTree::new();

    let leaves = [0, 1, 2, 3].map(|i| {
        let lo = 2.0 * i as f32;
        tree.insert_leaf_with_bounds(
            AABB::new(Vec3::new(lo, -1.0, -1.0), Vec3::new(lo + 2.0, 1.0, 1.0)),
            vec![wall(lo + 1.0)],
        )
    });

    let inner = [
        tree.insert_internal(vec![leaves[0], leaves[1]]).unwrap(),
        tree.insert_internal(vec![leaves[2], leaves[3]]).unwrap(),
    ];
    let root = tree.insert_internal(vec![inner[0], inner[1]]).unwrap();
    tree.set_root(root).unwrap();

    BinaryScene { tree, root, inner, leaves }
}
