use glam::Vec3;
use crate::error::Error;
use crate::math::{Ray, Triangle, AABB};
use super::*;
use crate::tree::test_scenes::{binary_scene, wall};

fn along_x() -> Ray {
    Ray::new(Vec3::new(-5.0, -0.5, -0.5), Vec3::X)
}

// ============================================================================
// Assembly
// ============================================================================

#[test]
fn test_insert_leaf_derives_bounds() {
    let mut tree = TriangleTree::new();
    let key = tree.insert_leaf(vec![wall(3.0)]).unwrap();

    let node = tree.node(key).unwrap();
    assert!(node.is_leaf());
    assert_eq!(node.aabb().min, Vec3::new(3.0, -1.0, -1.0));
    assert_eq!(node.aabb().max, Vec3::new(3.0, 1.0, 1.0));
}

#[test]
fn test_insert_empty_leaf_fails() {
    let mut tree = TriangleTree::new();
    assert!(matches!(tree.insert_leaf(Vec::new()), Err(Error::InvalidTree(_))));
}

#[test]
fn test_insert_internal_unions_children() {
    let scene = binary_scene();
    let root = scene.tree.node(scene.root).unwrap();

    assert!(!root.is_leaf());
    assert_eq!(root.children(), &scene.inner);
    assert_eq!(root.aabb().min, Vec3::new(0.0, -1.0, -1.0));
    assert_eq!(root.aabb().max, Vec3::new(8.0, 1.0, 1.0));
}

#[test]
fn test_insert_internal_without_children_fails() {
    let mut tree = TriangleTree::new();
    assert!(matches!(tree.insert_internal(Vec::new()), Err(Error::InvalidTree(_))));
}

#[test]
fn test_insert_internal_with_foreign_key_fails() {
    let other = binary_scene();
    let mut tree = TriangleTree::new();
    tree.insert_leaf(vec![wall(0.0)]).unwrap();

    // Keys from a different arena with a higher slot index are unknown here.
    let result = tree.insert_internal(vec![other.root]);
    assert!(matches!(result, Err(Error::InvalidNode(_))));
}

#[test]
fn test_set_root_with_unknown_key_fails() {
    let other = binary_scene();
    let mut tree = TriangleTree::new();
    assert!(matches!(tree.set_root(other.root), Err(Error::InvalidNode(_))));
    assert!(tree.root().is_none());
}

#[test]
fn test_len_and_depth() {
    let scene = binary_scene();
    assert_eq!(scene.tree.len(), 7);
    assert_eq!(scene.tree.depth(), 3);
    assert!(!scene.tree.is_empty());

    let empty = TriangleTree::new();
    assert_eq!(empty.depth(), 0);
    assert!(empty.is_empty());
}

// ============================================================================
// Whole-tree query
// ============================================================================

#[test]
fn test_intersect_returns_hits_in_child_order() {
    let scene = binary_scene();
    let points = scene.tree.intersect(&along_x());

    let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
    assert_eq!(xs.len(), 4);
    for (x, expected) in xs.iter().zip([1.0, 3.0, 5.0, 7.0]) {
        assert!((x - expected).abs() < 1e-5);
    }
}

#[test]
fn test_intersect_missing_root_box_is_empty() {
    let scene = binary_scene();
    let ray = Ray::new(Vec3::new(-5.0, 5.0, 0.0), Vec3::X);
    assert!(scene.tree.intersect(&ray).is_empty());
}

#[test]
fn test_intersect_empty_tree() {
    let tree = TriangleTree::new();
    assert!(tree.intersect(&along_x()).is_empty());
    assert!(tree.root_aabb().is_none());
}

#[test]
fn test_single_leaf_tree() {
    let tree = TriangleTree::from_triangles(vec![Triangle::new(
        Vec3::new(-1.0, -1.0, 2.0),
        Vec3::new(1.0, -1.0, 2.0),
        Vec3::new(0.0, 1.0, 2.0),
    )])
    .unwrap();

    let ray = Ray::new(Vec3::ZERO, Vec3::Z);
    let points = tree.intersect(&ray);
    assert_eq!(points.len(), 1);
    assert!((points[0] - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-5);
}

#[test]
fn test_parallel_capability_absent_by_default() {
    let scene = binary_scene();
    assert!(scene.tree.parallel_intersect(&along_x(), 4).is_none());
}

#[test]
fn test_root_aabb() {
    let scene = binary_scene();
    let aabb = scene.tree.root_aabb().unwrap();
    assert_eq!(aabb, AABB::new(Vec3::new(0.0, -1.0, -1.0), Vec3::new(8.0, 1.0, 1.0)));
}
