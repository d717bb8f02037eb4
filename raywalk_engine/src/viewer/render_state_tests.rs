use glam::{Mat4, Vec3};
use super::*;

#[test]
fn test_default_is_empty() {
    let state = RenderState::default();
    assert!(state.point_bytes().is_empty());
    assert!(state.wireframe_bytes().is_empty());
    assert!(state.ray_segment_bytes().is_empty());
    assert!(state.labels.is_empty());
}

#[test]
fn test_point_bytes_layout() {
    let state = RenderState {
        points: vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)],
        ..Default::default()
    };

    let bytes = state.point_bytes();
    assert_eq!(bytes.len(), 2 * 3 * std::mem::size_of::<f32>());

    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_wireframe_and_segment_bytes() {
    let state = RenderState {
        wireframe: vec![Vec3::ZERO; 24],
        ray_segment: Some([Vec3::ZERO, Vec3::X]),
        ..Default::default()
    };

    assert_eq!(state.wireframe_bytes().len(), 24 * 12);
    let segment: &[f32] = bytemuck::cast_slice(state.ray_segment_bytes());
    assert_eq!(segment, &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_view_projection_order() {
    let state = RenderState {
        view: Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)),
        projection: Mat4::from_scale(Vec3::splat(2.0)),
        ..Default::default()
    };

    let p = state.view_projection().transform_point3(Vec3::ZERO);
    assert_eq!(p, Vec3::new(0.0, 0.0, -10.0));
}
