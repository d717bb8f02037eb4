use glam::Vec3;
use super::*;

#[test]
fn test_ray_keeps_direction_unnormalized() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(ray.direction(), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(ray.at(1.5), Vec3::new(0.0, 3.0, 0.0));
}

#[test]
fn test_ray_at_zero_is_origin() {
    let origin = Vec3::new(1.0, -2.0, 3.0);
    let ray = Ray::new(origin, Vec3::X);
    assert_eq!(ray.at(0.0), origin);
}

#[test]
fn test_ray_at_negative_parameter() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(ray.at(-2.0), Vec3::new(0.0, 0.0, 7.0));
}

#[test]
fn test_inverse_direction_propagates_infinity() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 2.0, -4.0));
    let inv = ray.inv_direction();

    assert!(inv.x.is_infinite() && inv.x > 0.0);
    assert_eq!(inv.y, 0.5);
    assert_eq!(inv.z, -0.25);
}
