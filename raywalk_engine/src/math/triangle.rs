/// Triangle primitive with Möller–Trumbore ray intersection.
///
/// Used by leaf nodes of the bundled `TriangleTree` index.

use glam::Vec3;
use super::aabb::AABB;
use super::ray::Ray;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn bounds(&self) -> AABB {
        AABB {
            min: self.v0.min(self.v1).min(self.v2),
            max: self.v0.max(self.v1).max(self.v2),
        }
    }

    /// Hit point of `ray` on this triangle, if any.
    ///
    /// Rays parallel to the plane (|det| <= eps) and hits at `t <= eps`
    /// are rejected. Edges and vertices count as inside.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let epsilon = f32::EPSILON;
        let direction = ray.direction();

        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        let ray_cross_e2 = direction.cross(edge2);

        let det = edge1.dot(ray_cross_e2);
        if det.abs() <= epsilon {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = ray.origin() - self.v0;
        let u = inv_det * s.dot(ray_cross_e2);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let s_cross_e1 = s.cross(edge1);
        let v = inv_det * direction.dot(s_cross_e1);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge2.dot(s_cross_e1);
        if t <= epsilon {
            return None;
        }

        Some(ray.at(t))
    }
}

#[cfg(test)]
#[path = "triangle_tests.rs"]
mod tests;
