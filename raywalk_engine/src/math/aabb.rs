/// Axis-aligned bounding box and the ray/box slab test.
///
/// Invariant: `min[i] <= max[i]` on every axis. Boxes are owned by tree
/// nodes and read-only to the traversal code.

use glam::Vec3;
use super::ray::Ray;

/// Number of vertices emitted per box by `AABB::edge_vertices` (12 edges).
pub const BOX_EDGE_VERTEX_COUNT: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Build a box from two corners, reordering components so `min <= max`.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Tightest box around a set of points. `None` for an empty set.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Slab test. Returns the entry/exit parameters `(t_near, t_far)`.
    ///
    /// Per axis the two plane crossings are ordered so that near <= far,
    /// then the running interval is the max of the nears and the min of
    /// the fars. Misses when the interval empties or lies entirely behind
    /// the origin (`t_far < 0`). `t_near` is negative when the origin is
    /// inside the box.
    ///
    /// A zero direction component makes `1/d` infinite: the slab then
    /// covers the whole line if the origin lies between its planes and
    /// nothing otherwise. That case is decided directly because an origin
    /// sitting exactly on a plane would produce `0 * inf = NaN`.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f32, f32)> {
        let origin = ray.origin();
        let direction = ray.direction();
        let inv = ray.inv_direction();

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            if direction[axis] == 0.0 {
                if origin[axis] < self.min[axis] || origin[axis] > self.max[axis] {
                    return None;
                }
                continue;
            }

            let mut t0 = (self.min[axis] - origin[axis]) * inv[axis];
            let mut t1 = (self.max[axis] - origin[axis]) * inv[axis];
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_near = t_near.max(t0);
            t_far = t_far.min(t1);

            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }

        Some((t_near, t_far))
    }

    /// Whether `intersect_ray` reports a hit.
    pub fn is_hit_by(&self, ray: &Ray) -> bool {
        self.intersect_ray(ray).is_some()
    }

    /// The 12 box edges as 24 vertices (line-list order).
    ///
    /// Order: 4 edges of the `min.y` face, 4 edges of the `max.y` face,
    /// then the 4 vertical edges.
    pub fn edge_vertices(&self) -> [Vec3; BOX_EDGE_VERTEX_COUNT] {
        let (mn, mx) = (self.min, self.max);
        let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);

        [
            // bottom
            v(mn.x, mn.y, mn.z), v(mx.x, mn.y, mn.z),
            v(mn.x, mn.y, mn.z), v(mn.x, mn.y, mx.z),
            v(mx.x, mn.y, mn.z), v(mx.x, mn.y, mx.z),
            v(mn.x, mn.y, mx.z), v(mx.x, mn.y, mx.z),
            // top
            v(mn.x, mx.y, mn.z), v(mx.x, mx.y, mn.z),
            v(mn.x, mx.y, mn.z), v(mn.x, mx.y, mx.z),
            v(mn.x, mx.y, mx.z), v(mx.x, mx.y, mx.z),
            v(mx.x, mx.y, mn.z), v(mx.x, mx.y, mx.z),
            // verticals
            v(mn.x, mn.y, mn.z), v(mn.x, mx.y, mn.z),
            v(mx.x, mn.y, mn.z), v(mx.x, mx.y, mn.z),
            v(mn.x, mn.y, mx.z), v(mn.x, mx.y, mx.z),
            v(mx.x, mn.y, mx.z), v(mx.x, mx.y, mx.z),
        ]
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
