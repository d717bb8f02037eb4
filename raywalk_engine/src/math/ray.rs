/// Ray: origin plus direction, immutable once built.
///
/// The direction is kept as given (not normalized). Ray parameters `t`
/// returned by the intersection routines are therefore in units of the
/// direction's length.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    /// Component-wise reciprocal of `direction`; zero components give ±inf.
    inv_direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: direction.recip(),
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn inv_direction(&self) -> Vec3 {
        self.inv_direction
    }

    /// Point at parameter `t`: `origin + direction * t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
#[path = "ray_tests.rs"]
mod tests;
