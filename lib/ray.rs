use glam::DVec3;

use crate::util::reflect;

/// A half-line `origin + t * direction`, `t >= 0`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Build a ray with a unit direction. A zero direction stays zero, so the
    /// ray hits nothing instead of carrying NaNs into the tracer.
    pub fn new(origin: DVec3, direction: DVec3) -> Ray {
        Ray { origin, direction: direction.normalize_or_zero() }
    }

    /// Keep `direction` as given. The cylinder test intersects the part of a
    /// ray perpendicular to its axis and needs the times to line up with the
    /// full ray.
    pub const fn new_unnormalized(origin: DVec3, direction: DVec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn at(&self, t: f64) -> DVec3 {
        debug_assert!(t >= 0.0, "ray evaluated behind its origin (t = {})", t);
        self.origin + self.direction * t
    }

    /// The mirror ray leaving `point` on a surface with normal `normal`,
    /// nudged `epsilon` along its own direction so it cannot re-hit the surface.
    pub fn reflect(&self, point: DVec3, normal: DVec3, epsilon: f64) -> Ray {
        let reflected = reflect(self.direction, normal);
        return Ray::new(point + reflected * epsilon, reflected);
    }
}
