use glam::DVec3;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::surface::Surface;

/// Non-negative roots of a ray/sphere quadratic, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None,
    One(f64),
    Two(f64, f64),
}

impl Roots {
    pub fn count(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::One(_) => 1,
            Roots::Two(..) => 2,
        }
    }

    pub fn first(&self) -> Option<f64> {
        match *self {
            Roots::None => None,
            Roots::One(t) | Roots::Two(t, _) => Some(t),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        let (a, b) = match *self {
            Roots::None => (None, None),
            Roots::One(t) => (Some(t), None),
            Roots::Two(t1, t2) => (Some(t1), Some(t2)),
        };
        a.into_iter().chain(b)
    }
}

#[derive(Debug, Clone)]
pub struct Sphere {
    pub surface: Surface,
    center: DVec3,
    radius: f64,
}

impl Sphere {
    pub fn new(surface: Surface, center: DVec3, radius: f64) -> Result<Sphere> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(Error::InvalidShape(format!("sphere radius must be positive, got {}", radius)));
        }
        return Ok(Sphere { surface, center, radius });
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Solve `|P + tD - C| = r` for `t`, dropping negative roots one by one.
    /// `D` need not be unit length.
    pub fn roots(&self, r: &Ray) -> Roots {
        let oc = r.origin - self.center;
        let a = r.direction.length_squared();
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.length_squared() - (self.radius * self.radius);

        if a == 0.0 {
            return Roots::None;
        }

        let discriminant = (b * b) - (4.0 * a * c);

        if discriminant < 0.0 {
            return Roots::None;
        }

        if discriminant == 0.0 {
            let t = -b / (2.0 * a);
            return if t < 0.0 { Roots::None } else { Roots::One(t) };
        }

        let discriminant_sqrt = discriminant.sqrt();
        let mut t1 = (-b + discriminant_sqrt) / (2.0 * a);
        let mut t2 = (-b - discriminant_sqrt) / (2.0 * a);
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        return match (t1 < 0.0, t2 < 0.0) {
            (true, true) => Roots::None,
            (true, false) => Roots::One(t2),
            _ => Roots::Two(t1, t2),
        };
    }

    pub fn intersection(&self, r: &Ray) -> Option<f64> {
        self.roots(r).first()
    }

    pub fn surface_normal(&self, point: DVec3) -> DVec3 {
        (point - self.center).normalize_or_zero()
    }
}
