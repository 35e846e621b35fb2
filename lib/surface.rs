use glam::DVec3;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::shapes::{Cylinder, InfinitePlane, Sphere};

/// How a shape looks: its diffuse color and how much of a mirror it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub color: Color,
    pub reflectivity: f64,
}

impl Surface {
    pub fn new(color: Color, reflectivity: f64) -> Result<Surface> {
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(Error::InvalidShape(format!("reflectivity must be within [0, 1], got {}", reflectivity)));
        }
        Ok(Surface { color, reflectivity })
    }

    pub fn matte(color: Color) -> Surface {
        Surface { color, reflectivity: 0.0 }
    }
}

#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(InfinitePlane),
    Cylinder(Cylinder),
}

impl Shape {
    /// Smallest non-negative time at which `r` meets the shape, if any.
    pub fn intersection(&self, r: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(s) => s.intersection(r),
            Shape::Plane(p) => p.intersection(r),
            Shape::Cylinder(c) => c.intersection(r),
        }
    }

    /// Unit normal at `point`, assumed to lie on the surface. Zero where the
    /// normal is undefined.
    pub fn surface_normal(&self, point: DVec3) -> DVec3 {
        match self {
            Shape::Sphere(s) => s.surface_normal(point),
            Shape::Plane(p) => p.surface_normal(point),
            Shape::Cylinder(c) => c.surface_normal(point),
        }
    }

    pub fn surface(&self) -> &Surface {
        match self {
            Shape::Sphere(s) => &s.surface,
            Shape::Plane(p) => &p.surface,
            Shape::Cylinder(c) => &c.surface,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Shape {
        Shape::Sphere(s)
    }
}

impl From<InfinitePlane> for Shape {
    fn from(p: InfinitePlane) -> Shape {
        Shape::Plane(p)
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Shape {
        Shape::Cylinder(c)
    }
}
