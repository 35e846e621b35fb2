mod cylinder;
mod plane;
mod sphere;

pub use cylinder::Cylinder;
pub use plane::InfinitePlane;
pub use sphere::{Roots, Sphere};
