use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, UnitSphere};

use whitted::color::Color;
use whitted::ray::Ray;
use whitted::shapes::{Cylinder, InfinitePlane, Sphere};
use whitted::surface::{Shape, Surface};

const SAMPLES: usize = 2000;

fn rand_dir(rng: &mut StdRng) -> DVec3 {
    let v: [f64; 3] = UnitSphere.sample(rng);
    DVec3::from(v)
}

fn rand_point(rng: &mut StdRng, extent: f64) -> DVec3 {
    DVec3::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent), rng.gen_range(-extent..extent))
}

fn matte() -> Surface {
    Surface::matte(Color::ONE)
}

/// Distance from `p` to the shape's surface.
fn surface_distance(shape: &Shape, p: DVec3) -> f64 {
    match shape {
        Shape::Sphere(s) => ((p - s.center()).length() - s.radius()).abs(),
        Shape::Plane(pl) => (p.dot(pl.normal()) + pl.distance()).abs(),
        Shape::Cylinder(c) => {
            let v = p - c.center();
            let across = v - v.dot(c.axis()) * c.axis();
            (across.length() - c.radius()).abs()
        }
    }
}

fn shapes() -> Vec<Shape> {
    vec![
        Sphere::new(matte(), DVec3::new(0.5, -1.0, 2.0), 1.5).unwrap().into(),
        InfinitePlane::new(matte(), 1.0, DVec3::new(0.2, 1.0, -0.3)).unwrap().into(),
        Cylinder::new(matte(), DVec3::new(-1.0, 0.0, 0.5), 1.0, DVec3::new(1.0, 1.0, 0.0), 3.0).unwrap().into(),
    ]
}

#[test]
fn test_hit_points_lie_on_surface() {
    let mut rng = StdRng::seed_from_u64(7);
    for shape in shapes() {
        let mut hits = 0;
        for _ in 0..SAMPLES {
            let r = Ray::new(rand_point(&mut rng, 6.0), rand_dir(&mut rng));
            if let Some(t) = shape.intersection(&r) {
                assert!(t >= 0.0);
                assert!(surface_distance(&shape, r.at(t)) < 1e-6, "{:?} missed its own surface", shape);
                hits += 1;
            }
        }
        assert!(hits > 0, "{:?} was never hit", shape);
    }
}

#[test]
fn test_cylinder_hits_stay_within_height() {
    let mut rng = StdRng::seed_from_u64(11);
    let c = Cylinder::new(matte(), DVec3::new(0.0, 1.0, 0.0), 0.8, DVec3::Y, 2.0).unwrap();
    for _ in 0..SAMPLES {
        let r = Ray::new(rand_point(&mut rng, 4.0), rand_dir(&mut rng));
        if let Some(t) = c.intersection(&r) {
            let along = (r.at(t) - c.center()).dot(c.axis());
            assert!(along.abs() <= 1.0 + 1e-9);
        }
    }
}

#[test]
fn test_cylinder_returns_nearest_valid_wall() {
    let mut rng = StdRng::seed_from_u64(3);
    let c = Cylinder::new(matte(), DVec3::ZERO, 1.0, DVec3::Z, 2.0).unwrap();
    for _ in 0..SAMPLES {
        let r = Ray::new(rand_point(&mut rng, 4.0), rand_dir(&mut rng));

        // Solve x^2 + y^2 = 1 directly and keep walls inside |z| <= 1.
        let (o, d) = (r.origin, r.direction);
        let a = d.x * d.x + d.y * d.y;
        let b = 2.0 * (o.x * d.x + o.y * d.y);
        let k = o.x * o.x + o.y * o.y - 1.0;
        let disc = b * b - 4.0 * a * k;
        let expected = if a < 1e-12 || disc < 0.0 {
            None
        } else {
            [(-b - disc.sqrt()) / (2.0 * a), (-b + disc.sqrt()) / (2.0 * a)]
                .into_iter()
                .filter(|t| *t >= 0.0 && r.at(*t).z.abs() <= 1.0)
                .reduce(f64::min)
        };

        match (c.intersection(&r), expected) {
            (Some(t), Some(e)) => assert!((t - e).abs() < 1e-9, "got {} expected {}", t, e),
            (None, None) => {}
            (got, want) => {
                // Only grazing hits right on the rim may disagree.
                let t = got.or(want).unwrap();
                assert!((r.at(t).z.abs() - 1.0).abs() < 1e-9, "got {:?} expected {:?}", got, want);
            }
        }
    }
}

#[test]
fn test_sphere_distance_along_center_ray() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let center = rand_point(&mut rng, 5.0);
        let radius = rng.gen_range(0.1..3.0);
        let s = Sphere::new(matte(), center, radius).unwrap();

        let origin = center + rand_dir(&mut rng) * rng.gen_range(radius + 0.01..20.0);
        let r = Ray::new(origin, center - origin);
        let t = s.intersection(&r).unwrap();
        assert!((t - ((origin - center).length() - radius)).abs() < 1e-9);
    }
}

#[test]
fn test_sphere_miss_when_discriminant_negative() {
    let mut rng = StdRng::seed_from_u64(9);
    let s = Sphere::new(matte(), DVec3::ZERO, 1.0).unwrap();
    for _ in 0..SAMPLES {
        // Rays passing the center at a distance greater than the radius.
        let dir = rand_dir(&mut rng);
        let helper = if dir.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        let side = dir.cross(helper).normalize();
        let origin = side * rng.gen_range(1.01..5.0) - dir * rng.gen_range(-5.0..5.0);
        assert_eq!(s.intersection(&Ray::new(origin, dir)), None);
    }
}

#[test]
fn test_plane_parallel_rays_miss() {
    let mut rng = StdRng::seed_from_u64(13);
    let normal = DVec3::new(0.0, 0.0, 1.0);
    let p = InfinitePlane::new(matte(), 0.0, normal).unwrap();
    for _ in 0..SAMPLES {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let dir = DVec3::new(angle.cos(), angle.sin(), 0.0);
        let origin = rand_point(&mut rng, 5.0);
        assert_eq!(p.intersection(&Ray::new_unnormalized(origin, dir)), None);
    }
}
