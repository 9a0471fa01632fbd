//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use incremental_hull::{Triangle, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Routes `tracing` output through the test harness; `RUST_LOG` filters it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn cube_corners(size: f64) -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(size, 0.0, 0.0),
        Vec3::new(size, size, 0.0),
        Vec3::new(0.0, size, 0.0),
        Vec3::new(0.0, 0.0, size),
        Vec3::new(size, 0.0, size),
        Vec3::new(size, size, size),
        Vec3::new(0.0, size, size),
    ]
}

pub fn regular_tetrahedron() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ]
}

/// `count` points on the sphere of `radius`, reproducible per `seed`.
pub fn sphere_points(count: usize, radius: f64, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let v = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let length = v.length();
        if length > 0.1 && length <= 1.0 {
            points.push(v / length * radius);
        }
    }
    points
}

/// `count` points uniformly inside the cube `[-half, half]^3`.
pub fn box_cloud(count: usize, half: f64, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            )
        })
        .collect()
}

/// Order-independent form of a triangle list.
pub fn canonical(triangles: &[Triangle]) -> Vec<Triangle> {
    let mut out: Vec<Triangle> = triangles.iter().map(Triangle::canonical).collect();
    out.sort_by_key(Triangle::vertices);
    out
}
