//! Tests for the degeneracy scanner.

use super::*;

fn flat_plane() -> Plane {
    // normal +Z
    Plane::through(Vec3::ZERO, Vec3::Y, Vec3::X).unwrap()
}

#[test]
fn triple_starts_at_first_point() {
    let pts = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    ];
    assert_eq!(non_collinear_triple(&pts, 1e-9), Some([0, 2, 1]));
}

#[test]
fn farthest_tie_keeps_earlier_index() {
    let pts = [
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, 0.0, 2.0),
    ];
    // all three are at distance 2; index 1 wins the base axis and index 2
    // wins the perpendicular scan over the equally distant index 3
    assert_eq!(non_collinear_triple(&pts, 1e-9), Some([0, 1, 2]));
}

#[test]
fn coincident_points_have_no_triple() {
    let pts = [Vec3::splat(1.0); 6];
    assert_eq!(find_triple(&pts, 1e-9), Err(HullError::Coincident));
    assert_eq!(non_collinear_triple(&pts, 0.0), None);
}

#[test]
fn collinear_points_have_no_triple() {
    let dir = Vec3::new(1.0, 2.0, -3.0);
    let pts: Vec<Vec3> = (0..6).map(|i| dir * i as f64).collect();
    assert_eq!(find_triple(&pts, 1e-9), Err(HullError::Collinear));
}

#[test]
fn near_collinear_within_tolerance_is_rejected() {
    let pts = [
        Vec3::ZERO,
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(5.0, 1e-6, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
    ];
    // perpendicular offset 1e-6 is below precision × base = 1e-6 × 10
    assert_eq!(find_triple(&pts, 1e-6), Err(HullError::Collinear));
    assert_eq!(find_triple(&pts, 1e-9), Ok([0, 1, 2]));
}

#[test]
fn too_few_points_for_triple() {
    assert_eq!(
        find_triple(&[Vec3::ZERO, Vec3::X], 0.0),
        Err(HullError::TooFewPoints { count: 2 })
    );
    assert_eq!(non_collinear_triple(&[], 0.0), None);
}

#[test]
fn non_coplanar_takes_first_in_index_order() {
    let pts = [
        Vec3::X,
        Vec3::new(0.0, 0.0, 1e-12),
        Vec3::new(0.0, 0.0, 0.5),
        Vec3::new(0.0, 0.0, 9.0),
    ];
    let found = first_non_coplanar(&pts, &flat_plane(), 1e-9).unwrap();
    assert_eq!(found, OffPlane { index: 2, above: true });
}

#[test]
fn non_coplanar_reports_side() {
    let pts = [Vec3::ZERO, Vec3::new(0.0, 0.0, -0.5)];
    let found = first_non_coplanar(&pts, &flat_plane(), 1e-9).unwrap();
    assert_eq!(found, OffPlane { index: 1, above: false });
}

#[test]
fn flat_input_has_no_off_plane_point() {
    let pts = [Vec3::X, Vec3::Y, Vec3::new(3.0, -2.0, 0.0)];
    assert_eq!(first_non_coplanar(&pts, &flat_plane(), 1e-9), None);
}

#[test]
fn zero_plane_reports_everything_coplanar() {
    let pts = [Vec3::splat(100.0), Vec3::splat(-4.0)];
    assert_eq!(first_non_coplanar(&pts, &Plane::ZERO, 0.0), None);
}
