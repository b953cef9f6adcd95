use trackgraph_core::{distance_3d, GeoError, Position3D, EARTH_RADIUS_M};

#[test]
fn test_identity() {
    let p = Position3D::new(59.91, 10.75, 120.0);
    assert_eq!(distance_3d(&p, &p).unwrap(), 0.0);
}

#[test]
fn test_symmetry() {
    let a = Position3D::new(59.91, 10.75, 10.0);
    let b = Position3D::new(60.39, 5.32, 250.0);
    let ab = distance_3d(&a, &b).unwrap();
    let ba = distance_3d(&b, &a).unwrap();
    assert!((ab - ba).abs() < 1e-9);
    assert!(ab > 0.0);
}

#[test]
fn test_altitude_only_difference_is_exact() {
    let a = Position3D::new(45.0, 7.0, 100.0);
    let b = Position3D::new(45.0, 7.0, 350.0);
    // ingen overflateavstand => resultatet er nøyaktig |dh|
    assert_eq!(distance_3d(&a, &b).unwrap(), 250.0);
}

#[test]
fn test_one_degree_longitude_at_equator() {
    let a = Position3D::new(0.0, 0.0, 0.0);
    let b = Position3D::new(0.0, 1.0, 0.0);
    let d = distance_3d(&a, &b).unwrap();
    // 1 grad ved ekvator med R=6_371_000 => ~111_195 m
    let expected = EARTH_RADIUS_M * 1f64.to_radians();
    assert!((d - expected).abs() / expected < 0.01);
    assert!((d - 111_195.0).abs() < 1_112.0); // innenfor 1 %
}

#[test]
fn test_colinear_points_add_up() {
    // tre punkter langs ekvator, konstant høyde
    let a = Position3D::new(0.0, 0.0, 0.0);
    let b = Position3D::new(0.0, 0.5, 0.0);
    let c = Position3D::new(0.0, 1.0, 0.0);
    let ac = distance_3d(&a, &c).unwrap();
    let ab_bc = distance_3d(&a, &b).unwrap() + distance_3d(&b, &c).unwrap();
    assert!((ac - ab_bc).abs() < 1e-6);
}

#[test]
fn test_antipodal_points_are_well_defined() {
    let a = Position3D::new(0.0, 0.0, 0.0);
    let b = Position3D::new(0.0, 180.0, 0.0);
    let d = distance_3d(&a, &b).unwrap();
    let half_circumference = std::f64::consts::PI * EARTH_RADIUS_M;
    assert!((d - half_circumference).abs() < 1.0);
}

#[test]
fn test_non_finite_input_is_rejected() {
    let good = Position3D::new(0.0, 0.0, 0.0);

    let bad_lat = Position3D::new(f64::NAN, 0.0, 0.0);
    assert!(matches!(
        distance_3d(&bad_lat, &good),
        Err(GeoError::NonFinite { field: "lat_deg", .. })
    ));

    let bad_alt = Position3D::new(0.0, 0.0, f64::INFINITY);
    assert!(matches!(
        distance_3d(&good, &bad_alt),
        Err(GeoError::NonFinite { field: "altitude_m", .. })
    ));
}
