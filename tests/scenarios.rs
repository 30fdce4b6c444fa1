//! Literal input/output scenarios from the testable-properties section:
//! each of these is a named behavior the marching triangulator must
//! reproduce exactly.

use marching_front::{discretize, DiscretizeError};

#[test]
fn sphere_default_density_covers_expected_area() {
    let mesh = discretize(0.1, 0, "Sphere", &[1.0]).unwrap();
    assert!(mesh.triangles.len() >= 800, "{}", mesh.triangles.len());

    let total_area: f64 = mesh.rows.iter().map(|row| row[3]).sum();
    assert!((12.0..=13.0).contains(&total_area), "{total_area}");

    for row in &mesh.rows {
        let centroid_norm = (row[0] * row[0] + row[1] * row[1] + row[2] * row[2]).sqrt();
        assert!((0.99..=1.01).contains(&centroid_norm), "{centroid_norm}");
    }
}

#[test]
fn sphere_bounded_by_max_triangles_stops_exactly_on_budget() {
    let mesh = discretize(0.1, 50, "Sphere", &[1.0]).unwrap();
    assert_eq!(mesh.triangles.len(), 56);
}

#[test]
fn binary_roche_centroids_sit_on_the_surface() {
    let mesh = discretize(0.05, 0, "BinaryRoche", &[0.5, 0.3, 1.0, 3.5]).unwrap();
    let potential = marching_front::potential::build("BinaryRoche", &[0.5, 0.3, 1.0, 3.5]).unwrap();
    assert!(!mesh.rows.is_empty());
    for row in &mesh.rows {
        let c = nalgebra::Point3::new(row[0], row[1], row[2]);
        let phi = potential.phi(c);
        assert!(phi.is_finite());
        assert!(phi.abs() < 1e-4, "{phi}");
    }
}

#[test]
fn torus_centroids_satisfy_implicit_equation() {
    let mesh = discretize(0.1, 0, "Torus", &[1.0, 0.3]).unwrap();
    assert!(!mesh.rows.is_empty());
    for row in &mesh.rows {
        let (x, y, z) = (row[0], row[1], row[2]);
        let value = ((x * x + y * y).sqrt() - 1.0).powi(2) + z * z;
        assert!((value - 0.09).abs() < 1e-3, "{value}");
    }
}

#[test]
fn unknown_potential_name_fails() {
    let err = discretize(0.1, 0, "UnknownPot", &[1.0]).unwrap_err();
    assert_eq!(
        err,
        DiscretizeError::UnknownPotential {
            name: "UnknownPot".to_string()
        }
    );
}

#[test]
fn wrong_sphere_arity_fails() {
    let err = discretize(0.1, 0, "Sphere", &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, DiscretizeError::BadArity { .. }));
}
