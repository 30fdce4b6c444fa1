//! The driver: seed, initial hexagonal fan, termination policy, and the
//! `SEEDING → RINGING → MARCHING → FINALIZING → DONE` state machine.

use std::f64::consts::FRAC_PI_3;

use nalgebra::{Point3, Vector3};

use crate::advance;
use crate::finalize;
use crate::front::Front;
use crate::mesh::{Mesh, Triangle};
use crate::potential::PotentialKind;
use crate::projection;

/// A deliberate small off-origin displacement so the seed never lands on
/// a potential singularity (e.g. the origin of `Sphere` or either point
/// mass of a Roche potential).
fn seed_point() -> Point3<f64> {
    Point3::new(-2e-5, 0.0, 0.0)
}

/// Run the whole discretization: seed, ring, march, finalize.
pub fn discretize(delta: f64, max_triangles: i32, potential: PotentialKind) -> Mesh {
    let mut mesh = Mesh::new();

    // SEEDING
    log::debug!("driver: SEEDING");
    let seeded = projection::project(seed_point(), &potential);
    if seeded.non_convergent {
        mesh.non_convergent_projections += 1;
    }
    let p0 = seeded.vertex;
    mesh.push_vertex(p0.clone());

    // RINGING: hexagonal fan of six points at distance delta in p0's
    // tangent plane, at angles k*pi/3, each projected onto Phi=0.
    log::debug!("driver: RINGING");
    let mut ring = Vec::with_capacity(6);
    for k in 0..6 {
        let theta = k as f64 * FRAC_PI_3;
        let offset_local = Vector3::new(0.0, delta * theta.cos(), delta * theta.sin());
        let offset_world = p0.local_to_cart(offset_local);
        let projected = projection::project(p0.r + offset_world, &potential);
        if projected.non_convergent {
            mesh.non_convergent_projections += 1;
        }
        mesh.push_vertex(projected.vertex.clone());
        ring.push(projected.vertex);
    }
    for k in 0..6 {
        let next = (k + 1) % 6;
        mesh.push_triangle(Triangle {
            v0: p0.clone(),
            v1: ring[k].clone(),
            v2: ring[next].clone(),
        });
    }

    // MARCHING
    log::debug!("driver: MARCHING (delta={delta}, max_triangles={max_triangles})");
    let front = Front::from_vec(ring);
    advance::run(front, &potential, delta, max_triangles, &mut mesh);

    // FINALIZING
    log::debug!(
        "driver: FINALIZING ({} triangles)",
        mesh.triangles.len()
    );
    let (rows, finalize_non_convergent) = finalize::finalize_triangles(&mesh.triangles, &potential);
    mesh.rows = rows;
    mesh.non_convergent_projections += finalize_non_convergent;

    log::info!(
        "driver: DONE ({} triangles, {} non-convergent projections)",
        mesh.triangles.len(),
        mesh.non_convergent_projections
    );
    mesh
}
