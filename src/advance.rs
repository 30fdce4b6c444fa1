//! The front advancer: the marching loop itself. This is the
//! algorithmic core of the crate — everything else exists to support
//! this one loop.

use std::f64::consts::{PI, TAU};

use crate::front::Front;
use crate::mesh::{Mesh, Triangle};
use crate::potential::PotentialKind;
use crate::projection;

/// The minimum margin by which a candidate angle must beat the running
/// minimum to replace it. Preserved exactly: a different tie-break
/// yields a different mesh.
const ARGMIN_EPSILON: f64 = 1e-6;

/// Below this angle (radians) a wedge subdivision is considered too
/// narrow and gets one fewer triangle.
const NARROW_WEDGE_THRESHOLD: f64 = 0.8;

fn normalize_angle(mut a: f64) -> f64 {
    a %= TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}

/// Run the marching loop to exhaustion (or until `max_triangles` new
/// triangles have been emitted), appending triangles to `mesh` and
/// tallying non-convergent projections. `front` is consumed — it is the
/// driver's exclusive, transient front buffer.
///
/// `max_triangles <= 0` means unbounded. Otherwise the budget counts
/// triangles, not wedges: a single wedge can close into more than one
/// triangle, so the cap is enforced triangle-by-triangle inside
/// [`advance_one_step`] rather than once per loop iteration.
pub fn run(mut front: Front, potential: &PotentialKind, delta: f64, max_triangles: i32, mesh: &mut Mesh) {
    let budget = (max_triangles > 0).then(|| mesh.triangles.len() + max_triangles as usize);
    while !front.is_empty() && budget.map_or(true, |b| mesh.triangles.len() < b) {
        advance_one_step(&mut front, potential, delta, mesh, budget);
    }
}

fn advance_one_step(front: &mut Front, potential: &PotentialKind, delta: f64, mesh: &mut Mesh, budget: Option<usize>) {
    let n = front.size();

    // Interior-angle vector, one entry per front vertex.
    let mut omega = vec![0.0f64; n];
    for i in 0..n {
        let pivot = front.get(i);
        let a_world = front.get(front.predecessor(i)).r - pivot.r;
        let b_world = front.get(front.successor(i)).r - pivot.r;
        let a_local = pivot.cart_to_local(a_world);
        let b_local = pivot.cart_to_local(b_world);
        // local components are (n, t1, t2); angle lives in the (t1, t2) plane.
        let phi_a = a_local.z.atan2(a_local.y);
        let phi_b = b_local.z.atan2(b_local.y);
        omega[i] = normalize_angle(phi_b - phi_a);
    }

    // Pivot selection with the ε tie-break.
    let mut k = 0usize;
    let mut best = omega[0];
    for (i, &w) in omega.iter().enumerate().skip(1) {
        if w < best - ARGMIN_EPSILON {
            best = w;
            k = i;
        }
    }
    let alpha = omega[k];

    // Wedge division.
    let mut n_t = (alpha * 3.0 / PI).floor() as i64 + 1;
    let mut delta_omega = alpha / n_t as f64;
    if delta_omega < NARROW_WEDGE_THRESHOLD && n_t > 1 {
        n_t -= 1;
        delta_omega = alpha / n_t as f64;
    }

    // Fan construction.
    let pivot = front.get(k).clone();
    let v_minus = front.get(front.predecessor(k)).clone();
    let v_plus = front.get(front.successor(k)).clone();

    // The offset is rescaled and lifted using only its (t1, t2)
    // components; any n-component of v_minus.r - pivot.r is dropped.
    let r_off_local = pivot.cart_to_local(v_minus.r - pivot.r);
    let (u, v) = (r_off_local.y, r_off_local.z);

    let mut fan_vertices = Vec::with_capacity((n_t - 1).max(0) as usize);
    let mut prev = v_minus.clone();
    for i in 1..n_t {
        if budget.map_or(false, |b| mesh.triangles.len() >= b) {
            return;
        }
        // Each q_i rotates the *original* pivot-to-v_minus offset by
        // i·δω, not the previous fan vertex's offset.
        let theta = i as f64 * delta_omega;
        let (cos_t, sin_t) = (theta.cos(), theta.sin());
        let (ru, rv) = (u * cos_t - v * sin_t, u * sin_t + v * cos_t);
        let tangent_len = (ru * ru + rv * rv).sqrt();
        let (su, sv) = if tangent_len > 1e-15 {
            (ru * delta / tangent_len, rv * delta / tangent_len)
        } else {
            (ru, rv)
        };
        let offset_world = pivot.local_to_cart(nalgebra::Vector3::new(0.0, su, sv));
        let ambient = pivot.r + offset_world;
        let projected = projection::project(ambient, potential);
        if projected.non_convergent {
            mesh.non_convergent_projections += 1;
        }
        let q = projected.vertex;
        mesh.push_vertex(q.clone());
        mesh.push_triangle(Triangle {
            v0: prev.clone(),
            v1: q.clone(),
            v2: pivot.clone(),
        });
        prev = q.clone();
        fan_vertices.push(q);
    }

    if budget.map_or(false, |b| mesh.triangles.len() >= b) {
        return;
    }

    // Closing triangle.
    if n_t == 1 {
        mesh.push_triangle(Triangle {
            v0: v_minus.clone(),
            v1: v_plus.clone(),
            v2: pivot.clone(),
        });
    } else {
        mesh.push_triangle(Triangle {
            v0: prev.clone(),
            v1: v_plus.clone(),
            v2: pivot.clone(),
        });
    }

    // Splice the new arc into the front.
    front.drop_and_splice(k, fan_vertices);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::SurfaceVertex;
    use crate::potential;
    use nalgebra::{Point3, Vector3};

    fn hexagon_around(center: Point3<f64>, radius: f64) -> Front {
        let up = Vector3::new(0.0, 0.0, 1.0);
        let pivot = SurfaceVertex::new(center, up);
        let mut ring = Vec::with_capacity(6);
        for i in 0..6 {
            let theta = i as f64 * PI / 3.0;
            let local = nalgebra::Vector3::new(0.0, radius * theta.cos(), radius * theta.sin());
            let world = pivot.r + pivot.local_to_cart(local);
            ring.push(SurfaceVertex::new(world, up));
        }
        Front::from_vec(ring)
    }

    #[test]
    fn single_step_respects_monotonicity_invariant() {
        let sphere = potential::build("Sphere", &[1.0]).unwrap();
        let mut front = hexagon_around(Point3::new(0.0, 0.0, 1.0), 0.1);
        let mut mesh = Mesh::new();
        let size_before = front.size();
        advance_one_step(&mut front, &sphere, 0.1, &mut mesh, None);
        let triangles_emitted = mesh.triangles.len();
        let size_after = front.size();
        // |P| changes by n_t - 2, and exactly one vertex (the pivot) is
        // consumed while n_t - 1 new ones are spliced in.
        assert_eq!(
            size_after as i64 - size_before as i64,
            triangles_emitted as i64 - 2
        );
    }

    #[test]
    fn argmin_tie_break_prefers_first_seen() {
        let omega = [0.5, 0.5 + 1e-7, 0.5 - 2e-6];
        let mut k = 0usize;
        let mut best = omega[0];
        for (i, &w) in omega.iter().enumerate().skip(1) {
            if w < best - ARGMIN_EPSILON {
                best = w;
                k = i;
            }
        }
        // index 2 beats index 0 by > 1e-6, so it should win even though
        // index 1 is nominally smaller than index 0's neighborhood noise.
        assert_eq!(k, 2);
    }

    #[test]
    fn run_stops_exactly_on_triangle_budget() {
        let sphere = potential::build("Sphere", &[1.0]).unwrap();
        let front = hexagon_around(Point3::new(0.0, 0.0, 1.0), 0.1);
        let mut mesh = Mesh::new();
        // Seed the 6 triangles a real driver run would already have
        // pushed before handing the ring off to `run`.
        for _ in 0..6 {
            let a = SurfaceVertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
            let b = SurfaceVertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
            let c = SurfaceVertex::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 1.0));
            mesh.push_triangle(Triangle { v0: a, v1: b, v2: c });
        }
        run(front, &sphere, 0.1, 50, &mut mesh);
        assert_eq!(mesh.triangles.len(), 56);
    }
}
