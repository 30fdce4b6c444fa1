//! The projection operator: snap an ambient point onto Φ=0 by gradient
//! descent.

use nalgebra::Point3;

use crate::frame::SurfaceVertex;
use crate::potential::PotentialKind;

/// Hard iteration cap. Preserved exactly as specified, with a deliberate
/// safety margin below [`PROJECTION_WARN_ITERS`].
pub const PROJECTION_MAX_ITERS: u32 = 100;
/// Iteration count at or above which non-convergence is logged.
pub const PROJECTION_WARN_ITERS: u32 = 90;

const CONVERGENCE_TOL_SQ: f64 = 1e-12;

/// The outcome of one projection.
pub struct Projected {
    pub vertex: SurfaceVertex,
    pub iterations: u32,
    /// True if the iteration count reached [`PROJECTION_WARN_ITERS`]
    /// without converging earlier — a non-fatal diagnostic, not an error.
    pub non_convergent: bool,
}

/// Project `r0` onto Φ=0 for `potential` via
/// `r_{k+1} = r_k - Φ(r_k)·∇Φ(r_k) / ‖∇Φ(r_k)‖²`.
pub fn project(r0: Point3<f64>, potential: &PotentialKind) -> Projected {
    let mut r = r0;
    let mut iterations = 0u32;
    loop {
        iterations += 1;
        let phi = potential.phi(r);
        let grad = potential.grad(r);
        let grad_norm_sq = grad.norm_squared();
        if grad_norm_sq == 0.0 {
            // No descent direction available; this point can never be
            // nudged toward Phi=0, so it is non-convergent by definition
            // rather than a (false) immediate fixed point.
            iterations = PROJECTION_MAX_ITERS;
            break;
        }
        let next = r - grad * (phi / grad_norm_sq);
        let step_sq = (next - r).norm_squared();
        r = next;
        if step_sq < CONVERGENCE_TOL_SQ || iterations >= PROJECTION_MAX_ITERS {
            break;
        }
    }
    let non_convergent = iterations >= PROJECTION_WARN_ITERS;
    if non_convergent {
        log::warn!(
            "projection did not converge within {} iterations (reached {})",
            PROJECTION_WARN_ITERS,
            iterations
        );
    }
    let n = potential.grad(r);
    Projected {
        vertex: SurfaceVertex::new(r, n),
        iterations,
        non_convergent,
    }
}
