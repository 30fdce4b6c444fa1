//! Advancing-front marching triangulation of implicit equipotential
//! surfaces.
//!
//! Discretizes the level set {r ∈ ℝ³ : Φ(r) = 0} of a scalar potential
//! into a triangular mesh of approximately uniform edge length `delta`,
//! for tessellating astrophysical equipotential surfaces (Roche lobes,
//! rotating stars, tori, spheres) ahead of surface-integrated radiative
//! transfer.
//!
//! The entry point is [`discretize`]; see [`potential`] for the closed
//! family of supported surfaces.

pub mod advance;
pub mod args;
pub mod driver;
pub mod error;
pub mod finalize;
pub mod frame;
pub mod front;
pub mod mesh;
pub mod potential;
pub mod projection;

pub use error::DiscretizeError;
pub use frame::SurfaceVertex;
pub use mesh::{Mesh, Triangle};
pub use potential::PotentialKind;

/// Discretize the Φ=0 surface of `potential` (looked up by name, bound
/// to `params`) into a triangle mesh with target edge length `delta`.
///
/// `max_triangles <= 0` means unbounded — the marching loop runs until
/// the front closes.
///
/// # Errors
///
/// Returns [`DiscretizeError::UnknownPotential`] if `potential` is not in
/// the registry, or [`DiscretizeError::BadArity`] if `params.len()`
/// doesn't match one of the potential's declared arities. On error, no
/// mesh is produced.
pub fn discretize(
    delta: f64,
    max_triangles: i32,
    potential: &str,
    params: &[f64],
) -> Result<Mesh, DiscretizeError> {
    let kind = potential::build(potential, params)?;
    log::debug!(
        "discretize: delta={delta}, max_triangles={max_triangles}, potential={potential}, params={params:?}"
    );
    Ok(driver::discretize(delta, max_triangles, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_potential_produces_no_mesh() {
        let err = discretize(0.1, 0, "NotAPotential", &[1.0]).unwrap_err();
        assert_eq!(
            err,
            DiscretizeError::UnknownPotential {
                name: "NotAPotential".to_string()
            }
        );
    }

    #[test]
    fn bad_arity_is_reported() {
        let err = discretize(0.1, 0, "Sphere", &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, DiscretizeError::BadArity { .. }));
    }
}
