use thiserror::Error;

/// Argument-validation errors for [`crate::discretize`].
///
/// Numerical non-convergence of the projection operator is
/// deliberately *not* a variant here: it is non-fatal and is absorbed
/// locally as a `log::warn!` plus a running count on [`crate::Mesh`],
/// never surfaced as an `Err`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiscretizeError {
    /// Fewer than three positional arguments (delta, max_triangles,
    /// potential name) were supplied before the potential-specific tail.
    #[error(
        "not enough parameters: discretize requires at least delta, max_triangles, and a potential name"
    )]
    NotEnoughParameters,

    /// The requested potential name is not in the registry.
    #[error("unknown potential `{name}`")]
    UnknownPotential { name: String },

    /// The parameter count did not match any arity the named potential accepts.
    #[error("bad arity for `{name}`: expected one of {expected:?} parameters, got {got}")]
    BadArity {
        name: String,
        expected: &'static [usize],
        got: usize,
    },
}
