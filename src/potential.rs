//! The closed family of potentials and their analytic gradients.
//!
//! Dispatch is a `match` over a closed enum, never a `dyn` trait object:
//! the projection operator's inner loop calls `phi`/`grad` millions of
//! times per mesh and monomorphized dispatch keeps that call site a
//! direct jump rather than a vtable indirection.

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};
use once_cell::sync::Lazy;

use crate::error::DiscretizeError;

/// A bound instance of one of the named potentials, holding its own
/// parameter vector. Owning the parameters inline means the descriptor
/// and its parameters share one lifetime by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PotentialKind {
    Sphere {
        radius: f64,
    },
    BinaryRoche {
        d: f64,
        q: f64,
        f: f64,
        omega0: f64,
    },
    MisalignedBinaryRoche {
        d: f64,
        q: f64,
        f: f64,
        theta: f64,
        phi: f64,
        omega0: f64,
    },
    RotateRoche {
        omega_scale: f64,
        r0: f64,
    },
    Torus {
        major: f64,
        minor: f64,
    },
    Heart,
}

impl PotentialKind {
    /// Φ(r).
    pub fn phi(&self, r: Point3<f64>) -> f64 {
        match *self {
            PotentialKind::Sphere { radius } => {
                r.x * r.x + r.y * r.y + r.z * r.z - radius * radius
            }
            PotentialKind::Torus { major, minor } => {
                let rho = (r.x * r.x + r.y * r.y).sqrt();
                (rho - major) * (rho - major) + r.z * r.z - minor * minor
            }
            PotentialKind::RotateRoche { omega_scale, r0 } => {
                let rho = r.coords.norm();
                let rho_xy_sq = r.x * r.x + r.y * r.y;
                2.0 / rho + omega_scale * omega_scale * rho_xy_sq
                    - 2.0 / r0
                    - omega_scale * omega_scale * r0 * r0
            }
            PotentialKind::BinaryRoche { d, q, f, omega0 } => {
                binary_roche_omega(r, d, q, f) - omega0
            }
            PotentialKind::MisalignedBinaryRoche {
                d,
                q,
                f,
                theta,
                phi,
                omega0,
            } => misaligned_binary_roche_omega(r, d, q, f, theta, phi) - omega0,
            PotentialKind::Heart => {
                let a = r.x * r.x + 2.25 * r.y * r.y + r.z * r.z - 1.0;
                a * a * a - r.x * r.x * r.z * r.z * r.z - 0.1125 * r.y * r.y * r.z * r.z * r.z
            }
        }
    }

    /// ∇Φ(r).
    pub fn grad(&self, r: Point3<f64>) -> Vector3<f64> {
        match *self {
            PotentialKind::Sphere { .. } => Vector3::new(2.0 * r.x, 2.0 * r.y, 2.0 * r.z),
            PotentialKind::Torus { major, .. } => {
                let rho = (r.x * r.x + r.y * r.y).sqrt();
                if rho < 1e-12 {
                    Vector3::new(0.0, 0.0, 2.0 * r.z)
                } else {
                    let c = 2.0 * (rho - major) / rho;
                    Vector3::new(c * r.x, c * r.y, 2.0 * r.z)
                }
            }
            PotentialKind::RotateRoche { omega_scale, .. } => {
                let rho = r.coords.norm();
                let rho3 = rho * rho * rho;
                if rho < 1e-12 {
                    Vector3::new(0.0, 0.0, 0.0)
                } else {
                    Vector3::new(
                        -2.0 * r.x / rho3 + 2.0 * omega_scale * omega_scale * r.x,
                        -2.0 * r.y / rho3 + 2.0 * omega_scale * omega_scale * r.y,
                        -2.0 * r.z / rho3,
                    )
                }
            }
            PotentialKind::BinaryRoche { d, q, f, .. } => binary_roche_grad(r, d, q, f),
            PotentialKind::MisalignedBinaryRoche {
                d,
                q,
                f,
                theta,
                phi,
                ..
            } => misaligned_binary_roche_grad(r, d, q, f, theta, phi),
            PotentialKind::Heart => {
                let a = r.x * r.x + 2.25 * r.y * r.y + r.z * r.z - 1.0;
                let z2 = r.z * r.z;
                Vector3::new(
                    6.0 * r.x * a * a - 2.0 * r.x * r.z * z2,
                    13.5 * r.y * a * a - 0.225 * r.y * r.z * z2,
                    6.0 * r.z * a * a - 3.0 * r.x * r.x * z2 - 0.3375 * r.y * r.y * z2,
                )
            }
        }
    }
}

/// The primary-mass distance `r1 = |r|`, secondary-mass distance
/// `r2 = |r - (d, 0, 0)|`, and `dx = r.x - d` shared by every Roche
/// variant's omega/gradient formulas.
fn binary_distances(r: Point3<f64>, d: f64) -> (f64, f64, f64) {
    let r1 = r.coords.norm();
    let dx = r.x - d;
    let r2 = (dx * dx + r.y * r.y + r.z * r.z).sqrt();
    (r1, r2, dx)
}

fn binary_roche_omega(r: Point3<f64>, d: f64, q: f64, f: f64) -> f64 {
    let (r1, r2, _) = binary_distances(r, d);
    1.0 / r1 + q * (1.0 / r2 - r.x / (d * d))
        + f * f * (1.0 + q) * (r.x * r.x + r.y * r.y) / 2.0
}

fn binary_roche_grad(r: Point3<f64>, d: f64, q: f64, f: f64) -> Vector3<f64> {
    let (r1, r2, dx) = binary_distances(r, d);
    let r1_3 = r1 * r1 * r1;
    let r2_3 = r2 * r2 * r2;
    let centrifugal = f * f * (1.0 + q);
    Vector3::new(
        -r.x / r1_3 - q * dx / r2_3 - q / (d * d) + centrifugal * r.x,
        -r.y / r1_3 - q * r.y / r2_3 + centrifugal * r.y,
        -r.z / r1_3 - q * r.z / r2_3,
    )
}

fn spin_axis(theta: f64, phi: f64) -> Vector3<f64> {
    Vector3::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    )
}

fn misaligned_binary_roche_omega(
    r: Point3<f64>,
    d: f64,
    q: f64,
    f: f64,
    theta: f64,
    phi: f64,
) -> f64 {
    let (r1, r2, _) = binary_distances(r, d);
    let axis = spin_axis(theta, phi);
    let along_axis = r.coords.dot(&axis);
    let rho_axis_sq = r.coords.norm_squared() - along_axis * along_axis;
    1.0 / r1 + q * (1.0 / r2 - r.x / (d * d)) + f * f * (1.0 + q) * rho_axis_sq / 2.0
}

fn misaligned_binary_roche_grad(
    r: Point3<f64>,
    d: f64,
    q: f64,
    f: f64,
    theta: f64,
    phi: f64,
) -> Vector3<f64> {
    let (r1, r2, dx) = binary_distances(r, d);
    let r1_3 = r1 * r1 * r1;
    let r2_3 = r2 * r2 * r2;
    let axis = spin_axis(theta, phi);
    let along_axis = r.coords.dot(&axis);
    let centrifugal = f * f * (1.0 + q);
    let base = Vector3::new(
        -r.x / r1_3 - q * dx / r2_3 - q / (d * d),
        -r.y / r1_3 - q * r.y / r2_3,
        -r.z / r1_3 - q * r.z / r2_3,
    );
    base + centrifugal * (r.coords - along_axis * axis)
}

/// Allowed parameter counts for a potential, and how to build it from a
/// validated parameter slice (optional trailing parameters default to 0).
struct Entry {
    arities: &'static [usize],
    build: fn(&[f64]) -> PotentialKind,
}

static REGISTRY: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(
        "Sphere",
        Entry {
            arities: &[1],
            build: |p| PotentialKind::Sphere { radius: p[0] },
        },
    );
    m.insert(
        "BinaryRoche",
        Entry {
            arities: &[3, 4],
            build: |p| PotentialKind::BinaryRoche {
                d: p[0],
                q: p[1],
                f: p[2],
                omega0: p.get(3).copied().unwrap_or(0.0),
            },
        },
    );
    m.insert(
        "MisalignedBinaryRoche",
        Entry {
            arities: &[5, 6],
            build: |p| PotentialKind::MisalignedBinaryRoche {
                d: p[0],
                q: p[1],
                f: p[2],
                theta: p[3],
                phi: p[4],
                omega0: p.get(5).copied().unwrap_or(0.0),
            },
        },
    );
    m.insert(
        "RotateRoche",
        Entry {
            arities: &[2],
            build: |p| PotentialKind::RotateRoche {
                omega_scale: p[0],
                r0: p[1],
            },
        },
    );
    m.insert(
        "Torus",
        Entry {
            arities: &[2],
            build: |p| PotentialKind::Torus {
                major: p[0],
                minor: p[1],
            },
        },
    );
    m.insert(
        "Heart",
        Entry {
            arities: &[0],
            build: |_p| PotentialKind::Heart,
        },
    );
    m
});

/// Look up `name` in the registry and bind `params`, validating arity.
pub fn build(name: &str, params: &[f64]) -> Result<PotentialKind, DiscretizeError> {
    let entry = REGISTRY
        .get(name)
        .ok_or_else(|| DiscretizeError::UnknownPotential {
            name: name.to_string(),
        })?;
    if !entry.arities.contains(&params.len()) {
        return Err(DiscretizeError::BadArity {
            name: name.to_string(),
            expected: entry.arities,
            got: params.len(),
        });
    }
    Ok((entry.build)(params))
}
