//! The local tangent frame and the surface vertex it is attached to.

use nalgebra::{Matrix3, Point3, Vector3};

/// A projected point on Φ=0 together with its orthonormal tangent frame.
///
/// Local coordinates are expressed in the basis order `(n, t1, t2)`: the
/// `x` component of a local vector is its component along the normal, `y`
/// along `t1`, `z` along `t2`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceVertex {
    pub r: Point3<f64>,
    pub n: Vector3<f64>,
    pub t1: Vector3<f64>,
    pub t2: Vector3<f64>,
    frame_inv: Matrix3<f64>,
}

impl SurfaceVertex {
    /// Build a surface vertex at `r` with unit outward normal `n` (need
    /// not already be normalized). Guards the tangent construction
    /// against the z-axis degeneracy.
    pub fn new(r: Point3<f64>, n: Vector3<f64>) -> Self {
        let n = n.normalize();
        let t1 = if n.x.abs() > 0.5 || n.y.abs() > 0.5 {
            Vector3::new(n.y, -n.x, 0.0) / (n.x * n.x + n.y * n.y).sqrt()
        } else {
            Vector3::new(-n.z, 0.0, n.x) / (n.x * n.x + n.z * n.z).sqrt()
        };
        let t2 = n.cross(&t1);
        let frame = Matrix3::from_columns(&[n, t1, t2]);
        let frame_inv = frame
            .try_inverse()
            .expect("orthonormal (n, t1, t2) frame is always invertible");
        SurfaceVertex {
            r,
            n,
            t1,
            t2,
            frame_inv,
        }
    }

    /// World-space vector to local `(n, t1, t2)` coordinates. O(1): uses
    /// the cached inverse.
    pub fn cart_to_local(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.frame_inv * v
    }

    /// Local `(n, t1, t2)` coordinates back to a world-space vector.
    pub fn local_to_cart(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.n * v.x + self.t1 * v.y + self.t2 * v.z
    }
}
