//! The triangle finalizer: per-triangle centroid projection, area, and
//! surface normal, emitted as output rows.

use rayon::prelude::*;

use crate::mesh::Triangle;
use crate::potential::PotentialKind;
use crate::projection;

/// Finalize every triangle into its output row. Runs in parallel over
/// triangles — finalization is a pure per-triangle map with no
/// cross-triangle state, and `rayon`'s indexed parallel iterators
/// preserve input order, so the returned rows stay in triangle-emission
/// order.
pub fn finalize_triangles(
    triangles: &[Triangle],
    potential: &PotentialKind,
) -> (Vec<[f64; 16]>, usize) {
    let results: Vec<([f64; 16], bool)> = triangles
        .par_iter()
        .map(|triangle| finalize_one(triangle, potential))
        .collect();

    let mut rows = Vec::with_capacity(results.len());
    let mut non_convergent = 0usize;
    for (row, warned) in results {
        rows.push(row);
        if warned {
            non_convergent += 1;
        }
    }
    (rows, non_convergent)
}

fn finalize_one(triangle: &Triangle, potential: &PotentialKind) -> ([f64; 16], bool) {
    let centroid_ambient = nalgebra::Point3::from(
        (triangle.v0.r.coords + triangle.v1.r.coords + triangle.v2.r.coords) / 3.0,
    );
    let projected = projection::project(centroid_ambient, potential);
    let c = projected.vertex.r;
    let n = projected.vertex.n;

    let s1 = (triangle.v0.r - triangle.v1.r).norm();
    let s2 = (triangle.v0.r - triangle.v2.r).norm();
    let s3 = (triangle.v2.r - triangle.v1.r).norm();
    let s = (s1 + s2 + s3) / 2.0;
    let area = (s * (s - s1) * (s - s2) * (s - s3)).max(0.0).sqrt();

    let row = [
        c.x,
        c.y,
        c.z,
        area,
        triangle.v0.r.x,
        triangle.v0.r.y,
        triangle.v0.r.z,
        triangle.v1.r.x,
        triangle.v1.r.y,
        triangle.v1.r.z,
        triangle.v2.r.x,
        triangle.v2.r.y,
        triangle.v2.r.z,
        n.x,
        n.y,
        n.z,
    ];
    (row, projected.non_convergent)
}
