//! The mesh store: append-only vertices and triangles.

use crate::frame::SurfaceVertex;

/// A triangle stores its three surface vertices by value, not by index,
/// so that each can later emit its own centroid/normal/area without any
/// lifetime coupling to the vertex list.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub v0: SurfaceVertex,
    pub v1: SurfaceVertex,
    pub v2: SurfaceVertex,
}

/// The growing mesh: every projected surface vertex ever produced, and
/// every emitted triangle, plus the finalized N×16 output rows once
/// [`crate::driver::discretize`] has run the finalization pass.
///
/// Nothing is ever removed from `vertices` or `triangles` once pushed.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<SurfaceVertex>,
    pub triangles: Vec<Triangle>,
    pub rows: Vec<[f64; 16]>,
    /// Number of projections (vertex or centroid) that hit the
    /// non-convergence warning threshold. Diagnostic only.
    pub non_convergent_projections: usize,
}

impl Mesh {
    pub fn new() -> Self {
        Mesh::default()
    }

    pub fn push_vertex(&mut self, v: SurfaceVertex) {
        self.vertices.push(v);
    }

    pub fn push_triangle(&mut self, t: Triangle) {
        self.triangles.push(t);
    }

    /// The dense N×16 row matrix, one row per triangle in emission
    /// order.
    pub fn to_row_matrix(&self) -> &[[f64; 16]] {
        &self.rows
    }
}
