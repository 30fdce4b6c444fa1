//! The active front: a circular sequence of surface vertices supporting
//! replace-with-sublist.

use crate::frame::SurfaceVertex;

/// The ordered, cyclic boundary between tessellated and untessellated
/// surface. A contiguous `Vec` with `Vec::splice` for `drop_and_splice`
/// is plenty for front sizes in the thousands, and it keeps the
/// untouched elements' indices before the splice point stable.
#[derive(Debug, Clone, Default)]
pub struct Front {
    vertices: Vec<SurfaceVertex>,
}

impl Front {
    pub fn new() -> Self {
        Front {
            vertices: Vec::new(),
        }
    }

    pub fn from_vec(vertices: Vec<SurfaceVertex>) -> Self {
        Front { vertices }
    }

    pub fn append(&mut self, v: SurfaceVertex) {
        self.vertices.push(v);
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, i: usize) -> &SurfaceVertex {
        &self.vertices[i]
    }

    pub fn predecessor(&self, i: usize) -> usize {
        let n = self.size();
        (i + n - 1) % n
    }

    pub fn successor(&self, i: usize) -> usize {
        (i + 1) % self.size()
    }

    /// Replace the single element at `idx` with the ordered contents of
    /// `segment`. New size is `old size - 1 + segment.len()`.
    pub fn drop_and_splice(&mut self, idx: usize, segment: Vec<SurfaceVertex>) {
        self.vertices.splice(idx..idx + 1, segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    fn dummy(x: f64) -> SurfaceVertex {
        SurfaceVertex::new(Point3::new(x, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn modular_neighbors() {
        let front = Front::from_vec(vec![dummy(0.0), dummy(1.0), dummy(2.0)]);
        assert_eq!(front.predecessor(0), 2);
        assert_eq!(front.successor(2), 0);
        assert_eq!(front.predecessor(1), 0);
        assert_eq!(front.successor(1), 2);
    }

    #[test]
    fn splice_preserves_order_and_earlier_indices() {
        let mut front = Front::from_vec(vec![dummy(0.0), dummy(1.0), dummy(2.0), dummy(3.0)]);
        front.drop_and_splice(1, vec![dummy(10.0), dummy(11.0)]);
        assert_eq!(front.size(), 5);
        assert_eq!(front.get(0).r.x, 0.0);
        assert_eq!(front.get(1).r.x, 10.0);
        assert_eq!(front.get(2).r.x, 11.0);
        assert_eq!(front.get(3).r.x, 2.0);
        assert_eq!(front.get(4).r.x, 3.0);
    }

    #[test]
    fn splice_to_empty_segment_shrinks_front() {
        let mut front = Front::from_vec(vec![dummy(0.0), dummy(1.0), dummy(2.0)]);
        front.drop_and_splice(1, Vec::new());
        assert_eq!(front.size(), 2);
        assert_eq!(front.get(0).r.x, 0.0);
        assert_eq!(front.get(1).r.x, 2.0);
    }
}
