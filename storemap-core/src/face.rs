use serde::{Deserialize, Serialize};

use crate::geometry::{midpoint, Point};
use crate::layout::StoreLayout;

/// One labeled edge of the store boundary or an interior block.
/// Immutable once generated; the whole list is rebuilt on layout load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Face {
    pub face_id: String,
    pub start: Point,
    pub end: Point,
}

impl Face {
    /// Marker anchor for shopping-list entries added from this face.
    pub fn midpoint(&self) -> Point {
        midpoint(self.start, self.end)
    }
}

/// Turn a layout into labeled edge segments.
///
/// Boundary edges come first as `S1..SN`, then each block in array order as
/// `B<block>F<edge>`, both 1-indexed. Every polygon is closed by connecting
/// its last vertex back to the first, so an N-vertex polygon yields exactly
/// N faces. Output order only matters for color assignment.
pub fn generate_faces(layout: &StoreLayout) -> Vec<Face> {
    let mut faces = Vec::new();
    push_ring(&mut faces, &layout.store_vertices, |i| format!("S{}", i + 1));
    for (block_idx, block) in layout.polygons.iter().enumerate() {
        push_ring(&mut faces, &block.polygon_vertices, |i| {
            format!("B{}F{}", block_idx + 1, i + 1)
        });
    }
    faces
}

fn push_ring(faces: &mut Vec<Face>, vertices: &[[f64; 2]], face_id: impl Fn(usize) -> String) {
    if vertices.is_empty() {
        return;
    }
    // Close the loop by appending the first vertex.
    let mut ring = vertices.to_vec();
    ring.push(vertices[0]);
    for i in 0..ring.len() - 1 {
        faces.push(Face {
            face_id: face_id(i),
            start: ring[i].into(),
            end: ring[i + 1].into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BlockPolygon;

    fn square_layout() -> StoreLayout {
        StoreLayout {
            store_vertices: vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
            polygons: Vec::new(),
            store_id: None,
            floor_id: None,
        }
    }

    #[test]
    fn square_boundary_yields_s1_to_s4() {
        let faces = generate_faces(&square_layout());
        assert_eq!(faces.len(), 4);
        let ids: Vec<&str> = faces.iter().map(|f| f.face_id.as_str()).collect();
        assert_eq!(ids, ["S1", "S2", "S3", "S4"]);
        assert_eq!((faces[0].start.x, faces[0].start.y), (0.0, 0.0));
        assert_eq!((faces[0].end.x, faces[0].end.y), (10.0, 0.0));
        // Last face closes the loop back to the first vertex.
        assert_eq!((faces[3].start.x, faces[3].start.y), (0.0, 10.0));
        assert_eq!((faces[3].end.x, faces[3].end.y), (0.0, 0.0));
    }

    #[test]
    fn n_vertices_yield_n_faces() {
        let mut layout = square_layout();
        layout.store_vertices.push([5.0, 15.0]);
        assert_eq!(generate_faces(&layout).len(), 5);
    }

    #[test]
    fn block_faces_follow_boundary_faces() {
        let mut layout = square_layout();
        layout.polygons.push(BlockPolygon {
            polygon_vertices: vec![[2.0, 2.0], [4.0, 2.0], [4.0, 4.0]],
        });
        layout.polygons.push(BlockPolygon {
            polygon_vertices: vec![[6.0, 6.0], [8.0, 6.0], [8.0, 8.0]],
        });
        let faces = generate_faces(&layout);
        assert_eq!(faces.len(), 4 + 3 + 3);
        assert_eq!(faces[4].face_id, "B1F1");
        assert_eq!(faces[6].face_id, "B1F3");
        assert_eq!(faces[7].face_id, "B2F1");
        // Block edges close their own loop as well.
        assert_eq!((faces[6].end.x, faces[6].end.y), (2.0, 2.0));
    }

    #[test]
    fn empty_block_emits_no_faces() {
        let mut layout = square_layout();
        layout.polygons.push(BlockPolygon {
            polygon_vertices: Vec::new(),
        });
        assert_eq!(generate_faces(&layout).len(), 4);
    }

    #[test]
    fn face_midpoint_is_segment_center() {
        let faces = generate_faces(&square_layout());
        let m = faces[0].midpoint();
        assert_eq!((m.x, m.y), (5.0, 0.0));
    }
}
