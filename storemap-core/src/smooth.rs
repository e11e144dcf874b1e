use crate::layout::StoreLayout;

/// Consecutive vertices closer than this collapse into the first one.
pub const MERGE_THRESHOLD: f64 = 10.0;
/// Neighbor coordinates closer than this snap to a shared axis value.
pub const ALIGN_THRESHOLD: f64 = 5.0;

/// Clean up a traced layout: drop near-duplicate vertices, then square up
/// nearly axis-aligned edges. Applied to the boundary and every block.
pub fn smoothen_layout(layout: &StoreLayout, merge: f64, align: f64) -> StoreLayout {
    let mut out = layout.clone();
    out.store_vertices = smoothen_polygon(&layout.store_vertices, merge, align);
    for block in &mut out.polygons {
        block.polygon_vertices = smoothen_polygon(&block.polygon_vertices, merge, align);
    }
    out
}

pub fn smoothen_polygon(vertices: &[[f64; 2]], merge: f64, align: f64) -> Vec<[f64; 2]> {
    if vertices.is_empty() {
        return Vec::new();
    }

    // First pass: merge runs of close points, keeping the first of each run.
    let mut kept: Vec<[f64; 2]> = vec![vertices[0]];
    for v in &vertices[1..] {
        let last = kept[kept.len() - 1];
        let dx = v[0] - last[0];
        let dy = v[1] - last[1];
        if (dx * dx + dy * dy).sqrt() >= merge {
            kept.push(*v);
        }
    }

    // Second pass: snap nearly aligned coordinates of ring neighbors to
    // their halved sum, floored to whole pixels. Later vertices see the
    // already-snapped values of earlier ones.
    let n = kept.len();
    for i in 0..n {
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        align_pair(&mut kept, i, prev, align);
        align_pair(&mut kept, i, next, align);
    }
    kept
}

fn align_pair(vs: &mut [[f64; 2]], i: usize, j: usize, threshold: f64) {
    let (a, b) = (vs[i], vs[j]);
    if (a[0] - b[0]).abs() < threshold {
        let x = ((a[0] + b[0]) / 2.0).floor();
        vs[i][0] = x;
        vs[j][0] = x;
    } else if (a[1] - b[1]).abs() < threshold {
        let y = ((a[1] + b[1]) / 2.0).floor();
        vs[i][1] = y;
        vs[j][1] = y;
    }
}
