use crate::color::{block_fill, block_stroke, face_color, BOUNDARY_STROKE};
use crate::face::generate_faces;
use crate::layout::StoreLayout;

/// Margin in pixels around the plan drawing.
const MARGIN_PX: f64 = 20.0;

/// Build a standalone SVG plan of the layout: boundary and blocks in the
/// renderer palette, plus every face stroked in its assigned color and
/// labeled with its id so CSV authors can match ids to edges.
///
/// Returns the document and its pixel dimensions.
pub fn build_plan_svg(layout: &StoreLayout, scale: f64) -> (String, u32, u32) {
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    let rings = std::iter::once(&layout.store_vertices)
        .chain(layout.polygons.iter().map(|b| &b.polygon_vertices));
    for ring in rings {
        for v in ring {
            minx = minx.min(v[0]);
            miny = miny.min(v[1]);
            maxx = maxx.max(v[0]);
            maxy = maxy.max(v[1]);
        }
    }
    if !maxx.is_finite() {
        minx = 0.0;
        miny = 0.0;
        maxx = 0.0;
        maxy = 0.0;
    }

    let w_px = ((maxx - minx) * scale + 2.0 * MARGIN_PX).ceil() as u32;
    let h_px = ((maxy - miny) * scale + 2.0 * MARGIN_PX).ceil() as u32;
    // Layout coordinates are already y-down, same as SVG: no flip.
    let to_px = |v: [f64; 2]| {
        (
            (v[0] - minx) * scale + MARGIN_PX,
            (v[1] - miny) * scale + MARGIN_PX,
        )
    };

    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" font-family=\"sans-serif\" font-size=\"10\">\n",
        w_px, h_px, w_px, h_px
    ));
    s.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    s.push_str(&ring_path(
        &layout.store_vertices,
        &to_px,
        "#ffffff",
        BOUNDARY_STROKE,
        3.0,
    ));
    for (i, block) in layout.polygons.iter().enumerate() {
        s.push_str(&ring_path(
            &block.polygon_vertices,
            &to_px,
            block_fill(i),
            block_stroke(i),
            2.0,
        ));
    }

    let faces = generate_faces(layout);
    let total = faces.len();
    for (i, face) in faces.iter().enumerate() {
        let (x1, y1) = to_px([face.start.x, face.start.y]);
        let (x2, y2) = to_px([face.end.x, face.end.y]);
        s.push_str(&format!(
            "<path d=\"M {:.2} {:.2} L {:.2} {:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            x1,
            y1,
            x2,
            y2,
            face_color(i, total)
        ));
        let m = face.midpoint();
        let (mx, my) = to_px([m.x, m.y]);
        s.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"#333\">{}</text>\n",
            mx + 2.0,
            my - 2.0,
            face.face_id
        ));
    }

    s.push_str("</svg>\n");
    (s, w_px, h_px)
}

fn ring_path(
    vertices: &[[f64; 2]],
    to_px: &impl Fn([f64; 2]) -> (f64, f64),
    fill: &str,
    stroke: &str,
    width: f64,
) -> String {
    if vertices.is_empty() {
        return String::new();
    }
    let (x0, y0) = to_px(vertices[0]);
    let mut out = format!("<path d=\"M {:.2} {:.2}", x0, y0);
    for v in &vertices[1..] {
        let (x, y) = to_px(*v);
        out.push_str(&format!(" L {:.2} {:.2}", x, y));
    }
    out.push_str(&format!(
        " Z\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
        fill, stroke, width
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BlockPolygon;

    fn layout() -> StoreLayout {
        StoreLayout {
            store_vertices: vec![[0.0, 0.0], [100.0, 0.0], [100.0, 80.0], [0.0, 80.0]],
            polygons: vec![BlockPolygon {
                polygon_vertices: vec![[10.0, 10.0], [30.0, 10.0], [30.0, 30.0]],
            }],
            store_id: None,
            floor_id: None,
        }
    }

    #[test]
    fn dimensions_cover_bounds_plus_margin() {
        let (_, w, h) = build_plan_svg(&layout(), 1.0);
        assert_eq!(w, 140);
        assert_eq!(h, 120);
        let (_, w2, h2) = build_plan_svg(&layout(), 2.0);
        assert_eq!(w2, 240);
        assert_eq!(h2, 200);
    }

    #[test]
    fn emits_one_ring_per_polygon_and_one_line_per_face() {
        let (svg, _, _) = build_plan_svg(&layout(), 1.0);
        // Two closed rings: boundary + one block.
        assert_eq!(svg.matches(" Z\"").count(), 2);
        // One open path per face (4 boundary + 3 block edges).
        assert_eq!(svg.matches("<path d=\"M").count(), 2 + 7);
        assert_eq!(svg.matches("<text").count(), 7);
    }

    #[test]
    fn labels_every_face_id() {
        let (svg, _, _) = build_plan_svg(&layout(), 1.0);
        for id in ["S1", "S4", "B1F1", "B1F3"] {
            assert!(svg.contains(&format!(">{}</text>", id)), "missing {id}");
        }
    }

    #[test]
    fn uses_the_renderer_palette() {
        let (svg, _, _) = build_plan_svg(&layout(), 1.0);
        assert!(svg.contains(BOUNDARY_STROKE));
        assert!(svg.contains(block_stroke(0)));
        assert!(svg.contains("hsl(0, 70%, 50%)"));
    }

    #[test]
    fn empty_layout_still_produces_a_document() {
        let empty = StoreLayout::default();
        let (svg, w, h) = build_plan_svg(&empty, 1.0);
        assert_eq!(w, 40);
        assert_eq!(h, 40);
        assert!(svg.ends_with("</svg>\n"));
    }
}
