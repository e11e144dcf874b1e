use web_sys::CanvasRenderingContext2d;

use storemap_core::color::{block_fill, block_stroke, face_color, BOUNDARY_STROKE, HIGHLIGHT_STROKE};

use crate::canvas::{set_fill_style, set_stroke_style};
use crate::state::State;

/// Shopping-marker radius in world units.
pub const MARKER_RADIUS: f64 = 5.0;

/// Repaint the whole scene from the session. No partial redraws: the scene
/// is small enough that one full pass per event keeps highlighting trivial.
pub fn draw(state: &State) {
    let ctx = &state.ctx;
    let width = state.canvas.width() as f64;
    let height = state.canvas.height() as f64;
    let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, width, height);

    let Some(layout) = state.session.layout() else {
        return;
    };

    // Pan/zoom via the canvas transform; everything below draws in world
    // coordinates, matching the screen-to-world mapping used for hits.
    let view = state.session.view();
    let _ = ctx.translate(view.offset_x, view.offset_y);
    let _ = ctx.scale(view.scale, view.scale);

    // Store boundary: green outline over a white floor.
    trace_ring(ctx, &layout.store_vertices);
    set_stroke_style(ctx, BOUNDARY_STROKE);
    ctx.set_line_width(3.0);
    ctx.stroke();
    set_fill_style(ctx, "#ffffff");
    ctx.fill();

    for (i, block) in layout.polygons.iter().enumerate() {
        trace_ring(ctx, &block.polygon_vertices);
        set_fill_style(ctx, block_fill(i));
        ctx.fill();
        set_stroke_style(ctx, block_stroke(i));
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    if let Some(face) = state.session.hovered_face() {
        ctx.begin_path();
        ctx.move_to(face.start.x, face.start.y);
        ctx.line_to(face.end.x, face.end.y);
        set_stroke_style(ctx, HIGHLIGHT_STROKE);
        ctx.set_line_width(4.0);
        ctx.stroke();
    }

    let total = state.session.faces().len();
    for entry in state.session.shopping().entries() {
        // Markers take the hue of the face their item belongs to.
        let Some(index) = state.session.face_index(&entry.face_id) else {
            continue;
        };
        ctx.begin_path();
        let _ = ctx.arc(
            entry.marker.x,
            entry.marker.y,
            MARKER_RADIUS,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        set_fill_style(ctx, &face_color(index, total));
        ctx.fill();
    }
}

fn trace_ring(ctx: &CanvasRenderingContext2d, vertices: &[[f64; 2]]) {
    ctx.begin_path();
    let Some(first) = vertices.first() else {
        return;
    };
    ctx.move_to(first[0], first[1]);
    for v in &vertices[1..] {
        ctx.line_to(v[0], v[1]);
    }
    ctx.line_to(first[0], first[1]);
}
