use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

// Non-deprecated canvas style setters via property assignment.
fn set_style_prop(ctx: &CanvasRenderingContext2d, prop: &str, value: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str(prop),
        &JsValue::from_str(value),
    );
}

pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    set_style_prop(ctx, "fillStyle", color);
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    set_style_prop(ctx, "strokeStyle", color);
}
