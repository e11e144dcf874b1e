use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent, WheelEvent,
};

use storemap_core::layout::parse_layout;
use storemap_core::section::parse_items_csv;
use storemap_core::session::{ClickOutcome, MoveOutcome, Session};
use storemap_core::svg::build_plan_svg;

mod canvas;
mod panel;
mod render;
mod state;
mod upload;
mod utils;

use crate::render::draw;
use crate::state::State;
use crate::utils::{event_canvas_coords, get_query_param, log, save_text_as_file};

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id("mapCanvas")
        .ok_or_else(|| JsValue::from_str("canvas #mapCanvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let (canvas, ctx) = init_canvas(&document)?;

    panel::init_tooltip(&document);

    // One auto-hide callback for the tooltip timer, reused for its lifetime.
    let doc_for_hide = document.clone();
    let tooltip_hide = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        if let Some(el) = doc_for_hide.get_element_by_id("tooltip")
            && let Ok(el) = el.dyn_into::<HtmlElement>()
        {
            let _ = el.style().set_property("display", "none");
        }
    }));

    let state = Rc::new(RefCell::new(State {
        window: window.clone(),
        document,
        canvas,
        ctx,
        session: Session::new(),
        pending_layout: None,
        pending_sections: None,
        tooltip_timer: None,
        tooltip_hide: Some(tooltip_hide),
    }));

    attach_ui(state.clone())?;

    // ?sample=<name> preloads a bundled dataset; the only startup switch.
    if let Ok(search) = window.location().search()
        && let Some(name) = get_query_param(&search, "sample")
    {
        load_sample(&mut state.borrow_mut(), &name);
    }

    panel::update_status_dom(&state.borrow());
    draw(&state.borrow());
    Ok(())
}

/// Load a dataset bundled into the binary; there is no fetch path.
fn load_sample(s: &mut State, name: &str) {
    let (layout_txt, items_txt) = match name {
        "store" => (
            include_str!("../../samples/store-layout.json"),
            include_str!("../../samples/items.csv"),
        ),
        _ => {
            log(&format!("Unknown sample '{}'", name));
            return;
        }
    };
    match (parse_layout(layout_txt), parse_items_csv(items_txt)) {
        (Ok(layout), Ok(sections)) => upload::load_into_session(s, layout, sections),
        (Err(e), _) | (_, Err(e)) => log(&format!("Failed to load sample '{}': {}", name, e)),
    }
}

fn attach_ui(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    // File inputs + Load button
    upload::attach_file_inputs(state.clone())?;

    // Reset the pan/zoom transform
    if let Some(btn) = doc.get_element_by_id("resetView") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            s.session.reset_view();
            panel::update_status_dom(&s);
            draw(&s);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Download the shopping list as CSV
    if let Some(btn) = doc.get_element_by_id("downloadList") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            let csv = s.session.shopping().to_csv();
            let _ = save_text_as_file(&s.document, "shopping-list.csv", &csv);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Export the loaded layout as a labeled SVG plan
    if let Some(btn) = doc.get_element_by_id("exportSvg") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let s = st.borrow();
            let Some(layout) = s.session.layout() else {
                log("No layout loaded; nothing to export");
                return;
            };
            let (svg, w, h) = build_plan_svg(layout, 1.0);
            log(&format!("Exported plan SVG ({}x{})", w, h));
            let _ = save_text_as_file(&s.document, "floor-plan.svg", &svg);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Mouse events
    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            if s.session.pointer_down(x, y) {
                // The press cleared a visible hover.
                panel::hide_tooltip(&s);
                draw(&s);
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let st = state.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            if !s.session.is_loaded() {
                return;
            }
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            match s.session.pointer_move(x, y) {
                MoveOutcome::Panned => draw(&s),
                MoveOutcome::Hover {
                    face_id,
                    section_name,
                    changed,
                    ..
                } => {
                    panel::show_tooltip(&mut s, &e, &face_id, section_name.as_deref());
                    if changed {
                        draw(&s);
                    }
                }
                MoveOutcome::HoverEnded => {
                    panel::hide_tooltip(&s);
                    draw(&s);
                }
                MoveOutcome::None => {}
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    {
        // On the window, not the canvas: drags ending off-canvas must still
        // release the pointer state.
        let st = state.clone();
        let mouseup = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            st.borrow_mut().session.pointer_up();
        }));
        state
            .borrow()
            .window
            .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        mouseup.forget();
    }
    {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let (x, y) = event_canvas_coords(&e, &s.canvas);
            match s.session.click_at(x, y) {
                ClickOutcome::Face { face_id, .. } => {
                    let section = s.session.section_for(&face_id).cloned();
                    panel::show_section_items(&s.document, section.as_ref(), &face_id);
                }
                ClickOutcome::Suppressed | ClickOutcome::None => {}
            }
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    {
        let st = state.clone();
        let onwheel = Closure::<dyn FnMut(WheelEvent)>::wrap(Box::new(move |e: WheelEvent| {
            e.prevent_default();
            let mut s = st.borrow_mut();
            if !s.session.is_loaded() {
                return;
            }
            s.session.zoom_view(e.delta_y());
            panel::update_status_dom(&s);
            draw(&s);
        }));
        state
            .borrow()
            .canvas
            .add_event_listener_with_callback("wheel", onwheel.as_ref().unchecked_ref())?;
        onwheel.forget();
    }

    // Add-to-list clicks, delegated from the item cards.
    if let Some(el) = doc.get_element_by_id("itemList") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let Some(target) = e.target() else {
                return;
            };
            let Ok(el) = target.dyn_into::<HtmlElement>() else {
                return;
            };
            let dataset = el.dataset();
            let (Some(name), Some(face_id)) = (dataset.get("name"), dataset.get("face")) else {
                return;
            };
            let mut s = st.borrow_mut();
            if s.session.add_to_list(&name, &face_id) {
                panel::update_list_dom(&s.document, &s.session);
                panel::update_status_dom(&s);
                draw(&s);
            }
        }));
        el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    // Remove clicks, delegated from the shopping-list entries.
    if let Some(el) = doc.get_element_by_id("shoppingList") {
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let Some(target) = e.target() else {
                return;
            };
            let Ok(el) = target.dyn_into::<HtmlElement>() else {
                return;
            };
            let Some(name) = el.dataset().get("name") else {
                return;
            };
            let mut s = st.borrow_mut();
            if s.session.remove_from_list(&name) {
                panel::update_list_dom(&s.document, &s.session);
                panel::update_status_dom(&s);
                draw(&s);
            }
        }));
        el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    Ok(())
}
