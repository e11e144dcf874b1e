use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, FileReader, HtmlButtonElement, HtmlElement, HtmlInputElement};

use storemap_core::layout::{parse_layout, StoreLayout};
use storemap_core::section::{parse_items_csv, Section};

use crate::panel;
use crate::render::draw;
use crate::state::State;
use crate::utils::log;

/// Which of the two uploads a reader callback belongs to.
#[derive(Clone, Copy)]
enum UploadKind {
    Layout,
    Items,
}

/// Wire up the two file inputs and the Load button.
pub fn attach_file_inputs(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    attach_reader(state.clone(), "verticesFile", UploadKind::Layout)?;
    attach_reader(state.clone(), "itemsFile", UploadKind::Items)?;
    attach_load_button(state)?;
    Ok(())
}

fn attach_reader(
    state: Rc<RefCell<State>>,
    input_id: &str,
    kind: UploadKind,
) -> Result<(), JsValue> {
    let doc: Document = state.borrow().document.clone();
    if let Some(input) = doc.get_element_by_id(input_id) {
        let input: HtmlInputElement = input.dyn_into()?;
        let st = state.clone();
        // Clone references that will be moved into closures
        let input_for_closure = input.clone();
        let onchange = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            let Some(files) = input_for_closure.files() else {
                log("No file list on input");
                return;
            };
            let Some(file) = files.item(0) else {
                log("No file selected");
                return;
            };
            let Ok(reader) = FileReader::new() else {
                log("FileReader unavailable");
                return;
            };
            let st2 = st.clone();
            // Clone the FileReader for use inside the onload closure
            let reader_for_closure = reader.clone();
            let onload = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_ev: Event| {
                let text = reader_for_closure
                    .result()
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                let mut s = st2.borrow_mut();
                ingest(&mut s, kind, &text);
                update_readiness(&s);
            }));
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            if let Err(e) = reader.read_as_text(&file) {
                log(&format!("Failed to read file: {:?}", e));
            }
            onload.forget();
        }));
        input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
        onchange.forget();
    }
    Ok(())
}

/// Parse one upload into its pending slot. The reader callback owns the
/// inline error text: set on failure, cleared on its own success.
/// Readiness re-evaluation must not touch it, or the message would vanish
/// before the user ever sees it.
fn ingest(s: &mut State, kind: UploadKind, text: &str) {
    match kind {
        UploadKind::Layout => match parse_layout(text) {
            Ok(layout) => {
                log(&format!(
                    "Loaded layout: {} boundary vertices, {} blocks",
                    layout.store_vertices.len(),
                    layout.polygons.len()
                ));
                s.pending_layout = Some(layout);
                set_upload_error(s, "");
            }
            Err(e) => {
                s.pending_layout = None;
                set_upload_error(s, &e);
            }
        },
        UploadKind::Items => match parse_items_csv(text) {
            Ok(sections) => {
                log(&format!("Loaded items: {} sections", sections.len()));
                s.pending_sections = Some(sections);
                set_upload_error(s, "");
            }
            Err(e) => {
                s.pending_sections = None;
                set_upload_error(s, &e);
            }
        },
    }
}

fn set_upload_error(s: &State, msg: &str) {
    if let Some(el) = s.document.get_element_by_id("uploadError")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        el.set_inner_text(msg);
    }
}

/// The Load button only enables once both uploads parsed.
fn update_readiness(s: &State) {
    if let Some(btn) = s.document.get_element_by_id("loadButton")
        && let Ok(btn) = btn.dyn_into::<HtmlButtonElement>()
    {
        btn.set_disabled(!(s.pending_layout.is_some() && s.pending_sections.is_some()));
    }
}

fn attach_load_button(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    if let Some(btn) = doc.get_element_by_id("loadButton") {
        let btn: HtmlElement = btn.dyn_into()?;
        let st = state.clone();
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            let (Some(layout), Some(sections)) =
                (s.pending_layout.clone(), s.pending_sections.clone())
            else {
                return;
            };
            load_into_session(&mut s, layout, sections);
        }));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }
    Ok(())
}

/// Build the session from parsed data, reveal the map UI and paint.
/// Shared by the Load button and the bundled-sample startup path.
pub fn load_into_session(s: &mut State, layout: StoreLayout, sections: Vec<Section>) {
    s.session.load(layout, sections);

    let _ = s.canvas.style().set_property("display", "block");
    if let Some(el) = s.document.get_element_by_id("itemDisplay")
        && let Ok(el) = el.dyn_into::<HtmlElement>()
    {
        let _ = el.style().set_property("display", "block");
    }

    let face_ids: Vec<&str> = s
        .session
        .faces()
        .iter()
        .map(|f| f.face_id.as_str())
        .collect();
    log(&format!("Available face IDs: {}", face_ids.join(", ")));
    let item_ids: Vec<&str> = s
        .session
        .sections()
        .iter()
        .map(|sec| sec.face_id.as_str())
        .collect();
    log(&format!("Available items face IDs: {}", item_ids.join(", ")));

    panel::update_list_dom(&s.document, &s.session);
    panel::update_status_dom(s);
    draw(s);
}
