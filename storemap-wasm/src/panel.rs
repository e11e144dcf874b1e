use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use storemap_core::section::Section;
use storemap_core::session::Session;

use crate::state::State;

/// Tooltip auto-hide delay in milliseconds.
pub const TOOLTIP_HIDE_MS: i32 = 2000;

fn element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Inline tooltip styling, applied once at start-up.
pub fn init_tooltip(document: &Document) {
    let Some(el) = element(document, "tooltip") else {
        return;
    };
    let style = el.style();
    for (prop, value) in [
        ("position", "fixed"),
        ("background-color", "white"),
        ("border", "1px solid #ccc"),
        ("padding", "10px"),
        ("border-radius", "5px"),
        ("box-shadow", "0 2px 5px rgba(0,0,0,0.2)"),
        ("font-size", "14px"),
        ("z-index", "1000"),
        ("min-width", "150px"),
        ("text-align", "center"),
        ("display", "none"),
    ] {
        let _ = style.set_property(prop, value);
    }
}

/// Place the tooltip next to the pointer and (re)arm the auto-hide timer.
pub fn show_tooltip(state: &mut State, e: &MouseEvent, face_id: &str, section_name: Option<&str>) {
    let Some(el) = element(&state.document, "tooltip") else {
        return;
    };
    el.set_inner_text(&format!(
        "Face ID: {}\nSection: {}",
        face_id,
        section_name.unwrap_or("Not Assigned")
    ));
    let style = el.style();
    let _ = style.set_property("left", &format!("{}px", e.client_x() + 10));
    let _ = style.set_property("top", &format!("{}px", e.client_y() + 10));
    let _ = style.set_property("display", "block");

    if let Some(id) = state.tooltip_timer.take() {
        state.window.clear_timeout_with_handle(id);
    }
    if let Some(hide) = &state.tooltip_hide
        && let Ok(id) = state
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.as_ref().unchecked_ref(),
                TOOLTIP_HIDE_MS,
            )
    {
        state.tooltip_timer = Some(id);
    }
}

/// Hide immediately. A still-pending auto-hide timer firing afterwards is
/// harmless, so it is left alone.
pub fn hide_tooltip(state: &State) {
    if let Some(el) = element(&state.document, "tooltip") {
        let _ = el.style().set_property("display", "none");
    }
}

/// Fill the item panel for a clicked face: one card per item with an Add
/// button, or the empty-section message.
pub fn show_section_items(document: &Document, section: Option<&Section>, face_id: &str) {
    let Some(list) = element(document, "itemList") else {
        return;
    };
    let html = match section {
        Some(section) if !section.items.is_empty() => {
            let mut html = String::new();
            for item in &section.items {
                html.push_str(&format!(
                    "<div class=\"item\"><h3>{}</h3><p>Category: {}</p><p>Price: ${}</p>\
                     <button data-name=\"{}\" data-face=\"{}\">Add to list</button></div>",
                    escape_html(&item.item_name),
                    escape_html(&item.category),
                    escape_html(&item.price),
                    escape_html(&item.item_name),
                    escape_html(face_id),
                ));
            }
            html
        }
        _ => "<p>There are no items in this section</p>".to_string(),
    };
    list.set_inner_html(&html);
    if let Some(display) = element(document, "itemDisplay") {
        let _ = display.style().set_property("display", "block");
    }
}

/// Rebuild the shopping-list markup with a Remove button per entry.
pub fn update_list_dom(document: &Document, session: &Session) {
    let Some(list) = element(document, "shoppingList") else {
        return;
    };
    if session.shopping().is_empty() {
        list.set_inner_html("<p>Your list is empty</p>");
        return;
    }
    let mut html = String::from("<ul>");
    for entry in session.shopping().entries() {
        html.push_str(&format!(
            "<li>{} ({}) <button data-name=\"{}\">Remove</button></li>",
            escape_html(&entry.name),
            escape_html(&entry.face_id),
            escape_html(&entry.name),
        ));
    }
    html.push_str("</ul>");
    list.set_inner_html(&html);
}

/// Status line under the map: zoom level, face count, list size.
pub fn update_status_dom(state: &State) {
    if let Some(el) = element(&state.document, "status") {
        if !state.session.is_loaded() {
            el.set_inner_text("No layout loaded");
            return;
        }
        let zoom = (state.session.view().scale * 100.0).round();
        el.set_inner_text(&format!(
            "Zoom: {}%  |  Faces: {}  |  List: {}",
            zoom,
            state.session.faces().len(),
            state.session.shopping().len()
        ));
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
