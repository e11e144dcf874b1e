use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use storemap_core::layout::StoreLayout;
use storemap_core::section::Section;
use storemap_core::session::Session;

/// Application state shared across the WASM callbacks behind an
/// `Rc<RefCell<_>>`. All map logic lives in the [`Session`]; this struct
/// only adds the browser handles and upload staging around it.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub session: Session,
    /// Latest successfully parsed uploads, waiting for the Load button.
    /// A newer file selection overwrites the slot when its reader fires.
    pub pending_layout: Option<StoreLayout>,
    pub pending_sections: Option<Vec<Section>>,
    /// Handle of the pending tooltip auto-hide timeout, if armed.
    pub tooltip_timer: Option<i32>,
    /// Timeout callback reused across hovers; recreating it per mouse move
    /// would leak one closure per event.
    pub tooltip_hide: Option<Closure<dyn FnMut()>>,
}
