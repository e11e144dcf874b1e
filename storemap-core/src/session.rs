use crate::face::{generate_faces, Face};
use crate::geometry::{distance_to_segment, Point, CLICK_RADIUS, HOVER_RADIUS};
use crate::layout::StoreLayout;
use crate::list::ShoppingList;
use crate::section::Section;
use crate::view::ViewTransform;

/// Pointer displacement in screen pixels below which a press-release
/// gesture still counts as a click rather than a pan.
pub const DRAG_SLOP: f64 = 5.0;

/// Pointer gesture state. A press enters `Dragging`; the gesture is only
/// treated as a pan once it leaves the drag slop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Idle,
    Dragging {
        origin: (f64, f64),
        last: (f64, f64),
        panned: bool,
    },
}

/// What a pointer move did, so the caller knows what to update.
#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Idle move with nothing under the cursor and nothing to clear.
    None,
    /// The view panned; hover is suppressed while dragging.
    Panned,
    /// A face is under the cursor. `changed` is false while the cursor
    /// stays on the same face, so callers can skip redundant redraws.
    Hover {
        index: usize,
        face_id: String,
        section_name: Option<String>,
        changed: bool,
    },
    /// The cursor left the previously hovered face.
    HoverEnded,
}

/// What a click selected.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    None,
    /// The click arrived at the end of a panning gesture.
    Suppressed,
    Face { index: usize, face_id: String },
}

/// The application state: loaded layout, generated faces, item sections,
/// view transform, pointer machine and shopping list. All interaction
/// logic lives here; the canvas/DOM layer only forwards events and draws.
#[derive(Clone, Debug, Default)]
pub struct Session {
    layout: Option<StoreLayout>,
    faces: Vec<Face>,
    sections: Vec<Section>,
    view: ViewTransform,
    pointer: PointerState,
    hovered: Option<usize>,
    click_suppressed: bool,
    shopping: ShoppingList,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Install a freshly parsed layout and item sections.
    ///
    /// Faces regenerate in full, hover and the shopping list clear
    /// (markers reference midpoints of the previous generation), and the
    /// view resets.
    pub fn load(&mut self, layout: StoreLayout, sections: Vec<Section>) {
        self.faces = generate_faces(&layout);
        self.layout = Some(layout);
        self.sections = sections;
        self.view.reset();
        self.pointer = PointerState::Idle;
        self.hovered = None;
        self.click_suppressed = false;
        self.shopping.clear();
    }

    pub fn is_loaded(&self) -> bool {
        self.layout.is_some()
    }

    pub fn layout(&self) -> Option<&StoreLayout> {
        self.layout.as_ref()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_face(&self) -> Option<&Face> {
        self.hovered.map(|i| &self.faces[i])
    }

    pub fn shopping(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn face_index(&self, face_id: &str) -> Option<usize> {
        self.faces.iter().position(|f| f.face_id == face_id)
    }

    pub fn section_for(&self, face_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.face_id == face_id)
    }

    fn section_name(&self, face_id: &str) -> Option<String> {
        self.section_for(face_id).map(|s| s.section_name.clone())
    }

    /// First face in generation order within `radius` of the world-space
    /// point. Not a nearest-of-many search: overlapping faces resolve by
    /// generation order, not proximity.
    fn face_at(&self, p: Point, radius: f64) -> Option<usize> {
        self.faces
            .iter()
            .position(|f| distance_to_segment(p, f.start, f.end) < radius)
    }

    /// Press: enter the drag state. Any visible hover clears so the
    /// tooltip does not ride along under a moving map; reports whether it
    /// did, so the caller can hide the tooltip and repaint.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.pointer = PointerState::Dragging {
            origin: (x, y),
            last: (x, y),
            panned: false,
        };
        self.hovered.take().is_some()
    }

    /// Release: leave the drag state. A gesture that panned suppresses
    /// the click event the browser fires right after the release.
    pub fn pointer_up(&mut self) {
        if let PointerState::Dragging { panned, .. } = self.pointer {
            self.click_suppressed = panned;
            self.pointer = PointerState::Idle;
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> MoveOutcome {
        match self.pointer {
            PointerState::Dragging { origin, last, panned } => {
                self.view.pan(x - last.0, y - last.1);
                let panned = panned
                    || (x - origin.0).abs() > DRAG_SLOP
                    || (y - origin.1).abs() > DRAG_SLOP;
                self.pointer = PointerState::Dragging {
                    origin,
                    last: (x, y),
                    panned,
                };
                MoveOutcome::Panned
            }
            PointerState::Idle => {
                let p = self.view.screen_to_world(x, y);
                match self.face_at(p, HOVER_RADIUS) {
                    Some(index) => {
                        let changed = self.hovered != Some(index);
                        self.hovered = Some(index);
                        let face = &self.faces[index];
                        MoveOutcome::Hover {
                            index,
                            face_id: face.face_id.clone(),
                            section_name: self.section_name(&face.face_id),
                            changed,
                        }
                    }
                    None => {
                        if self.hovered.take().is_some() {
                            MoveOutcome::HoverEnded
                        } else {
                            MoveOutcome::None
                        }
                    }
                }
            }
        }
    }

    pub fn click_at(&mut self, x: f64, y: f64) -> ClickOutcome {
        if self.click_suppressed {
            self.click_suppressed = false;
            return ClickOutcome::Suppressed;
        }
        let p = self.view.screen_to_world(x, y);
        match self.face_at(p, CLICK_RADIUS) {
            Some(index) => ClickOutcome::Face {
                index,
                face_id: self.faces[index].face_id.clone(),
            },
            None => ClickOutcome::None,
        }
    }

    /// Add an item to the shopping list, anchoring its marker at the
    /// midpoint of the face it was added from. Unknown faces and
    /// duplicate names report `false`.
    pub fn add_to_list(&mut self, name: &str, face_id: &str) -> bool {
        let Some(index) = self.face_index(face_id) else {
            return false;
        };
        let marker = self.faces[index].midpoint();
        self.shopping.add(name, face_id, marker)
    }

    pub fn remove_from_list(&mut self, name: &str) -> bool {
        self.shopping.remove(name)
    }

    pub fn zoom_view(&mut self, delta_y: f64) {
        self.view.zoom(delta_y);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }
}
