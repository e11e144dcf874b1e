use crate::geometry::Point;

/// One shopping-list entry together with its map marker. Holding the two
/// in a single record keeps the list and the markers in lockstep.
#[derive(Clone, Debug)]
pub struct ListEntry {
    pub name: String,
    pub face_id: String,
    /// World-space midpoint of the face the item was added from.
    pub marker: Point,
}

/// Shopping list, unique by item name, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ShoppingList {
    entries: Vec<ListEntry>,
}

impl ShoppingList {
    /// Add an item. Idempotent by name: a name already present changes
    /// nothing and reports `false`.
    pub fn add(&mut self, name: &str, face_id: &str, marker: Point) -> bool {
        if self.contains(name) {
            return false;
        }
        self.entries.push(ListEntry {
            name: name.to_string(),
            face_id: face_id.to_string(),
            marker,
        });
        true
    }

    /// Remove an item and its marker. Absent names are a no-op reporting
    /// `false`.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        self.entries.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Download payload for the list button.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("item_name,face_id\n");
        for e in &self.entries {
            out.push_str(&format!("{},{}\n", e.name, e.face_id));
        }
        out
    }
}
