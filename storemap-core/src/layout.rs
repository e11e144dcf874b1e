use serde::{Deserialize, Serialize};

/// Store layout as uploaded: one boundary polygon plus interior blocks.
/// Vertex pairs are canvas pixels, y-down, implicitly closed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreLayout {
    pub store_vertices: Vec<[f64; 2]>,
    pub polygons: Vec<BlockPolygon>,
    // Passthrough identifiers stamped by the importer; absent in hand-made files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BlockPolygon {
    pub polygon_vertices: Vec<[f64; 2]>,
}

/// Parse and validate an uploaded layout file.
///
/// Block polygons pass through unchecked; degenerate block edges are legal
/// input to the hit-testing kernel.
pub fn parse_layout(text: &str) -> Result<StoreLayout, String> {
    let layout: StoreLayout =
        serde_json::from_str(text).map_err(|e| format!("Invalid layout JSON: {e}"))?;
    if layout.store_vertices.len() < 3 {
        return Err("Layout needs at least 3 store boundary vertices".to_string());
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boundary_and_blocks() {
        let text = r#"{
            "store_vertices": [[0, 0], [100, 0], [100, 80], [0, 80]],
            "polygons": [
                {"polygon_vertices": [[10, 10], [30, 10], [30, 30]]}
            ]
        }"#;
        let layout = parse_layout(text).unwrap();
        assert_eq!(layout.store_vertices.len(), 4);
        assert_eq!(layout.polygons.len(), 1);
        assert_eq!(layout.polygons[0].polygon_vertices[2], [30.0, 30.0]);
        assert!(layout.store_id.is_none());
    }

    #[test]
    fn keeps_importer_identifiers() {
        let text = r#"{
            "store_vertices": [[0, 0], [10, 0], [10, 10]],
            "polygons": [],
            "store_id": "store1",
            "floor_id": "floor1"
        }"#;
        let layout = parse_layout(text).unwrap();
        assert_eq!(layout.store_id.as_deref(), Some("store1"));
        assert_eq!(layout.floor_id.as_deref(), Some("floor1"));
        // Round-trips without injecting nulls for absent identifiers.
        let bare = parse_layout(r#"{"store_vertices": [[0,0],[1,0],[1,1]], "polygons": []}"#)
            .unwrap();
        let json = serde_json::to_string(&bare).unwrap();
        assert!(!json.contains("store_id"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_layout("{not json").unwrap_err();
        assert!(err.starts_with("Invalid layout JSON"));
    }

    #[test]
    fn rejects_short_boundary() {
        let err = parse_layout(r#"{"store_vertices": [[0,0],[1,1]], "polygons": []}"#).unwrap_err();
        assert!(err.contains("at least 3"));
    }
}
