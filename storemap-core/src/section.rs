use serde::{Deserialize, Serialize};

/// One product row from the items CSV. Cells stay verbatim strings; the
/// panel renders `price` as-is.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub face_id: String,
    pub section_name: String,
    pub category: String,
    pub item_name: String,
    pub price: String,
}

/// Items grouped by the face they belong to. Section metadata comes from
/// the first row seen for that face.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Section {
    pub face_id: String,
    pub section_name: String,
    pub category: String,
    pub items: Vec<Item>,
}

/// Parse the items CSV and group rows into sections by `face_id`,
/// preserving first-appearance order.
///
/// Cells are comma-split and trimmed; there is no quoting. The header may
/// order columns freely and carry extras, but every data row must have the
/// header's field count.
pub fn parse_items_csv(text: &str) -> Result<Vec<Section>, String> {
    let mut lines = text.trim().lines();
    let header = lines.next().ok_or("Items CSV is empty")?;
    let columns: Vec<&str> = header.split(',').map(|h| h.trim()).collect();

    let col = |name: &str| -> Result<usize, String> {
        columns
            .iter()
            .position(|c| *c == name)
            .ok_or_else(|| format!("Items CSV is missing the '{name}' column"))
    };
    let face_id = col("face_id")?;
    let section_name = col("section_name")?;
    let category = col("category")?;
    let item_name = col("item_name")?;
    let price = col("price")?;

    let mut sections: Vec<Section> = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cells: Vec<&str> = line.split(',').map(|v| v.trim()).collect();
        if cells.len() != columns.len() {
            // Header is line 1, first data row line 2.
            return Err(format!(
                "Items CSV line {}: expected {} fields, found {}",
                idx + 2,
                columns.len(),
                cells.len()
            ));
        }
        let item = Item {
            face_id: cells[face_id].to_string(),
            section_name: cells[section_name].to_string(),
            category: cells[category].to_string(),
            item_name: cells[item_name].to_string(),
            price: cells[price].to_string(),
        };
        match sections.iter_mut().find(|s| s.face_id == item.face_id) {
            Some(section) => section.items.push(item),
            None => sections.push(Section {
                face_id: item.face_id.clone(),
                section_name: item.section_name.clone(),
                category: item.category.clone(),
                items: vec![item],
            }),
        }
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "face_id,section_name,category,item_name,price\n\
S1,Produce,Fruit,Apple,1.25\n\
S1,Produce,Fruit,Banana,0.60\n\
B1F2,Dairy,Milk,Whole Milk,3.49\n\
S1,Produce,Fruit,Cherry,4.00\n";

    #[test]
    fn groups_by_face_in_first_appearance_order() {
        let sections = parse_items_csv(CSV).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].face_id, "S1");
        assert_eq!(sections[0].section_name, "Produce");
        assert_eq!(sections[1].face_id, "B1F2");
        // Row order within a section survives interleaving.
        let names: Vec<&str> = sections[0].items.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, ["Apple", "Banana", "Cherry"]);
    }

    #[test]
    fn header_order_is_free_and_extras_ignored() {
        let csv = "price,item_name,category,aisle,section_name,face_id\n\
2.00,Bread,Bakery,7,Bakery,S2\n";
        let sections = parse_items_csv(csv).unwrap();
        assert_eq!(sections[0].face_id, "S2");
        assert_eq!(sections[0].items[0].item_name, "Bread");
        assert_eq!(sections[0].items[0].price, "2.00");
    }

    #[test]
    fn cells_are_trimmed() {
        let csv = "face_id, section_name ,category,item_name,price\n\
 S1 , Produce ,Fruit, Apple , 1.25 \n";
        let sections = parse_items_csv(csv).unwrap();
        assert_eq!(sections[0].face_id, "S1");
        assert_eq!(sections[0].items[0].item_name, "Apple");
        assert_eq!(sections[0].items[0].price, "1.25");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let csv = "face_id,section_name,category,item_name,price\n\
S1,Produce,Fruit,Apple,1.25\n\
\n\
S1,Produce,Fruit,Banana,0.60\n";
        let sections = parse_items_csv(csv).unwrap();
        assert_eq!(sections[0].items.len(), 2);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = parse_items_csv("face_id,section_name,category,item_name\nS1,a,b,c\n")
            .unwrap_err();
        assert!(err.contains("'price'"));
    }

    #[test]
    fn ragged_row_names_its_line() {
        let csv = "face_id,section_name,category,item_name,price\n\
S1,Produce,Fruit,Apple,1.25\n\
S1,Produce,Fruit\n";
        let err = parse_items_csv(csv).unwrap_err();
        assert!(err.contains("line 3"));
        assert!(err.contains("expected 5"));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_items_csv("").is_err());
    }
}
