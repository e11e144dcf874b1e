use std::env;
use std::fs;

use storemap_core::layout::{parse_layout, StoreLayout};
use storemap_core::smooth::{smoothen_layout, ALIGN_THRESHOLD, MERGE_THRESHOLD};
use storemap_core::svg::build_plan_svg;

fn vertex_count(layout: &StoreLayout) -> usize {
    layout.store_vertices.len()
        + layout
            .polygons
            .iter()
            .map(|b| b.polygon_vertices.len())
            .sum::<usize>()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: floorplan <layout.json> <output.(json|svg)> [merge] [align|scale]");
        std::process::exit(2);
    }
    let input = &args[1];
    let output = &args[2];
    let txt = fs::read_to_string(input)?;
    let layout = parse_layout(&txt)?;

    if output.ends_with(".json") {
        // Smooth hand-traced vertices: drop near-duplicates, square up
        // nearly axis-aligned edges.
        let merge: f64 = args
            .get(3)
            .and_then(|s| s.parse().ok())
            .unwrap_or(MERGE_THRESHOLD);
        let align: f64 = args
            .get(4)
            .and_then(|s| s.parse().ok())
            .unwrap_or(ALIGN_THRESHOLD);
        let smoothed = smoothen_layout(&layout, merge, align);
        eprintln!(
            "smoothed {} -> {} vertices",
            vertex_count(&layout),
            vertex_count(&smoothed)
        );
        fs::write(output, serde_json::to_string_pretty(&smoothed)?)?;
    } else if output.ends_with(".svg") {
        let scale: f64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(1.0);
        let (svg, w_px, h_px) = build_plan_svg(&layout, scale);
        eprintln!("plan {}x{} px", w_px, h_px);
        fs::write(output, svg)?;
    } else {
        eprintln!("Unsupported output extension (want .json or .svg): {output}");
        std::process::exit(2);
    }
    Ok(())
}
