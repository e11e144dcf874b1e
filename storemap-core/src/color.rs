/// Saturation of generated face colors (percent).
const FACE_SATURATION: f64 = 70.0;
/// Lightness of generated face colors (percent).
const FACE_LIGHTNESS: f64 = 50.0;

/// Store boundary stroke.
pub const BOUNDARY_STROKE: &str = "#2ecc71";
/// Highlight stroke for the hovered face.
pub const HIGHLIGHT_STROKE: &str = "#f1c40f";

const BLOCK_FILL_FIRST: &str = "rgba(231, 76, 60, 0.3)";
const BLOCK_STROKE_FIRST: &str = "#e74c3c";
const BLOCK_FILL_REST: &str = "rgba(52, 152, 219, 0.3)";
const BLOCK_STROKE_REST: &str = "#3498db";

/// Hue for the face at `index` out of `total` generated faces.
///
/// This is a function of the current face order: reloading a layout may
/// recolor the same logical face when the order shifts.
pub fn face_hue(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index as f64 * 360.0 / total as f64) % 360.0
}

/// CSS color string for the face at `index` out of `total`.
pub fn face_color(index: usize, total: usize) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        face_hue(index, total),
        FACE_SATURATION,
        FACE_LIGHTNESS
    )
}

/// Interior block fill; the first block is tinted distinctly.
pub fn block_fill(index: usize) -> &'static str {
    if index == 0 { BLOCK_FILL_FIRST } else { BLOCK_FILL_REST }
}

pub fn block_stroke(index: usize) -> &'static str {
    if index == 0 { BLOCK_STROKE_FIRST } else { BLOCK_STROKE_REST }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_spreads_evenly() {
        assert_eq!(face_hue(0, 4), 0.0);
        assert_eq!(face_hue(1, 4), 90.0);
        assert_eq!(face_hue(3, 4), 270.0);
    }

    #[test]
    fn hue_wraps_past_full_circle() {
        assert_eq!(face_hue(5, 4), 90.0);
    }

    #[test]
    fn empty_face_list_is_harmless() {
        assert_eq!(face_hue(0, 0), 0.0);
    }

    #[test]
    fn color_is_css_hsl() {
        assert_eq!(face_color(1, 4), "hsl(90, 70%, 50%)");
    }

    #[test]
    fn first_block_tinted_distinctly() {
        assert_ne!(block_fill(0), block_fill(1));
        assert_eq!(block_fill(1), block_fill(7));
        assert_ne!(block_stroke(0), block_stroke(1));
    }
}
