/// Below this width the poster stacks above the details.
pub const TWO_COLUMN_MIN_WIDTH: f32 = 768.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const CONTENT_MIN_GUTTER: f32 = 16.0;
pub const POSTER_PLACEHOLDER_HEIGHT: f32 = 420.0;

pub fn card_columns(available_width: f32) -> usize {
    if available_width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Content width and the gutter on each side for a window of `available_width`.
pub fn centered_content(available_width: f32) -> (f32, f32) {
    let width = (available_width - 2.0 * CONTENT_MIN_GUTTER)
        .min(CONTENT_MAX_WIDTH)
        .max(0.0);
    let gutter = ((available_width - width) / 2.0).max(0.0);
    (width, gutter)
}

/// Scales an image to fill `available_width`, preserving its aspect ratio.
pub fn poster_size(available_width: f32, image_size: [usize; 2]) -> egui::Vec2 {
    let [w, h] = image_size;
    if w == 0 || h == 0 {
        return egui::vec2(available_width, POSTER_PLACEHOLDER_HEIGHT);
    }
    let scale = available_width / w as f32;
    egui::vec2(available_width, h as f32 * scale)
}

#[cfg(test)]
#[path = "../tests/layout_tests.rs"]
mod tests;
