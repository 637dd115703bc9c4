use egui::Color32;

pub const BACKGROUND_TOP: Color32 = Color32::from_rgb(17, 24, 39);
pub const BACKGROUND_BOTTOM: Color32 = Color32::from_rgb(31, 41, 55);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(96, 165, 250);
pub const BODY_TEXT: Color32 = Color32::from_rgb(209, 213, 219);
pub const HEADING_TEXT: Color32 = Color32::from_rgb(230, 230, 230);
pub const CARD_FILL: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
pub const TILE_FILL: Color32 = Color32::from_rgba_premultiplied(13, 13, 13, 13);
pub const TILE_HOVER_FILL: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);
pub const CAPTION_SHADE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 153);

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND_TOP;
    visuals.window_fill = BACKGROUND_BOTTOM;
    visuals.override_text_color = Some(BODY_TEXT);
    visuals.hyperlink_color = ACCENT_TEXT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.hovered.weak_bg_fill = lighten_color(ACCENT, 0.1);
    visuals
}

/// Diagonal gray gradient behind the whole window.
pub fn paint_background(painter: &egui::Painter, rect: egui::Rect) {
    let middle = BACKGROUND_TOP.lerp_to_gamma(BACKGROUND_BOTTOM, 0.5);
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), BACKGROUND_TOP);
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), BACKGROUND_BOTTOM);
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}
