use client_core::{InfoItem, PosterCaption, RatingRow, TriggerButton};
use egui::{Color32, CornerRadius, RichText};

use crate::ui::{layout, theme};

pub enum PosterView<'a> {
    Texture(&'a egui::TextureHandle),
    Loading,
    Unavailable,
}

fn tile_frame(fill: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// The single fetch control. Shows a spinner instead of its label while busy.
pub fn fetch_button(ui: &mut egui::Ui, trigger: TriggerButton) -> egui::Response {
    let text = if trigger.busy {
        RichText::new("")
    } else {
        RichText::new(format!("🎞  {}", trigger.label))
            .strong()
            .size(16.0)
            .color(Color32::WHITE)
    };
    let fill = if trigger.enabled {
        theme::ACCENT
    } else {
        theme::ACCENT.gamma_multiply(0.5)
    };
    let button = egui::Button::new(text)
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .min_size(egui::vec2(240.0, 44.0));

    let response = ui.add_enabled(trigger.enabled, button);
    if trigger.busy {
        let spinner_rect =
            egui::Rect::from_center_size(response.rect.center(), egui::vec2(20.0, 20.0));
        egui::Spinner::new()
            .size(20.0)
            .color(Color32::WHITE)
            .paint_at(ui, spinner_rect);
    }
    response
}

pub fn info_item(ui: &mut egui::Ui, item: &InfoItem) {
    let width = ui.available_width();
    let hovered = ui.rect_contains_pointer(egui::Rect::from_min_size(
        ui.cursor().min,
        egui::vec2(width, 40.0),
    ));
    let fill = if hovered {
        theme::TILE_HOVER_FILL
    } else {
        theme::TILE_FILL
    };
    tile_frame(fill).show(ui, |ui| {
        ui.set_min_width(width - 24.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(format!("{}:", item.label))
                    .strong()
                    .color(theme::ACCENT_TEXT),
            );
            ui.label(RichText::new(&item.value).color(theme::BODY_TEXT));
        });
    });
}

pub fn rating_row(ui: &mut egui::Ui, row: &RatingRow) {
    let width = ui.available_width();
    tile_frame(theme::TILE_FILL).show(ui, |ui| {
        ui.set_min_width(width - 24.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(&row.source).color(theme::BODY_TEXT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(&row.value)
                        .color(theme::ACCENT_TEXT)
                        .strong(),
                );
            });
        });
    });
}

/// Poster image with the year/runtime caption revealed on hover. Falls back
/// to the title as alt text when no image is available.
pub fn poster(ui: &mut egui::Ui, view: PosterView<'_>, alt: &str, caption: &PosterCaption) {
    let width = ui.available_width();
    let rect = match view {
        PosterView::Texture(texture) => {
            let size = layout::poster_size(width, texture.size());
            ui.add(egui::Image::new((texture.id(), size)).corner_radius(CornerRadius::same(8)))
                .rect
        }
        PosterView::Loading | PosterView::Unavailable => {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(width, layout::POSTER_PLACEHOLDER_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter()
                .rect_filled(rect, CornerRadius::same(8), theme::TILE_FILL);
            if matches!(view, PosterView::Loading) {
                let spinner_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(28.0, 28.0));
                egui::Spinner::new().size(28.0).paint_at(ui, spinner_rect);
            } else {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    alt,
                    egui::FontId::proportional(18.0),
                    theme::BODY_TEXT,
                );
            }
            rect
        }
    };

    if ui.rect_contains_pointer(rect) {
        show_caption(ui, rect, caption);
    }
}

fn show_caption(ui: &mut egui::Ui, rect: egui::Rect, caption: &PosterCaption) {
    let shade = egui::Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - 72.0),
        rect.right_bottom(),
    );
    ui.painter().rect_filled(
        shade,
        CornerRadius {
            nw: 0,
            ne: 0,
            sw: 8,
            se: 8,
        },
        theme::CAPTION_SHADE,
    );

    let text_rect = shade.shrink2(egui::vec2(16.0, 10.0));
    let mut caption_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(text_rect)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    caption_ui.add(
        egui::Label::new(
            RichText::new(&caption.year)
                .size(18.0)
                .strong()
                .color(Color32::WHITE),
        )
        .selectable(false),
    );
    caption_ui.add(
        egui::Label::new(RichText::new(&caption.runtime).size(14.0).color(Color32::WHITE))
            .selectable(false),
    );
}
