use std::time::Duration;

use client_core::{card::RATINGS_HEADING, MovieCard};
use eframe::egui::{self, CornerRadius, RichText};

use crate::controller::orchestration::ViewController;
use crate::controller::reducer::PosterState;
use crate::ui::{
    layout, theme,
    widgets::{self, PosterView},
};

const IDLE_REPAINT: Duration = Duration::from_millis(100);
const BUSY_REPAINT: Duration = Duration::from_millis(16);

pub struct MovieCardApp {
    controller: ViewController,
    poster_texture: Option<(String, egui::TextureHandle)>,
    theme_applied: bool,
}

impl MovieCardApp {
    pub fn new(controller: ViewController) -> Self {
        Self {
            controller,
            poster_texture: None,
            theme_applied: false,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            ctx.set_visuals(theme::visuals());
            self.theme_applied = true;
        }
    }

    /// Keeps the uploaded texture in step with the current poster.
    fn sync_poster_texture(&mut self, ctx: &egui::Context) {
        let uploaded = self.poster_texture.as_ref().map(|(url, _)| url.as_str());
        match self.controller.state().poster() {
            Some((url, PosterState::Ready(image))) => {
                if uploaded != Some(url) {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width, image.height],
                        &image.rgba,
                    );
                    let texture = ctx.load_texture(
                        format!("poster:{url}"),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.poster_texture = Some((url.to_string(), texture));
                }
            }
            Some((url, _)) if uploaded == Some(url) => {}
            _ => self.poster_texture = None,
        }
    }

    fn poster_view(&self) -> PosterView<'_> {
        match (self.controller.state().poster(), &self.poster_texture) {
            (Some((url, PosterState::Ready(_))), Some((texture_url, texture)))
                if url == texture_url.as_str() =>
            {
                PosterView::Texture(texture)
            }
            (Some((_, PosterState::Loading)), _) => PosterView::Loading,
            _ => PosterView::Unavailable,
        }
    }

    fn show_card(&self, ui: &mut egui::Ui, card: &MovieCard) {
        egui::Frame::new()
            .fill(theme::CARD_FILL)
            .corner_radius(CornerRadius::same(12))
            .inner_margin(egui::Margin::same(32))
            .show(ui, |ui| {
                if layout::card_columns(ui.available_width()) == 2 {
                    ui.columns(2, |cols| {
                        widgets::poster(&mut cols[0], self.poster_view(), &card.title, &card.caption);
                        show_details(&mut cols[1], card);
                    });
                } else {
                    widgets::poster(ui, self.poster_view(), &card.title, &card.caption);
                    ui.add_space(24.0);
                    show_details(ui, card);
                }
            });
    }
}

fn show_details(ui: &mut egui::Ui, card: &MovieCard) {
    ui.label(
        RichText::new(&card.title)
            .size(34.0)
            .strong()
            .color(theme::HEADING_TEXT),
    );
    ui.add_space(16.0);
    ui.label(RichText::new(&card.plot).size(17.0).color(theme::BODY_TEXT));
    ui.add_space(20.0);

    let column_width = ((ui.available_width() - 12.0) / 2.0).max(0.0);
    egui::Grid::new("movie-info")
        .num_columns(2)
        .spacing([12.0, 12.0])
        .min_col_width(column_width)
        .max_col_width(column_width)
        .show(ui, |ui| {
            for pair in card.info.chunks(2) {
                for item in pair {
                    widgets::info_item(ui, item);
                }
                ui.end_row();
            }
        });

    ui.add_space(24.0);
    ui.label(
        RichText::new(RATINGS_HEADING)
            .size(24.0)
            .strong()
            .color(theme::HEADING_TEXT),
    );
    ui.add_space(12.0);
    for row in &card.ratings {
        widgets::rating_row(ui, row);
        ui.add_space(8.0);
    }
}

impl eframe::App for MovieCardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.process_ui_events();
        self.apply_theme_if_needed(ctx);
        self.sync_poster_texture(ctx);

        let trigger = self.controller.state().trigger();
        let card = self.controller.state().card();
        let mut fetch_clicked = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                theme::paint_background(ui.painter(), ui.max_rect());
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let (content_width, gutter) = layout::centered_content(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.add_space(gutter);
                            ui.vertical(|ui| {
                                ui.set_width(content_width);
                                ui.add_space(48.0);
                                fetch_clicked = widgets::fetch_button(ui, trigger).clicked();
                                ui.add_space(48.0);
                                if let Some(card) = &card {
                                    self.show_card(ui, card);
                                    ui.add_space(48.0);
                                }
                            });
                        });
                    });
            });

        if fetch_clicked {
            self.controller.trigger_fetch();
        }

        ctx.request_repaint_after(if self.controller.state().has_pending_work() {
            BUSY_REPAINT
        } else {
            IDLE_REPAINT
        });
    }
}
