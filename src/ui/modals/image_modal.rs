//! Förstorad bildvisning för en post

use egui::{Align2, RichText, TextureHandle};

use crate::ui::state::AppState;
use crate::ui::theme::Colors;
use crate::utils::image::load_data_url_texture;

const MAX_SIZE: egui::Vec2 = egui::vec2(800.0, 600.0);

/// Modal som visar postens bild i full storlek
pub struct ImageModal {
    /// Laddad textur för posten på positionen
    texture: Option<(usize, TextureHandle)>,
}

impl Default for ImageModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageModal {
    pub fn new() -> Self {
        Self { texture: None }
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState) {
        let Some(index) = state.enlarged_image else {
            self.texture = None;
            return;
        };

        // Titel och bilddata hämtas innan fönstret ritas
        let entry_data = state
            .active
            .as_ref()
            .and_then(|lib| lib.entries.get(index))
            .map(|entry| (entry.title.clone(), entry.image.clone()));

        let Some((title, data_url)) = entry_data else {
            state.enlarged_image = None;
            self.texture = None;
            return;
        };

        let cached = matches!(self.texture, Some((i, _)) if i == index);
        if !cached {
            self.texture =
                load_data_url_texture(ctx, &format!("enlarged_{}", index), &data_url, None)
                    .map(|tex| (index, tex));
        }

        let mut close = false;

        egui::Window::new(if title.is_empty() {
            "Bild".to_string()
        } else {
            title
        })
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match &self.texture {
                Some((_, tex)) => {
                    ui.add(egui::Image::new(tex).max_size(MAX_SIZE).rounding(4.0));
                }
                None => {
                    ui.label(
                        RichText::new("Kunde inte ladda bilden")
                            .italics()
                            .color(Colors::TEXT_MUTED),
                    );
                }
            }

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Stäng").clicked() {
                    close = true;
                }
            });
        });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            close = true;
        }

        if close {
            state.enlarged_image = None;
            self.texture = None;
        }
    }
}
