//! Den redigerbara tabellen över det aktiva bibliotekets poster
//!
//! Tabellen ritas om från biblioteket varje bildruta. Textceller binder
//! direkt mot postens fält och sparar när cellen tappar fokus. All
//! adressering sker med positionsindex — id:n numreras om vid varje
//! strukturell ändring och är inte stabila referenser.

use std::collections::HashMap;
use std::path::PathBuf;

use egui::{self, RichText, TextureHandle};

use crate::services::EntryEditor;
use crate::store::LibraryStore;
use crate::ui::{
    state::{AppState, ConfirmAction},
    theme::{Colors, Icons},
};
use crate::utils::image::{encode_data_url, load_data_url_texture};

const THUMBNAIL_SIZE: f32 = 48.0;

pub struct EntryTable {
    /// Cachade miniatyrer (position -> textur); töms vid strukturella ändringar
    thumbnails: HashMap<usize, TextureHandle>,
    /// En redigering har gjorts i cellen som har fokus
    dirty: bool,
    needs_refresh: bool,
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryTable {
    pub fn new() -> Self {
        Self {
            thumbnails: HashMap::new(),
            dirty: false,
            needs_refresh: true,
        }
    }

    pub fn mark_needs_refresh(&mut self) {
        self.needs_refresh = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, store: &dyn LibraryStore) {
        if self.needs_refresh {
            self.thumbnails.clear();
            self.needs_refresh = false;
        }

        let query = state.search_query.trim().to_string();

        // Åtgärder samlas upp under renderingen och utförs efteråt,
        // eftersom biblioteket är lånat medan raderna ritas
        let mut pending_confirm: Option<(String, ConfirmAction)> = None;
        let mut clicked_image: Option<usize> = None;
        let mut pending_image: Option<(usize, PathBuf)> = None;
        let mut save_error: Option<&'static str> = None;
        let mut image_added = false;

        {
            let Some(library) = state.active.as_mut() else {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Inget bibliotek valt. Välj eller skapa ett bibliotek.")
                            .italics()
                            .color(Colors::TEXT_MUTED),
                    );
                });
                return;
            };

            let total = library.len();
            let visible = library
                .entries
                .iter()
                .filter(|e| e.matches(&query))
                .count();
            ui.label(
                RichText::new(format!("{} av {} poster", visible, total))
                    .small()
                    .color(Colors::TEXT_SECONDARY),
            );
            ui.separator();

            let mut commit = false;

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("entry_table")
                        .num_columns(7)
                        .spacing([12.0, 8.0])
                        .striped(true)
                        .show(ui, |ui| {
                            // Rubrikrad
                            ui.label(RichText::new("Nr").strong());
                            ui.label(RichText::new("Författare").strong());
                            ui.label(RichText::new("Titel").strong());
                            ui.label(RichText::new("Beskrivning").strong());
                            ui.label(RichText::new("Kommentarer").strong());
                            ui.label(RichText::new("Bild").strong());
                            ui.label("");
                            ui.end_row();

                            for (index, entry) in library.entries.iter_mut().enumerate() {
                                // Sökfiltret döljer rader utan att ändra sekvensen
                                if !entry.matches(&query) {
                                    continue;
                                }

                                ui.label(entry.id.to_string());

                                let cells: [(&str, &mut String, f32); 4] = [
                                    ("author", &mut entry.author, 130.0),
                                    ("title", &mut entry.title, 160.0),
                                    ("description", &mut entry.description, 200.0),
                                    ("comments", &mut entry.comments, 160.0),
                                ];
                                for (field, value, width) in cells {
                                    let response = ui.add(
                                        egui::TextEdit::singleline(value)
                                            .id(egui::Id::new((field, index)))
                                            .desired_width(width),
                                    );
                                    if response.changed() {
                                        self.dirty = true;
                                    }
                                    // Spara när cellen tappar fokus
                                    if response.lost_focus() && self.dirty {
                                        commit = true;
                                        self.dirty = false;
                                    }
                                }

                                // Bildcell: uppladdningsknapp eller klickbar miniatyr
                                if entry.has_image() {
                                    let texture = match self.thumbnails.get(&index) {
                                        Some(tex) => Some(tex.clone()),
                                        None => load_data_url_texture(
                                            ui.ctx(),
                                            &format!("thumb_{}", index),
                                            &entry.image,
                                            Some(64),
                                        )
                                        .map(|tex| {
                                            self.thumbnails.insert(index, tex.clone());
                                            tex
                                        }),
                                    };

                                    if let Some(tex) = texture {
                                        let response = ui.add(
                                            egui::Image::new(&tex)
                                                .fit_to_exact_size(egui::vec2(
                                                    THUMBNAIL_SIZE,
                                                    THUMBNAIL_SIZE,
                                                ))
                                                .rounding(4.0)
                                                .sense(egui::Sense::click()),
                                        );
                                        if response
                                            .on_hover_text("Klicka för att förstora")
                                            .clicked()
                                        {
                                            clicked_image = Some(index);
                                        }
                                    } else {
                                        // Bildfältet gick inte att avkoda
                                        ui.label(
                                            RichText::new(Icons::IMAGE).color(Colors::TEXT_MUTED),
                                        );
                                    }
                                } else if ui.button("Välj bild…").clicked() {
                                    if let Some(path) = rfd::FileDialog::new()
                                        .add_filter("Bilder", &["jpg", "jpeg", "png", "gif", "webp"])
                                        .pick_file()
                                    {
                                        pending_image = Some((index, path));
                                    }
                                }

                                // Ta bort-knapp
                                if ui
                                    .button(Icons::DELETE)
                                    .on_hover_text("Ta bort posten")
                                    .clicked()
                                {
                                    pending_confirm = Some((
                                        format!(
                                            "Är du säker på att du vill ta bort post nr {}?",
                                            entry.id
                                        ),
                                        ConfirmAction::DeleteEntry(index),
                                    ));
                                }

                                ui.end_row();
                            }
                        });
                });

            if commit {
                if let Err(e) = EntryEditor::new(store).commit_edits(library) {
                    tracing::error!("Kunde inte spara redigering: {}", e);
                    save_error = Some("Kunde inte spara ändringen");
                }
            }

            if let Some((index, path)) = pending_image.take() {
                let result = encode_data_url(&path)
                    .and_then(|url| EntryEditor::new(store).set_image(library, index, url));
                match result {
                    Ok(()) => image_added = true,
                    Err(e) => {
                        tracing::error!("Kunde inte lägga till bild: {}", e);
                        save_error = Some("Kunde inte lägga till bilden");
                    }
                }
            }
        }

        if let Some(msg) = save_error {
            state.show_error(msg);
        }
        if image_added {
            state.show_success("Bild tillagd");
            self.mark_needs_refresh();
        }
        if let Some((message, action)) = pending_confirm {
            state.show_confirm(&message, action);
        }
        if let Some(index) = clicked_image {
            state.enlarged_image = Some(index);
        }
    }
}
