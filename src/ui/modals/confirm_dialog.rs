//! Bekräftelsedialog för destruktiva åtgärder

use egui::{Align2, RichText};

use crate::services::{CatalogService, EntryEditor};
use crate::store::LibraryStore;
use crate::ui::state::{AppState, ConfirmAction};
use crate::ui::theme::Colors;

pub struct ConfirmDialog;

impl ConfirmDialog {
    /// Visa dialogen. Returnerar `Some(true)` om åtgärden utfördes,
    /// `Some(false)` vid avbrott och `None` medan dialogen är öppen.
    pub fn show(
        ctx: &egui::Context,
        state: &mut AppState,
        store: &dyn LibraryStore,
    ) -> Option<bool> {
        if !state.show_confirm_dialog {
            return None;
        }

        let confirm_label = match state.confirm_dialog_action {
            Some(ConfirmAction::ReplaceEntries(_)) => "Ersätt",
            _ => "Ta bort",
        };

        let mut result = None;

        egui::Window::new("Bekräfta")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.label(&state.confirm_dialog_message);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Avbryt").clicked() {
                        result = Some(false);
                    }
                    if ui
                        .button(RichText::new(confirm_label).color(Colors::ERROR))
                        .clicked()
                    {
                        result = Some(true);
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = Some(false);
        }

        if let Some(confirmed) = result {
            let action = state.confirm_dialog_action.take();
            state.close_confirm();
            if confirmed {
                if let Some(action) = action {
                    Self::execute_action(&action, state, store);
                }
            }
        }
        result
    }

    fn execute_action(action: &ConfirmAction, state: &mut AppState, store: &dyn LibraryStore) {
        match action {
            ConfirmAction::DeleteEntry(index) => {
                let result = match state.active.as_mut() {
                    Some(library) => EntryEditor::new(store).delete_entry(library, *index),
                    None => return,
                };
                match result {
                    Ok(_) => state.show_success("Post borttagen"),
                    Err(e) => {
                        tracing::error!("Kunde inte ta bort post: {}", e);
                        state.show_error("Kunde inte ta bort posten");
                    }
                }
            }
            ConfirmAction::DeleteLibrary => {
                let Some(name) = state.active_name().map(String::from) else {
                    return;
                };
                match CatalogService::new(store).delete(&name) {
                    Ok(()) => {
                        state.reset_active();
                        state.catalog = CatalogService::new(store).list().unwrap_or_default();
                        state.show_success(&format!("Biblioteket \"{}\" togs bort", name));
                    }
                    Err(e) => {
                        tracing::error!("Kunde inte ta bort bibliotek \"{}\": {}", name, e);
                        state.show_error("Kunde inte ta bort biblioteket");
                    }
                }
            }
            ConfirmAction::ReplaceEntries(entries) => {
                let result = match state.active.as_mut() {
                    Some(library) => {
                        EntryEditor::new(store).replace_entries(library, entries.clone())
                    }
                    None => return,
                };
                match result {
                    Ok(()) => state.show_success(&format!("{} poster importerade", entries.len())),
                    Err(e) => {
                        tracing::error!("Kunde inte importera poster: {}", e);
                        state.show_error("Kunde inte importera posterna");
                    }
                }
            }
        }
    }
}
