//! Huvudvyn: biblioteksväljare, verktygsrad och posttabell

use egui::RichText;

use crate::services::{transfer, CatalogService, EntryEditor};
use crate::store::LibraryStore;
use crate::ui::state::{AppState, ConfirmAction, PromptAction};
use crate::ui::theme::Icons;
use crate::ui::widgets::EntryTable;
use crate::utils::error::AppError;
use crate::utils::path::display_path;

const NO_LIBRARY_LABEL: &str = "— Inget bibliotek —";

pub struct LibraryView {
    table: EntryTable,
}

impl Default for LibraryView {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryView {
    pub fn new() -> Self {
        Self {
            table: EntryTable::new(),
        }
    }

    /// Töm tabellens texturcache efter strukturella ändringar
    pub fn mark_needs_refresh(&mut self) {
        self.table.mark_needs_refresh();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, store: &dyn LibraryStore) {
        self.show_library_bar(ui, state, store);
        ui.add_space(4.0);
        self.show_toolbar(ui, state, store);
        ui.separator();
        self.table.show(ui, state, store);
    }

    /// Väljare och knappar för bibliotekshantering
    fn show_library_bar(&mut self, ui: &mut egui::Ui, state: &mut AppState, store: &dyn LibraryStore) {
        // Vald post i väljaren hanteras efter att raden ritats
        let mut selected: Option<Option<String>> = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Bibliotek:").strong());

            let current = state.active_name().unwrap_or(NO_LIBRARY_LABEL).to_string();
            egui::ComboBox::from_id_salt("library_select")
                .selected_text(current)
                .width(220.0)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(!state.has_library(), NO_LIBRARY_LABEL)
                        .clicked()
                    {
                        selected = Some(None);
                    }
                    for name in &state.catalog {
                        let is_active = state.active_name() == Some(name.as_str());
                        if ui.selectable_label(is_active, name).clicked() {
                            selected = Some(Some(name.clone()));
                        }
                    }
                });

            ui.separator();

            if ui.button(format!("{} Nytt", Icons::ADD)).clicked() {
                state.open_prompt(PromptAction::CreateLibrary);
            }

            ui.add_enabled_ui(state.has_library(), |ui| {
                if ui.button(format!("{} Byt namn", Icons::EDIT)).clicked() {
                    state.open_prompt(PromptAction::RenameLibrary);
                }
                if ui.button(format!("{} Ta bort", Icons::DELETE)).clicked() {
                    if let Some(name) = state.active_name() {
                        let message = format!(
                            "Är du säker på att du vill ta bort biblioteket \"{}\"?",
                            name
                        );
                        state.show_confirm(&message, ConfirmAction::DeleteLibrary);
                    }
                }
            });
        });

        if let Some(selection) = selected {
            self.select_library(state, store, selection);
        }
    }

    /// Sökfält, ny post samt import/export
    fn show_toolbar(&mut self, ui: &mut egui::Ui, state: &mut AppState, store: &dyn LibraryStore) {
        let mut add_clicked = false;
        let mut export_clicked = false;
        let mut import_clicked = false;

        ui.horizontal(|ui| {
            ui.add_enabled_ui(state.has_library(), |ui| {
                ui.label(Icons::SEARCH);
                ui.add(
                    egui::TextEdit::singleline(&mut state.search_query)
                        .id(egui::Id::new("entry_search"))
                        .hint_text("Sök i posterna...")
                        .desired_width(220.0),
                );
                if !state.search_query.is_empty() && ui.button("✖").clicked() {
                    state.search_query.clear();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(state.has_library(), |ui| {
                    if ui.button(format!("{} Importera", Icons::IMPORT)).clicked() {
                        import_clicked = true;
                    }
                    if ui.button(format!("{} Exportera", Icons::EXPORT)).clicked() {
                        export_clicked = true;
                    }
                    if ui.button(format!("{} Ny post", Icons::ADD)).clicked() {
                        add_clicked = true;
                    }
                });
            });
        });

        if add_clicked {
            self.add_entry(state, store);
        }
        if export_clicked {
            Self::export_library(state);
        }
        if import_clicked {
            Self::import_library(state);
        }
    }

    fn select_library(
        &mut self,
        state: &mut AppState,
        store: &dyn LibraryStore,
        selection: Option<String>,
    ) {
        let Some(name) = selection else {
            state.reset_active();
            state.search_query.clear();
            self.table.mark_needs_refresh();
            return;
        };

        match CatalogService::new(store).load(&name) {
            Ok(Some(library)) => {
                state.set_active(library);
                state.search_query.clear();
                self.table.mark_needs_refresh();
            }
            Ok(None) => {
                tracing::warn!("Biblioteket \"{}\" finns inte längre", name);
                state.catalog = CatalogService::new(store).list().unwrap_or_default();
                state.show_error(&format!("Biblioteket \"{}\" hittades inte", name));
            }
            Err(e) => {
                tracing::error!("Kunde inte ladda bibliotek \"{}\": {}", name, e);
                state.show_error("Kunde inte ladda biblioteket");
            }
        }
    }

    fn add_entry(&mut self, state: &mut AppState, store: &dyn LibraryStore) {
        let result = match state.active.as_mut() {
            Some(library) => EntryEditor::new(store).add_entry(library),
            None => return,
        };
        match result {
            Ok(()) => {
                self.table.mark_needs_refresh();
                state.show_success("Ny post tillagd");
            }
            Err(e) => {
                tracing::error!("Kunde inte lägga till post: {}", e);
                state.show_error("Kunde inte lägga till posten");
            }
        }
    }

    fn export_library(state: &mut AppState) {
        let Some(library) = state.active.as_ref() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(transfer::export_filename(&library.name))
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        let message = match transfer::export_to_file(&path, &library.entries) {
            Ok(()) => Ok(format!("Exporterade till {}", display_path(&path))),
            Err(e) => {
                tracing::error!("Export misslyckades: {}", e);
                Err("Kunde inte exportera biblioteket")
            }
        };
        match message {
            Ok(msg) => state.show_success(&msg),
            Err(msg) => state.show_error(msg),
        }
    }

    /// Import läser filen direkt men ersätter posterna först efter bekräftelse
    fn import_library(state: &mut AppState) {
        let Some(name) = state.active_name().map(String::from) else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        match transfer::import_from_file(&path) {
            Ok(entries) => {
                let message = format!(
                    "Importen ersätter alla poster i \"{}\". Vill du fortsätta?",
                    name
                );
                state.show_confirm(&message, ConfirmAction::ReplaceEntries(entries));
            }
            Err(AppError::Validation(msg)) => state.show_error(&msg),
            Err(e) => {
                tracing::error!("Import misslyckades: {}", e);
                state.show_error("Kunde inte läsa filen");
            }
        }
    }
}
