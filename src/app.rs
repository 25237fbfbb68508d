//! Huvudapplikationen

use egui::RichText;

use crate::models::config::AppSettings;
use crate::services::CatalogService;
use crate::store::{JsonStore, LibraryStore, MemoryStore};
use crate::ui::modals::{ConfirmDialog, ImageModal, PromptDialog};
use crate::ui::state::{AppState, PromptAction, StatusType};
use crate::ui::theme::{self, Colors, Icons};
use crate::ui::views::LibraryView;
use crate::utils::path::get_libraries_dir;

pub struct BoklibApp {
    store: Box<dyn LibraryStore>,
    state: AppState,
    settings: AppSettings,

    library_view: LibraryView,
    prompt_dialog: PromptDialog,
    image_modal: ImageModal,

    style_initialized: bool,
}

impl BoklibApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();

        let store: Box<dyn LibraryStore> = match JsonStore::open(get_libraries_dir()) {
            Ok(store) => {
                tracing::info!("Biblioteken lagras i {:?}", store.root());
                Box::new(store)
            }
            Err(e) => {
                // Utan skrivbar datakatalog körs appen vidare i minnet
                tracing::error!("Kunde inte öppna datakatalogen: {}", e);
                Box::new(MemoryStore::new())
            }
        };

        let mut state = AppState::new();
        state.dark_mode = settings.dark_mode;
        state.catalog = CatalogService::new(store.as_ref())
            .list()
            .unwrap_or_else(|e| {
                tracing::error!("Kunde inte läsa bibliotekslistan: {}", e);
                Vec::new()
            });

        Self {
            store,
            state,
            settings,
            library_view: LibraryView::new(),
            prompt_dialog: PromptDialog::new(),
            image_modal: ImageModal::new(),
            style_initialized: false,
        }
    }

    fn refresh_catalog(&mut self) {
        match CatalogService::new(self.store.as_ref()).list() {
            Ok(names) => self.state.catalog = names,
            Err(e) => {
                tracing::error!("Kunde inte läsa bibliotekslistan: {}", e);
                self.state.show_error("Kunde inte läsa bibliotekslistan");
            }
        }
    }

    fn create_library(&mut self, name: &str) {
        match CatalogService::new(self.store.as_ref()).create(name) {
            Ok(library) => {
                let created = library.name.clone();
                self.state.set_active(library);
                self.state.search_query.clear();
                self.refresh_catalog();
                self.library_view.mark_needs_refresh();
                self.state
                    .show_success(&format!("Biblioteket \"{}\" skapades", created));
            }
            Err(e) => {
                tracing::error!("Kunde inte skapa bibliotek: {}", e);
                self.state.show_error("Kunde inte skapa biblioteket");
            }
        }
    }

    fn rename_library(&mut self, new_name: &str) {
        let result = match self.state.active.as_mut() {
            Some(library) => CatalogService::new(self.store.as_ref()).rename(library, new_name),
            None => return,
        };
        match result {
            Ok(()) => {
                self.refresh_catalog();
                self.state
                    .show_success(&format!("Biblioteket heter nu \"{}\"", new_name.trim()));
            }
            Err(e) => {
                tracing::error!("Kunde inte byta namn: {}", e);
                self.state.show_error("Kunde inte byta namn på biblioteket");
            }
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(format!("{} Boklib", Icons::BOOK));
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .small()
                        .color(Colors::TEXT_MUTED),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.state.dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).on_hover_text("Växla tema").clicked() {
                        self.state.dark_mode = !self.state.dark_mode;
                        self.settings.dark_mode = self.state.dark_mode;
                        theme::configure_style(ctx, self.state.dark_mode);
                        if let Err(e) = self.settings.save() {
                            tracing::warn!("Kunde inte spara inställningar: {}", e);
                        }
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let Some(status) = self.state.status_message.clone() else {
            return;
        };

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(2.0);
            let color = match status.status_type {
                StatusType::Success => Colors::SUCCESS,
                StatusType::Error => Colors::ERROR,
                StatusType::Warning => Colors::WARNING,
                StatusType::Info => Colors::INFO,
            };
            ui.label(RichText::new(&status.text).color(color));
            ui.add_space(2.0);
        });
    }

    fn show_modals(&mut self, ctx: &egui::Context) {
        if self.state.show_prompt_dialog {
            if let Some(result) = self.prompt_dialog.show(ctx, &mut self.state) {
                let action = self.state.prompt_action;
                self.state.close_prompt();
                if let (Some(action), Some(name)) = (action, result) {
                    match action {
                        PromptAction::CreateLibrary => self.create_library(&name),
                        PromptAction::RenameLibrary => self.rename_library(&name),
                    }
                }
            }
        }

        if self.state.show_confirm_dialog {
            if let Some(confirmed) = ConfirmDialog::show(ctx, &mut self.state, self.store.as_ref())
            {
                if confirmed {
                    self.library_view.mark_needs_refresh();
                }
            }
        }

        self.image_modal.show(ctx, &mut self.state);
    }
}

impl eframe::App for BoklibApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_initialized {
            theme::configure_style(ctx, self.state.dark_mode);
            self.style_initialized = true;
        }

        self.state.clear_old_status();

        self.show_top_panel(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.library_view
                .show(ui, &mut self.state, self.store.as_ref());
        });

        self.show_modals(ctx);
    }
}
